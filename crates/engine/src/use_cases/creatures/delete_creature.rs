//! Delete creature use case.

use std::sync::Arc;

use menagerie_domain::CreatureId;
use tracing::info;

use crate::infrastructure::ports::{CreatureRepo, RepoError};
use crate::use_cases::authorization::{ensure_owner_or_admin, Requester};

use super::error::{CreatureError, ForbiddenReason};

/// Deletes a creature. Refused while a battle is open.
pub struct DeleteCreature {
    repo: Arc<dyn CreatureRepo>,
}

impl DeleteCreature {
    pub fn new(repo: Arc<dyn CreatureRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: CreatureId,
        requester: &Requester,
    ) -> Result<(), CreatureError> {
        let creature = self
            .repo
            .get(id)
            .await?
            .ok_or(CreatureError::NotFound(id))?;
        ensure_owner_or_admin(&creature, requester)?;
        if creature.in_combat() {
            return Err(ForbiddenReason::InCombat { action: "delete" }.into());
        }

        self.repo.delete(&creature).await.map_err(|err| match err {
            RepoError::NotFound { .. } => CreatureError::NotFound(id),
            other => other.into(),
        })?;
        info!(creature_id = %id, "Deleted creature: {}", creature.name());
        Ok(())
    }
}
