//! Get creature use case.

use std::sync::Arc;

use menagerie_domain::{Creature, CreatureId};
use tracing::debug;

use crate::infrastructure::ports::CreatureRepo;
use crate::use_cases::authorization::{ensure_owner_or_admin, Requester};

use super::error::CreatureError;

/// Loads a single creature, visible to its owner or an admin.
pub struct GetCreature {
    repo: Arc<dyn CreatureRepo>,
}

impl GetCreature {
    pub fn new(repo: Arc<dyn CreatureRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: CreatureId,
        requester: &Requester,
    ) -> Result<Creature, CreatureError> {
        debug!(creature_id = %id, "Fetching creature");
        let creature = self
            .repo
            .get(id)
            .await?
            .ok_or(CreatureError::NotFound(id))?;
        ensure_owner_or_admin(&creature, requester)?;
        Ok(creature)
    }
}
