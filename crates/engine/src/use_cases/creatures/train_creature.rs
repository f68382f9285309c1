//! Train creature use case.

use std::sync::Arc;

use menagerie_domain::{Creature, CreatureId, TrainOutcome};
use tracing::info;

use crate::infrastructure::ports::CreatureRepo;
use crate::use_cases::authorization::{ensure_owner_or_admin, Requester};

use super::error::{CreatureError, ForbiddenReason};

/// Training: pay health, earn experience, maybe level up.
pub struct TrainCreature {
    repo: Arc<dyn CreatureRepo>,
}

impl TrainCreature {
    pub fn new(repo: Arc<dyn CreatureRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: CreatureId,
        requester: &Requester,
    ) -> Result<Creature, CreatureError> {
        let mut creature = self
            .repo
            .get(id)
            .await?
            .ok_or(CreatureError::NotFound(id))?;
        ensure_owner_or_admin(&creature, requester)?;

        match creature.train() {
            TrainOutcome::InCombat => {
                Err(ForbiddenReason::InCombat { action: "train" }.into())
            }
            TrainOutcome::Exhausted { .. } => Err(ForbiddenReason::NotEnoughHealth.into()),
            TrainOutcome::Trained { health_cost, gain } => {
                let saved = self.repo.save(&creature).await?;
                info!(
                    creature_id = %id,
                    health_cost,
                    levels_gained = gain.levels_gained,
                    "Trained creature: {}",
                    saved.name()
                );
                Ok(saved)
            }
        }
    }
}
