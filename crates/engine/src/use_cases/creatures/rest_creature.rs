//! Rest creature use case.

use std::sync::Arc;

use menagerie_domain::{Creature, CreatureId, RestOutcome};
use tracing::{debug, info};

use crate::infrastructure::ports::CreatureRepo;
use crate::use_cases::authorization::{ensure_owner_or_admin, Requester};

use super::error::{CreatureError, ForbiddenReason};

/// Resting: recover health, capped at max. No experience change.
pub struct RestCreature {
    repo: Arc<dyn CreatureRepo>,
}

impl RestCreature {
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

        match creature.rest() {
            RestOutcome::InCombat => Err(ForbiddenReason::InCombat { action: "rest" }.into()),
            RestOutcome::AlreadyFull => {
                // Nothing changed; skip the write and hand back the record as read.
                debug!(creature_id = %id, "Rest skipped, already at max health");
                Ok(creature)
            }
            RestOutcome::Rested {
                amount_healed,
                new_health,
            } => {
                let saved = self.repo.save(&creature).await?;
                info!(creature_id = %id, amount_healed, new_health, "Rested creature: {}", saved.name());
                Ok(saved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use menagerie_domain::{CharacterClass, CreatureName, RaceName, UserId};

    use crate::infrastructure::ports::MockCreatureRepo;

    fn creature(owner: UserId) -> Creature {
        Creature::new(
            owner,
            CreatureName::new("Fatty Lumpkin").unwrap(),
            RaceName::new("Pony").unwrap(),
            CharacterClass::Druid,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_rest_heals_up_to_the_cap() {
        let owner = UserId::new();
        let mut c = creature(owner);
        c.take_damage(50);

        let mut repo = MockCreatureRepo::new();
        let stored = c.clone();
        repo.expect_get().returning(move |_| Ok(Some(stored.clone())));
        repo.expect_save()
            .withf(|c| c.health() == 65)
            .returning(|c| {
                let mut saved = c.clone();
                saved.bump_version();
                Ok(saved)
            });

        let rested = RestCreature::new(Arc::new(repo))
            .execute(c.id(), &Requester::user(owner))
            .await
            .unwrap();
        assert_eq!(rested.health(), 65);
    }

    #[tokio::test]
    async fn when_already_at_max_health_skips_the_write() {
        let owner = UserId::new();
        let c = creature(owner);

        let mut repo = MockCreatureRepo::new();
        let stored = c.clone();
        repo.expect_get().returning(move |_| Ok(Some(stored.clone())));
        repo.expect_save().never();

        let rested = RestCreature::new(Arc::new(repo))
            .execute(c.id(), &Requester::user(owner))
            .await
            .unwrap();
        assert_eq!(rested.health(), rested.max_health());
    }

    #[tokio::test]
    async fn when_in_combat_returns_forbidden_without_saving() {
        let owner = UserId::new();
        let mut c = creature(owner);
        c.take_damage(20);
        c.enter_combat();

        let mut repo = MockCreatureRepo::new();
        let stored = c.clone();
        repo.expect_get().returning(move |_| Ok(Some(stored.clone())));
        repo.expect_save().never();

        let err = RestCreature::new(Arc::new(repo))
            .execute(c.id(), &Requester::user(owner))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CreatureError::Forbidden(ForbiddenReason::InCombat { action: "rest" })
        ));
    }
}
