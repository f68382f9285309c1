//! Fight use case - the battle transaction.
//!
//! A fight is a single synchronous transaction: every precondition is checked
//! before any state changes, the whole simulation runs on in-memory copies,
//! and both records land in one atomic `save_pair`. There is no persisted
//! mid-fight state, so a failure anywhere leaves both stored records exactly
//! as they were - including their `in_combat` flags.

use std::sync::Arc;

use menagerie_domain::{Creature, CreatureId};
use tracing::info;

use crate::infrastructure::ports::CreatureRepo;
use crate::use_cases::authorization::{ensure_owner_or_admin, Requester};
use crate::use_cases::combat::CombatSimulator;

use super::error::{CreatureError, ForbiddenReason};

/// Resolves a fight between the requester's attacker and an opponent.
pub struct FightCreatures {
    repo: Arc<dyn CreatureRepo>,
    simulator: CombatSimulator,
}

impl FightCreatures {
    pub fn new(repo: Arc<dyn CreatureRepo>, simulator: CombatSimulator) -> Self {
        Self { repo, simulator }
    }

    /// Returns the updated attacker. The opponent's reward is persisted in
    /// the same atomic unit even though it is not returned.
    pub async fn execute(
        &self,
        attacker_id: CreatureId,
        opponent_id: CreatureId,
        requester: &Requester,
    ) -> Result<Creature, CreatureError> {
        if attacker_id == opponent_id {
            return Err(ForbiddenReason::SelfFight.into());
        }

        let mut attacker = self
            .repo
            .get(attacker_id)
            .await?
            .ok_or(CreatureError::NotFound(attacker_id))?;
        let mut opponent = self
            .repo
            .get(opponent_id)
            .await?
            .ok_or(CreatureError::NotFound(opponent_id))?;

        // Only the attacker must be yours; anyone's creature can be challenged.
        ensure_owner_or_admin(&attacker, requester)?;

        if attacker.in_combat() || opponent.in_combat() {
            return Err(ForbiddenReason::AlreadyInCombat.into());
        }

        attacker.enter_combat();
        opponent.enter_combat();

        let report = self.simulator.resolve(&mut attacker, &mut opponent);

        attacker.leave_combat();
        opponent.leave_combat();
        attacker.clamp_health();
        opponent.clamp_health();

        let (attacker, _opponent) = self.repo.save_pair(&attacker, &opponent).await?;
        info!(
            winner = %report.winner,
            loser = %report.loser,
            rounds = report.rounds,
            decided_by = ?report.decided_by,
            "Battle resolved"
        );
        Ok(attacker)
    }
}
