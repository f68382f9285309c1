//! Combat domain events.

use serde::{Deserialize, Serialize};

use crate::ids::CreatureId;

/// How a battle's winner was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleDecision {
    /// One creature's health reached zero.
    Knockout,
    /// Round cap reached; higher remaining health wins.
    HigherHealth,
    /// Round cap reached with equal health; the attacker wins.
    TieBreak,
}

/// Summary of a resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub winner: CreatureId,
    pub loser: CreatureId,
    /// Rounds fought (at most the simulator's round cap).
    pub rounds: u32,
    /// True when the initiating creature won.
    pub attacker_won: bool,
    pub decided_by: BattleDecision,
}
