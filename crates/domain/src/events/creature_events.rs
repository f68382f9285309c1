//! Creature-related domain events.
//!
//! These enums communicate what happened when creature state was modified,
//! allowing callers to react appropriately.

/// Result of applying an experience reward to a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceGain {
    /// Experience points added in this call.
    pub experience_gained: i32,
    /// Number of level thresholds crossed (0 if no level-up).
    pub levels_gained: i32,
    /// The creature's level after the gain.
    pub new_level: i32,
}

/// Outcome of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainOutcome {
    /// Creature is in an open battle and cannot train.
    InCombat,
    /// Health is at or below the training floor; no state was touched.
    Exhausted { health: i32 },
    /// Training applied: health paid, experience earned.
    Trained {
        health_cost: i32,
        gain: ExperienceGain,
    },
}

/// Outcome of resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestOutcome {
    /// Creature is in an open battle and cannot rest.
    InCombat,
    /// Already at max health; nothing to recover.
    AlreadyFull,
    /// Rest applied.
    Rested { amount_healed: i32, new_health: i32 },
}
