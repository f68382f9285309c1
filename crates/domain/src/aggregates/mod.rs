//! Domain aggregates.

mod creature;

pub use creature::{
    Creature, LEVEL_THRESHOLD, MIN_TRAINING_HEALTH, STARTING_ATTACK, STARTING_DEFENSE,
    STARTING_MAX_HEALTH,
};
