//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Ports exist for:
//! - Persistence (the in-memory adapter could be swapped for a database)
//! - Clock/Random (for deterministic tests and reproducible battles)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::CreatureRepo;
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use repos::MockCreatureRepo;

#[cfg(test)]
pub use testing::MockClockPort;
