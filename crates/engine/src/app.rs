//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::memory::InMemoryCreatureRepo;
use crate::infrastructure::ports::{ClockPort, CreatureRepo, RandomPort};
use crate::use_cases::creatures::CreatureUseCases;

/// Main application state.
///
/// Holds the creature repository and the use cases wired against it. The
/// boundary layer (HTTP, CLI, tests) only ever talks to `creatures`.
pub struct App {
    pub creatures: CreatureUseCases,
    pub repo: Arc<dyn CreatureRepo>,
}

impl App {
    /// Compose the engine from explicit ports.
    pub fn new(
        repo: Arc<dyn CreatureRepo>,
        rng: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            creatures: CreatureUseCases::new(repo.clone(), rng, clock),
            repo,
        }
    }

    /// Compose against the in-memory adapter and the system clock.
    pub fn in_memory(rng: Arc<dyn RandomPort>) -> Self {
        Self::new(
            Arc::new(InMemoryCreatureRepo::new()),
            rng,
            Arc::new(SystemClock::new()),
        )
    }
}
