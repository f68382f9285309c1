//! Domain events: outcome values returned by aggregate mutations and the
//! combat simulator, so callers can react without re-deriving what changed.

mod combat_events;
mod creature_events;

pub use combat_events::{BattleDecision, BattleReport};
pub use creature_events::{ExperienceGain, RestOutcome, TrainOutcome};
