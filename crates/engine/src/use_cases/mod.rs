//! Use cases - one struct per public action, orchestrating
//! guard -> domain mutation -> atomic persist.

pub mod authorization;
pub mod combat;
pub mod creatures;

pub use authorization::Requester;
pub use combat::CombatSimulator;
pub use creatures::{
    CreateCreatureRequest, CreatureError, CreatureUseCases, ForbiddenReason,
    UpdateCreatureRequest,
};
