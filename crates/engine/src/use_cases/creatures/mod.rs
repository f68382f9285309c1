//! Creature lifecycle use cases.
//!
//! Every public action follows the same orchestration:
//! load -> authorize -> mutate through the aggregate -> persist atomically.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, CreatureRepo, RandomPort};
use crate::use_cases::combat::CombatSimulator;

mod create_creature;
mod delete_creature;
mod error;
mod fight_creatures;
mod get_creature;
mod list_creatures;
mod rest_creature;
mod train_creature;
mod types;
mod update_creature;

pub use create_creature::CreateCreature;
pub use delete_creature::DeleteCreature;
pub use error::{CreatureError, ForbiddenReason};
pub use fight_creatures::FightCreatures;
pub use get_creature::GetCreature;
pub use list_creatures::ListCreatures;
pub use rest_creature::RestCreature;
pub use train_creature::TrainCreature;
pub use types::{CreateCreatureRequest, UpdateCreatureRequest};
pub use update_creature::UpdateCreature;

/// Container for all creature use cases - the lifecycle facade handed to the
/// boundary layer.
pub struct CreatureUseCases {
    pub create: CreateCreature,
    pub get: GetCreature,
    pub list: ListCreatures,
    pub update: UpdateCreature,
    pub delete: DeleteCreature,
    pub train: TrainCreature,
    pub rest: RestCreature,
    pub fight: FightCreatures,
}

impl CreatureUseCases {
    pub fn new(
        repo: Arc<dyn CreatureRepo>,
        rng: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            create: CreateCreature::new(repo.clone(), clock),
            get: GetCreature::new(repo.clone()),
            list: ListCreatures::new(repo.clone()),
            update: UpdateCreature::new(repo.clone()),
            delete: DeleteCreature::new(repo.clone()),
            train: TrainCreature::new(repo.clone()),
            rest: RestCreature::new(repo.clone()),
            fight: FightCreatures::new(repo, CombatSimulator::new(rng)),
        }
    }
}
