//! Create creature use case.

use std::sync::Arc;

use menagerie_domain::{CharacterClass, Creature, CreatureName, ImageUrl, RaceName, UserId};
use tracing::info;

use crate::infrastructure::ports::{ClockPort, CreatureRepo};

use super::error::CreatureError;
use super::types::CreateCreatureRequest;

/// Creates a level-1 creature at full health for the given owner.
pub struct CreateCreature {
    repo: Arc<dyn CreatureRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateCreature {
    pub fn new(repo: Arc<dyn CreatureRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(
        &self,
        owner_id: UserId,
        request: CreateCreatureRequest,
    ) -> Result<Creature, CreatureError> {
        let name = CreatureName::new(request.name)?;
        let race = RaceName::new(request.race)?;
        let class: CharacterClass = request.character_class.parse()?;
        let image_url = request.image_url.map(ImageUrl::new).transpose()?;

        let mut creature = Creature::new(owner_id, name, race, class, self.clock.now());
        creature.set_image_url(image_url);

        let saved = self.repo.save(&creature).await?;
        info!(creature_id = %saved.id(), owner_id = %owner_id, "Created creature: {}", saved.name());
        Ok(saved)
    }
}
