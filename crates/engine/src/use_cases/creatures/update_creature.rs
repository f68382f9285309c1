//! Update creature use case.

use std::sync::Arc;

use menagerie_domain::{CharacterClass, Creature, CreatureId, CreatureName, ImageUrl, RaceName};
use tracing::info;

use crate::infrastructure::ports::CreatureRepo;
use crate::use_cases::authorization::{ensure_owner_or_admin, Requester};

use super::error::{CreatureError, ForbiddenReason};
use super::types::UpdateCreatureRequest;

/// Updates a creature's descriptive fields. Progression stats are never
/// editable; they move only through train/rest/fight.
pub struct UpdateCreature {
    repo: Arc<dyn CreatureRepo>,
}

impl UpdateCreature {
    pub fn new(repo: Arc<dyn CreatureRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: CreatureId,
        requester: &Requester,
        request: UpdateCreatureRequest,
    ) -> Result<Creature, CreatureError> {
        let mut creature = self
            .repo
            .get(id)
            .await?
            .ok_or(CreatureError::NotFound(id))?;
        ensure_owner_or_admin(&creature, requester)?;
        if creature.in_combat() {
            return Err(ForbiddenReason::InCombat { action: "update" }.into());
        }

        // Validate every supplied field before mutating anything.
        let name = request.name.map(CreatureName::new).transpose()?;
        let race = request.race.map(RaceName::new).transpose()?;
        let class = request
            .character_class
            .as_deref()
            .map(str::parse::<CharacterClass>)
            .transpose()?;
        let image_url = request.image_url.map(ImageUrl::new).transpose()?;

        if let Some(name) = name {
            creature.rename(name);
        }
        if let Some(race) = race {
            creature.set_race(race);
        }
        if let Some(class) = class {
            creature.set_class(class);
        }
        if let Some(url) = image_url {
            creature.set_image_url(Some(url));
        }

        let saved = self.repo.save(&creature).await?;
        info!(creature_id = %id, "Updated creature: {}", saved.name());
        Ok(saved)
    }
}
