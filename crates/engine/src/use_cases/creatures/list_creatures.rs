//! List creatures use case.

use std::sync::Arc;

use menagerie_domain::Creature;
use tracing::debug;

use crate::infrastructure::ports::CreatureRepo;
use crate::use_cases::authorization::Requester;

use super::error::CreatureError;

/// Lists the requester's creatures; admins see every creature.
pub struct ListCreatures {
    repo: Arc<dyn CreatureRepo>,
}

impl ListCreatures {
    pub fn new(repo: Arc<dyn CreatureRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, requester: &Requester) -> Result<Vec<Creature>, CreatureError> {
        debug!(user_id = %requester.user_id, admin = requester.is_admin, "Listing creatures");
        let creatures = if requester.is_admin {
            self.repo.list_all().await?
        } else {
            self.repo.list_by_owner(requester.user_id).await?
        };
        Ok(creatures)
    }
}
