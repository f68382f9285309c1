//! In-memory creature repository.
//!
//! Reference adapter for the [`CreatureRepo`] port. A single `RwLock` over
//! the whole map serializes conflicting writes, which is what makes
//! `save_pair` atomic: both version checks and both inserts happen under one
//! write guard, so a half-committed battle is never observable.

use std::collections::HashMap;

use menagerie_domain::{Creature, CreatureId, UserId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{CreatureRepo, RepoError};

const ENTITY: &str = "Creature";

#[derive(Default)]
pub struct InMemoryCreatureRepo {
    creatures: RwLock<HashMap<CreatureId, Creature>>,
}

impl InMemoryCreatureRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version check against the stored record. Absent records are fine for
    /// `save` (first insert) but not for `delete`.
    fn check_version(
        stored: Option<&Creature>,
        incoming: &Creature,
    ) -> Result<(), RepoError> {
        match stored {
            Some(existing) if existing.version() != incoming.version() => Err(
                RepoError::conflict(ENTITY, incoming.id(), incoming.version()),
            ),
            _ => Ok(()),
        }
    }

    fn store(map: &mut HashMap<CreatureId, Creature>, creature: &Creature) -> Creature {
        let mut persisted = creature.clone();
        persisted.bump_version();
        map.insert(persisted.id(), persisted.clone());
        persisted
    }
}

#[async_trait::async_trait]
impl CreatureRepo for InMemoryCreatureRepo {
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError> {
        Ok(self.creatures.read().await.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Creature>, RepoError> {
        Ok(self
            .creatures
            .read()
            .await
            .values()
            .filter(|c| c.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Creature>, RepoError> {
        Ok(self.creatures.read().await.values().cloned().collect())
    }

    async fn save(&self, creature: &Creature) -> Result<Creature, RepoError> {
        let mut map = self.creatures.write().await;
        Self::check_version(map.get(&creature.id()), creature)?;
        Ok(Self::store(&mut map, creature))
    }

    async fn save_pair(
        &self,
        first: &Creature,
        second: &Creature,
    ) -> Result<(Creature, Creature), RepoError> {
        let mut map = self.creatures.write().await;
        Self::check_version(map.get(&first.id()), first)?;
        Self::check_version(map.get(&second.id()), second)?;
        let first = Self::store(&mut map, first);
        let second = Self::store(&mut map, second);
        Ok((first, second))
    }

    async fn delete(&self, creature: &Creature) -> Result<(), RepoError> {
        let mut map = self.creatures.write().await;
        match map.get(&creature.id()) {
            None => Err(RepoError::not_found(ENTITY, creature.id())),
            Some(existing) if existing.version() != creature.version() => Err(
                RepoError::conflict(ENTITY, creature.id(), creature.version()),
            ),
            Some(_) => {
                map.remove(&creature.id());
                Ok(())
            }
        }
    }
}
