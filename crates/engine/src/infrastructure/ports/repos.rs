//! Repository port traits for creature persistence.

use async_trait::async_trait;
use menagerie_domain::{Creature, CreatureId, UserId};

use super::error::RepoError;

/// Persistence contract for creatures.
///
/// `save` and `delete` enforce the optimistic-concurrency token: the stored
/// `version` must match the one on the passed creature, otherwise the call
/// fails with [`RepoError::Conflict`] and the caller must retry from a fresh
/// read. `save` returns the stored creature with its version advanced.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureRepo: Send + Sync {
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError>;

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Creature>, RepoError>;

    async fn list_all(&self) -> Result<Vec<Creature>, RepoError>;

    async fn save(&self, creature: &Creature) -> Result<Creature, RepoError>;

    /// Persist two creatures in one atomic unit. Either both versions check
    /// out and both records are written, or nothing is.
    async fn save_pair(
        &self,
        first: &Creature,
        second: &Creature,
    ) -> Result<(Creature, Creature), RepoError>;

    async fn delete(&self, creature: &Creature) -> Result<(), RepoError>;
}
