//! Error taxonomy for creature actions.
//!
//! Four domain-visible kinds plus a distinct internal category. Storage
//! failures are never masked as one of the four domain kinds, and no action
//! coerces a failure into a default value.

use menagerie_domain::{CreatureId, DomainError};

use crate::infrastructure::ports::RepoError;

/// Typed error returned by every creature action.
#[derive(Debug, thiserror::Error)]
pub enum CreatureError {
    /// Referenced creature does not exist.
    #[error("Creature not found: {0}")]
    NotFound(CreatureId),

    /// Authorization or precondition failure; no state was touched.
    #[error("{0}")]
    Forbidden(#[from] ForbiddenReason),

    /// Malformed input fields.
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// Optimistic version mismatch on save; re-read and retry.
    #[error("Concurrent update detected; re-read the creature and retry")]
    Conflict,

    /// Unexpected storage failure - deliberately distinct from the four
    /// domain kinds above.
    #[error("Internal storage error")]
    Internal(#[source] RepoError),
}

/// The closed set of reasons an action is forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ForbiddenReason {
    #[error("This creature does not belong to you")]
    NotOwner,

    #[error("A creature cannot fight itself")]
    SelfFight,

    #[error("One of the creatures is already in combat")]
    AlreadyInCombat,

    #[error("Cannot {action} while in combat")]
    InCombat { action: &'static str },

    #[error("Not enough health to train")]
    NotEnoughHealth,
}

impl From<RepoError> for CreatureError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Conflict { .. } => Self::Conflict,
            other => Self::Internal(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_conflict_maps_to_conflict() {
        let err: CreatureError = RepoError::conflict("Creature", "abc", 1).into();
        assert!(matches!(err, CreatureError::Conflict));
    }

    #[test]
    fn test_repo_storage_failure_stays_internal() {
        let err: CreatureError = RepoError::storage("save", "disk on fire").into();
        assert!(matches!(err, CreatureError::Internal(_)));
    }

    #[test]
    fn test_forbidden_messages() {
        assert_eq!(
            ForbiddenReason::NotOwner.to_string(),
            "This creature does not belong to you"
        );
        assert_eq!(
            ForbiddenReason::InCombat { action: "train" }.to_string(),
            "Cannot train while in combat"
        );
    }
}
