//! Ownership guard.

use menagerie_domain::{Creature, UserId};

use super::creatures::{CreatureError, ForbiddenReason};

/// Identity of the caller, as established by the (out-of-scope) auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub user_id: UserId,
    pub is_admin: bool,
}

impl Requester {
    pub fn user(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    pub fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }
}

/// Pure, side-effect-free ownership check, called before every action that
/// is not globally admin-scoped.
pub fn ensure_owner_or_admin(
    creature: &Creature,
    requester: &Requester,
) -> Result<(), CreatureError> {
    if requester.is_admin || creature.owner_id() == requester.user_id {
        Ok(())
    } else {
        Err(CreatureError::Forbidden(ForbiddenReason::NotOwner))
    }
}
