//! Validated name newtypes for the creature aggregate.
//!
//! These newtypes ensure names are valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum length for creature names
const MAX_CREATURE_NAME_LENGTH: usize = 100;

/// Maximum length for race names
const MAX_RACE_NAME_LENGTH: usize = 50;

// ============================================================================
// CreatureName
// ============================================================================

/// A validated creature name (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreatureName(String);

impl CreatureName {
    /// Create a new validated creature name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming
    /// or exceeds 100 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Creature name cannot be empty"));
        }
        if trimmed.len() > MAX_CREATURE_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Creature name cannot exceed {} characters",
                MAX_CREATURE_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CreatureName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CreatureName> for String {
    fn from(name: CreatureName) -> String {
        name.0
    }
}

// ============================================================================
// RaceName
// ============================================================================

/// A validated race name (non-empty, <=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RaceName(String);

impl RaceName {
    /// Create a new validated race name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the race is empty after trimming
    /// or exceeds 50 characters.
    pub fn new(race: impl Into<String>) -> Result<Self, DomainError> {
        let race = race.into();
        let trimmed = race.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Race cannot be empty"));
        }
        if trimmed.len() > MAX_RACE_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Race cannot exceed {} characters",
                MAX_RACE_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the race as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RaceName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RaceName> for String {
    fn from(race: RaceName) -> String {
        race.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = CreatureName::new("Shadowfax").unwrap();
        assert_eq!(name.as_str(), "Shadowfax");
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = CreatureName::new("  Shadowfax  ").unwrap();
        assert_eq!(name.as_str(), "Shadowfax");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(CreatureName::new("").is_err());
        assert!(CreatureName::new("   ").is_err());
    }

    #[test]
    fn test_name_too_long_rejected() {
        assert!(CreatureName::new("x".repeat(100)).is_ok());
        assert!(CreatureName::new("x".repeat(101)).is_err());
    }

    #[test]
    fn test_race_bounds() {
        assert!(RaceName::new("Warg").is_ok());
        assert!(RaceName::new("").is_err());
        assert!(RaceName::new("x".repeat(51)).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let name = CreatureName::new("Smaug").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Smaug\"");
        let back: CreatureName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<CreatureName>("\"\"").is_err());
    }
}
