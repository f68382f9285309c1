//! Character class tags.
//!
//! The class set is closed: the wire representation is the lowercase tag and
//! parsing is total over the known set. Unknown tags fail with a parse error
//! instead of panicking inside an enum lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Closed set of creature character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Mage,
    Knight,
    Thief,
    Ranger,
    Cleric,
    Bard,
    Druid,
    Paladin,
    Assassin,
    Warlock,
    Monk,
    Barbarian,
}

impl CharacterClass {
    /// All known classes, in declaration order.
    pub const ALL: [CharacterClass; 12] = [
        Self::Mage,
        Self::Knight,
        Self::Thief,
        Self::Ranger,
        Self::Cleric,
        Self::Bard,
        Self::Druid,
        Self::Paladin,
        Self::Assassin,
        Self::Warlock,
        Self::Monk,
        Self::Barbarian,
    ];

    /// The lowercase wire tag for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mage => "mage",
            Self::Knight => "knight",
            Self::Thief => "thief",
            Self::Ranger => "ranger",
            Self::Cleric => "cleric",
            Self::Bard => "bard",
            Self::Druid => "druid",
            Self::Paladin => "paladin",
            Self::Assassin => "assassin",
            Self::Warlock => "warlock",
            Self::Monk => "monk",
            Self::Barbarian => "barbarian",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    /// Parse a class tag. Input is trimmed and case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mage" => Ok(Self::Mage),
            "knight" => Ok(Self::Knight),
            "thief" => Ok(Self::Thief),
            "ranger" => Ok(Self::Ranger),
            "cleric" => Ok(Self::Cleric),
            "bard" => Ok(Self::Bard),
            "druid" => Ok(Self::Druid),
            "paladin" => Ok(Self::Paladin),
            "assassin" => Ok(Self::Assassin),
            "warlock" => Ok(Self::Warlock),
            "monk" => Ok(Self::Monk),
            "barbarian" => Ok(Self::Barbarian),
            other => Err(DomainError::parse(format!(
                "Unknown character class: {}",
                other
            ))),
        }
    }
}
