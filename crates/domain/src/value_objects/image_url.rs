//! Validated image URL for creature portraits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum length for image URLs
const MAX_IMAGE_URL_LENGTH: usize = 512;

/// A validated http(s) image URL (<=512 chars, trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Create a new validated image URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the URL is empty, exceeds 512
    /// characters, or does not use the http/https scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Image URL cannot be empty"));
        }
        if trimmed.len() > MAX_IMAGE_URL_LENGTH {
            return Err(DomainError::validation(format!(
                "Image URL cannot exceed {} characters",
                MAX_IMAGE_URL_LENGTH
            )));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(DomainError::validation(
                "Image URL must use the http or https scheme",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> String {
        url.0
    }
}
