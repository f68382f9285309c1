//! Request types for creature actions.
//!
//! Class tags and URLs arrive as raw wire strings; they are validated inside
//! the use cases so malformed input surfaces as a typed validation error at
//! the core boundary, not as a deserialization panic upstream.

use serde::{Deserialize, Serialize};

/// Input for creating a creature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCreatureRequest {
    pub name: String,
    pub race: String,
    pub character_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Input for updating a creature's descriptive fields. `None` leaves the
/// field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCreatureRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
