//! Validated value objects for the creature domain.

mod character_class;
mod image_url;
mod names;

pub use character_class::CharacterClass;
pub use image_url::ImageUrl;
pub use names::{CreatureName, RaceName};
