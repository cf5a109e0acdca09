//! Value objects - immutable types that represent domain concepts

mod ids;
mod slug;

pub use ids::{IdParseError, MemorialId, PhotoId, TributeId, UserId};
pub use slug::{generate_slug, generate_slug_with_suffix, is_valid_slug, MAX_SLUG_CHARS};
