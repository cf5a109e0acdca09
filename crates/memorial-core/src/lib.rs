//! # memorial-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_message, Counter, FlowerType, Memorial, Photo, Privacy, Tribute, TributeKind,
    TributeWithMemorial, ANONYMOUS_AUTHOR, CANDLE_MESSAGE, MAX_MESSAGE_CHARS,
};
pub use error::DomainError;
pub use traits::{
    MemorialRepository, MemorialSort, ModeratorDirectory, PageQuery, PhotoRepository, RepoResult,
    TributeRepository, TributeStats,
};
pub use value_objects::{
    generate_slug, is_valid_slug, IdParseError, MemorialId, PhotoId, TributeId, UserId,
    MAX_SLUG_CHARS,
};
