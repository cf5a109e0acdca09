//! Entity to model mappers
//!
//! This module provides conversions between domain entities (memorial-core) and database models.
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod memorial;
mod photo;
mod tribute;

pub use memorial::{memorials_from_models, MemorialInsert};
pub use photo::PhotoInsert;
pub use tribute::TributeInsert;
