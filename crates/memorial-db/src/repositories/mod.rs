//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in memorial-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod memorial;
mod photo;
mod tribute;

pub use memorial::PgMemorialRepository;
pub use photo::PgPhotoRepository;
pub use tribute::PgTributeRepository;
