//! Database models - SQLx-compatible structs for PostgreSQL tables

mod memorial;
mod photo;
mod tribute;

pub use memorial::MemorialModel;
pub use photo::PhotoModel;
pub use tribute::{TributeModel, TributeStatsModel, TributeWithMemorialModel};
