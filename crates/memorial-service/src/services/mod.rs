//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod memorial;
pub mod moderation;
pub mod moderators;
pub mod permission;
pub mod photo;
pub mod tribute;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use memorial::MemorialService;
pub use moderation::ModerationService;
pub use moderators::StaticModeratorDirectory;
pub use permission::{Actor, PermissionService};
pub use photo::PhotoService;
pub use tribute::TributeService;
