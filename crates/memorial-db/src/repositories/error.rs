//! Error handling utilities for repositories

use memorial_core::error::DomainError;
use memorial_core::value_objects::MemorialId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Every driver failure surfaces as `StorageUnavailable`; callers decide
/// whether that is fatal.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StorageUnavailable(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Create a "memorial not found" error
pub fn memorial_not_found(id: MemorialId) -> DomainError {
    DomainError::MemorialNotFound(id.to_string())
}
