//! Service layer errors
//!
//! Domain failures pass through unchanged; the service adds lookups that
//! came back empty, missing capabilities and request shape problems.

use memorial_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or storage failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The actor lacks a capability such as `MODERATE_TRIBUTES`
    #[error("Missing required permission: {permission}")]
    PermissionDenied { permission: &'static str },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn permission_denied(permission: &'static str) -> Self {
        Self::PermissionDenied { permission }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
        }
    }

    /// Machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::PermissionDenied { .. } => "MISSING_PERMISSIONS",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.status_code() == 400
    }

    #[inline]
    pub fn is_permission_denied(&self) -> bool {
        self.status_code() == 403
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
