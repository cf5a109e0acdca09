//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::TributeId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// Looked up by id or slug
    #[error("Memorial not found: {0}")]
    MemorialNotFound(String),

    #[error("Tribute not found: {0}")]
    TributeNotFound(TributeId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Message too long: max {max} characters")]
    MessageTooLong { max: usize },

    #[error("Invalid flower type: {0}")]
    InvalidFlowerType(String),

    #[error("Invalid tribute kind: {0}")]
    InvalidTributeKind(String),

    #[error("Invalid privacy setting: {0}")]
    InvalidPrivacy(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Moderator role required")]
    NotModerator,

    #[error("Not memorial owner")]
    NotMemorialOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slug already in use")]
    SlugAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemorialNotFound(_) => "UNKNOWN_MEMORIAL",
            Self::TributeNotFound(_) => "UNKNOWN_TRIBUTE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::MessageTooLong { .. } => "MESSAGE_TOO_LONG",
            Self::InvalidFlowerType(_) => "INVALID_FLOWER_TYPE",
            Self::InvalidTributeKind(_) => "INVALID_TRIBUTE_KIND",
            Self::InvalidPrivacy(_) => "INVALID_PRIVACY",
            Self::InvalidSlug(_) => "INVALID_SLUG",

            // Authorization
            Self::NotModerator => "NOT_MODERATOR",
            Self::NotMemorialOwner => "NOT_MEMORIAL_OWNER",

            // Conflict
            Self::SlugAlreadyExists => "SLUG_ALREADY_EXISTS",

            // Infrastructure
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else if self.is_storage() {
            503
        } else {
            500
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemorialNotFound(_) | Self::TributeNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyMessage
                | Self::MessageTooLong { .. }
                | Self::InvalidFlowerType(_)
                | Self::InvalidTributeKind(_)
                | Self::InvalidPrivacy(_)
                | Self::InvalidSlug(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotModerator | Self::NotMemorialOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SlugAlreadyExists)
    }

    /// Check if the relational store could not be reached or failed mid-statement
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}
