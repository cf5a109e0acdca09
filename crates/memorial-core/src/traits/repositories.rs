//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Counters are never written from a value read into memory. Every counter
//! change goes through [`MemorialRepository::increment_view`] or
//! [`TributeRepository::create_with_counter`], which increment in place.

use async_trait::async_trait;
use std::str::FromStr;

use crate::entities::{Memorial, Photo, Tribute, TributeWithMemorial};
use crate::error::DomainError;
use crate::value_objects::{MemorialId, TributeId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Memorial Repository
// ============================================================================

/// Ordering of the public memorial wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemorialSort {
    /// Newest first
    #[default]
    Latest,
    /// Highest view + candle + flower total first
    Popular,
}

impl FromStr for MemorialSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            "popular" => Ok(Self::Popular),
            other => Err(DomainError::ValidationError(format!(
                "unknown sort order: {other}"
            ))),
        }
    }
}

#[async_trait]
pub trait MemorialRepository: Send + Sync {
    /// Find memorial by ID
    async fn find_by_id(&self, id: MemorialId) -> RepoResult<Option<Memorial>>;

    /// Find memorial by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Memorial>>;

    /// List an owner's memorials, newest first
    async fn find_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Memorial>>;

    /// List public memorials for the memorial wall
    async fn find_public(&self, sort: MemorialSort, limit: i64) -> RepoResult<Vec<Memorial>>;

    /// Create a new memorial. A taken slug yields `SlugAlreadyExists`.
    async fn create(&self, memorial: &Memorial) -> RepoResult<()>;

    /// Increment `view_count` in a single statement.
    /// Returns false when no memorial has this ID.
    async fn increment_view(&self, id: MemorialId) -> RepoResult<bool>;
}

// ============================================================================
// Tribute Repository
// ============================================================================

/// Offset pagination for tribute listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

/// Tribute totals shown on the moderation dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TributeStats {
    pub pending: i64,
    pub approved: i64,
}

#[async_trait]
pub trait TributeRepository: Send + Sync {
    /// Find tribute by ID
    async fn find_by_id(&self, id: TributeId) -> RepoResult<Option<Tribute>>;

    /// Approved tributes of a memorial, newest first
    async fn find_approved_by_memorial(
        &self,
        memorial_id: MemorialId,
        page: PageQuery,
    ) -> RepoResult<Vec<Tribute>>;

    /// All tributes awaiting moderation, newest first
    async fn find_pending(&self) -> RepoResult<Vec<TributeWithMemorial>>;

    /// Most recently approved tributes
    async fn find_recent_approved(&self, limit: i64) -> RepoResult<Vec<TributeWithMemorial>>;

    /// Count pending and approved tributes
    async fn stats(&self) -> RepoResult<TributeStats>;

    /// Insert a tribute that touches no counter
    async fn create(&self, tribute: &Tribute) -> RepoResult<()>;

    /// Increment the counter matching the tribute's kind and insert the
    /// tribute as one atomic unit. Returns the new counter value.
    ///
    /// Fails with `MemorialNotFound` (and persists nothing) if the memorial
    /// does not exist, and with `InvalidTributeKind` for message tributes.
    async fn create_with_counter(&self, tribute: &Tribute) -> RepoResult<i64>;

    /// Set `approved = true`. Returns false when no tribute has this ID.
    async fn approve(&self, id: TributeId) -> RepoResult<bool>;

    /// Delete the tribute row. Returns false when nothing was deleted.
    async fn delete(&self, id: TributeId) -> RepoResult<bool>;
}

// ============================================================================
// Photo Repository
// ============================================================================

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Create a new photo record
    async fn create(&self, photo: &Photo) -> RepoResult<()>;

    /// Photos of a memorial ordered by `display_order`, then upload time
    async fn find_by_memorial(&self, memorial_id: MemorialId) -> RepoResult<Vec<Photo>>;
}

// ============================================================================
// Access Control
// ============================================================================

/// Answers whether a user may moderate tributes
#[async_trait]
pub trait ModeratorDirectory: Send + Sync {
    async fn has_moderator_role(&self, actor: UserId) -> RepoResult<bool>;
}
