//! Service context - dependency container for services
//!
//! Holds the repositories and the moderator directory used by every service.

use std::sync::Arc;

use memorial_core::traits::{
    MemorialRepository, ModeratorDirectory, PhotoRepository, TributeRepository,
};
use memorial_core::UserId;
use memorial_db::{PgMemorialRepository, PgPhotoRepository, PgPool, PgTributeRepository};

use super::error::{ServiceError, ServiceResult};
use super::moderators::StaticModeratorDirectory;

/// Service context containing all dependencies
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    memorial_repo: Arc<dyn MemorialRepository>,
    tribute_repo: Arc<dyn TributeRepository>,
    photo_repo: Arc<dyn PhotoRepository>,
    moderators: Arc<dyn ModeratorDirectory>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        memorial_repo: Arc<dyn MemorialRepository>,
        tribute_repo: Arc<dyn TributeRepository>,
        photo_repo: Arc<dyn PhotoRepository>,
        moderators: Arc<dyn ModeratorDirectory>,
    ) -> Self {
        Self {
            memorial_repo,
            tribute_repo,
            photo_repo,
            moderators,
        }
    }

    /// Wire the PostgreSQL repositories and a configured moderator list
    pub fn postgres(pool: PgPool, moderator_ids: impl IntoIterator<Item = UserId>) -> Self {
        Self::new(
            Arc::new(PgMemorialRepository::new(pool.clone())),
            Arc::new(PgTributeRepository::new(pool.clone())),
            Arc::new(PgPhotoRepository::new(pool)),
            Arc::new(StaticModeratorDirectory::new(moderator_ids)),
        )
    }

    // === Repositories ===

    /// Get the memorial repository
    pub fn memorial_repo(&self) -> &dyn MemorialRepository {
        self.memorial_repo.as_ref()
    }

    /// Get the tribute repository
    pub fn tribute_repo(&self) -> &dyn TributeRepository {
        self.tribute_repo.as_ref()
    }

    /// Get the photo repository
    pub fn photo_repo(&self) -> &dyn PhotoRepository {
        self.photo_repo.as_ref()
    }

    // === Access Control ===

    /// Get the moderator directory
    pub fn moderators(&self) -> &dyn ModeratorDirectory {
        self.moderators.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("moderators", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    memorial_repo: Option<Arc<dyn MemorialRepository>>,
    tribute_repo: Option<Arc<dyn TributeRepository>>,
    photo_repo: Option<Arc<dyn PhotoRepository>>,
    moderators: Option<Arc<dyn ModeratorDirectory>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memorial_repo(mut self, repo: Arc<dyn MemorialRepository>) -> Self {
        self.memorial_repo = Some(repo);
        self
    }

    pub fn tribute_repo(mut self, repo: Arc<dyn TributeRepository>) -> Self {
        self.tribute_repo = Some(repo);
        self
    }

    pub fn photo_repo(mut self, repo: Arc<dyn PhotoRepository>) -> Self {
        self.photo_repo = Some(repo);
        self
    }

    pub fn moderators(mut self, directory: Arc<dyn ModeratorDirectory>) -> Self {
        self.moderators = Some(directory);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.memorial_repo
                .ok_or_else(|| ServiceError::validation("memorial_repo is required"))?,
            self.tribute_repo
                .ok_or_else(|| ServiceError::validation("tribute_repo is required"))?,
            self.photo_repo
                .ok_or_else(|| ServiceError::validation("photo_repo is required"))?,
            self.moderators
                .ok_or_else(|| ServiceError::validation("moderators is required"))?,
        ))
    }
}
