//! Permission service
//!
//! Access checks shared by the memorial, photo and moderation services.

use memorial_core::{Memorial, MemorialId, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission required to approve or reject tributes
pub const MODERATE_TRIBUTES: &str = "MODERATE_TRIBUTES";

/// Permission required to change a memorial
pub const MANAGE_MEMORIAL: &str = "MANAGE_MEMORIAL";

/// Identity taken from a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Actor {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            name: None,
            email: None,
        }
    }
}

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check if a user holds the moderator role
    #[instrument(skip(self))]
    pub async fn is_moderator(&self, user_id: UserId) -> ServiceResult<bool> {
        Ok(self.ctx.moderators().has_moderator_role(user_id).await?)
    }

    /// Check the moderator role and return error if denied
    #[instrument(skip(self))]
    pub async fn require_moderator(&self, user_id: UserId) -> ServiceResult<()> {
        if !self.is_moderator(user_id).await? {
            debug!(user_id = %user_id, "Moderation denied");
            return Err(ServiceError::permission_denied(MODERATE_TRIBUTES));
        }
        Ok(())
    }

    /// Load a memorial the user owns
    #[instrument(skip(self))]
    pub async fn require_memorial_owner(
        &self,
        memorial_id: MemorialId,
        user_id: UserId,
    ) -> ServiceResult<Memorial> {
        let memorial = self
            .ctx
            .memorial_repo()
            .find_by_id(memorial_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Memorial", memorial_id.to_string()))?;

        if !memorial.is_owned_by(user_id) {
            return Err(ServiceError::permission_denied(MANAGE_MEMORIAL));
        }
        Ok(memorial)
    }

    /// Load a memorial the viewer may read
    ///
    /// Private memorials look missing to everyone but their owner.
    #[instrument(skip(self))]
    pub async fn require_visible_memorial(
        &self,
        memorial_id: MemorialId,
        viewer: Option<UserId>,
    ) -> ServiceResult<Memorial> {
        self.ctx
            .memorial_repo()
            .find_by_id(memorial_id)
            .await?
            .filter(|m| m.is_visible_to(viewer))
            .ok_or_else(|| ServiceError::not_found("Memorial", memorial_id.to_string()))
    }
}
