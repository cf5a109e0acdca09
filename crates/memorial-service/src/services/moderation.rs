//! Moderation service
//!
//! Approve or reject guestbook messages. Every operation requires the
//! moderator role.

use memorial_core::{TributeId, UserId};
use tracing::{info, instrument};

use crate::dto::{
    ModerationAction, ModerationQueueResponse, ModerationResponse, PendingTributeResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Approved tributes shown below the queue
pub const RECENT_APPROVED_LIMIT: i64 = 10;

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Make a tribute public. Approving twice is a no-op.
    #[instrument(skip(self))]
    pub async fn approve_tribute(
        &self,
        tribute_id: TributeId,
        moderator_id: UserId,
    ) -> ServiceResult<ModerationResponse> {
        PermissionService::new(self.ctx)
            .require_moderator(moderator_id)
            .await?;

        if !self.ctx.tribute_repo().approve(tribute_id).await? {
            return Err(ServiceError::not_found("Tribute", tribute_id.to_string()));
        }

        info!(tribute_id = %tribute_id, moderator_id = %moderator_id, "Tribute approved");

        Ok(ModerationResponse {
            tribute_id,
            action: ModerationAction::Approved,
        })
    }

    /// Delete a tribute permanently. A missing tribute counts as rejected.
    #[instrument(skip(self))]
    pub async fn reject_tribute(
        &self,
        tribute_id: TributeId,
        moderator_id: UserId,
    ) -> ServiceResult<ModerationResponse> {
        PermissionService::new(self.ctx)
            .require_moderator(moderator_id)
            .await?;

        let deleted = self.ctx.tribute_repo().delete(tribute_id).await?;

        info!(
            tribute_id = %tribute_id,
            moderator_id = %moderator_id,
            deleted,
            "Tribute rejected"
        );

        Ok(ModerationResponse {
            tribute_id,
            action: ModerationAction::Rejected,
        })
    }

    /// Pending messages, recent approvals and totals
    #[instrument(skip(self))]
    pub async fn moderation_queue(
        &self,
        moderator_id: UserId,
    ) -> ServiceResult<ModerationQueueResponse> {
        PermissionService::new(self.ctx)
            .require_moderator(moderator_id)
            .await?;

        let repo = self.ctx.tribute_repo();
        let pending = repo.find_pending().await?;
        let recent_approved = repo.find_recent_approved(RECENT_APPROVED_LIMIT).await?;
        let stats = repo.stats().await?;

        Ok(ModerationQueueResponse {
            pending: pending.into_iter().map(PendingTributeResponse::from).collect(),
            recent_approved: recent_approved
                .into_iter()
                .map(PendingTributeResponse::from)
                .collect(),
            stats: stats.into(),
        })
    }
}
