//! Moderation handlers
//!
//! Moderator-only endpoints for the tribute queue.

use axum::{extract::State, Json};
use memorial_service::dto::{ModerateTributeRequest, ModerationQueueResponse, ModerationResponse};
use memorial_service::ModerationService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Pending messages, recent approvals and totals
///
/// GET /admin/tributes
pub async fn moderation_queue(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ModerationQueueResponse>> {
    let service = ModerationService::new(state.service_context());
    let queue = service.moderation_queue(auth.user_id).await?;
    Ok(Json(queue))
}

/// Approve a tribute
///
/// POST /admin/tributes/approve
pub async fn approve_tribute(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ModerateTributeRequest>,
) -> ApiResult<Json<ModerationResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service
        .approve_tribute(request.tribute_id, auth.user_id)
        .await?;
    Ok(Json(response))
}

/// Reject (delete) a tribute
///
/// POST /admin/tributes/reject
pub async fn reject_tribute(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ModerateTributeRequest>,
) -> ApiResult<Json<ModerationResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service
        .reject_tribute(request.tribute_id, auth.user_id)
        .await?;
    Ok(Json(response))
}
