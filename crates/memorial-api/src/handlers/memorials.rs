//! Memorial handlers
//!
//! Endpoints for creating memorials, the memorial page and the public wall.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use memorial_service::dto::{CreateMemorialRequest, MemorialDetailResponse, MemorialResponse};
use memorial_service::MemorialService;
use serde::Deserialize;

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Query parameters for the public wall
#[derive(Debug, Default, Deserialize)]
pub struct PublicMemorialsQuery {
    /// `latest` or `popular`
    pub sort: Option<String>,
    pub limit: Option<i64>,
}

/// Create a memorial
///
/// POST /memorials
pub async fn create_memorial(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMemorialRequest>,
) -> ApiResult<Created<Json<MemorialResponse>>> {
    let service = MemorialService::new(state.service_context());
    let memorial = service.create_memorial(auth.user_id, request).await?;
    Ok(Created(Json(memorial)))
}

/// List the caller's memorials
///
/// GET /memorials
pub async fn list_my_memorials(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MemorialResponse>>> {
    let service = MemorialService::new(state.service_context());
    let memorials = service.list_my_memorials(auth.user_id).await?;
    Ok(Json(memorials))
}

/// Public memorial wall (no auth required)
///
/// GET /memorials/public?sort=&limit=
pub async fn list_public_memorials(
    State(state): State<AppState>,
    Query(query): Query<PublicMemorialsQuery>,
) -> ApiResult<Json<Vec<MemorialResponse>>> {
    let service = MemorialService::new(state.service_context());
    let memorials = service
        .list_public_memorials(query.sort.as_deref(), query.limit)
        .await?;
    Ok(Json(memorials))
}

/// Memorial page by slug
///
/// GET /memorials/{slug}
pub async fn get_memorial(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<MemorialDetailResponse>> {
    let service = MemorialService::new(state.service_context());
    let memorial = service.get_memorial(&slug, auth.user_id()).await?;
    Ok(Json(memorial))
}
