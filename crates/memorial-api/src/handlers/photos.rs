//! Photo handlers

use axum::{
    extract::{Path, State},
    Json,
};
use memorial_core::MemorialId;
use memorial_service::dto::{AddPhotoRequest, PhotoResponse};
use memorial_service::PhotoService;

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_memorial_id(raw: &str) -> Result<MemorialId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid memorial_id format"))
}

/// List a memorial's photos
///
/// GET /memorials/{memorial_id}/photos
pub async fn list_photos(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(memorial_id): Path<String>,
) -> ApiResult<Json<Vec<PhotoResponse>>> {
    let memorial_id = parse_memorial_id(&memorial_id)?;

    let service = PhotoService::new(state.service_context());
    let photos = service.list_photos(memorial_id, auth.user_id()).await?;
    Ok(Json(photos))
}

/// Attach a photo to an owned memorial
///
/// POST /memorials/{memorial_id}/photos
pub async fn add_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(memorial_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddPhotoRequest>,
) -> ApiResult<Created<Json<PhotoResponse>>> {
    let memorial_id = parse_memorial_id(&memorial_id)?;

    let service = PhotoService::new(state.service_context());
    let photo = service.add_photo(auth.user_id, memorial_id, request).await?;
    Ok(Created(Json(photo)))
}
