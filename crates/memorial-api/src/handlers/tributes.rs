//! Tribute handlers
//!
//! Candles, flowers and guestbook messages. Signing in is optional.

use axum::{
    extract::{Path, State},
    Json,
};
use memorial_core::MemorialId;
use memorial_service::dto::{
    CandleLitResponse, FlowerOfferedResponse, LightCandleRequest, OfferFlowerRequest,
    PaginatedResponse, SubmitMessageRequest, TributeResponse,
};
use memorial_service::TributeService;

use crate::extractors::{OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Approved tributes of a memorial
///
/// GET /memorials/{memorial_id}/tributes?page=&limit=
pub async fn list_tributes(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(memorial_id): Path<String>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<TributeResponse>>> {
    let memorial_id: MemorialId = memorial_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid memorial_id format"))?;

    let service = TributeService::new(state.service_context());
    let tributes = service
        .list_tributes(
            memorial_id,
            auth.user_id(),
            Some(pagination.page),
            Some(pagination.limit),
        )
        .await?;
    Ok(Json(tributes))
}

/// Light a candle
///
/// POST /tributes/candle
pub async fn light_candle(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<LightCandleRequest>,
) -> ApiResult<Json<CandleLitResponse>> {
    let actor = auth.actor();
    let service = TributeService::new(state.service_context());
    let response = service
        .light_candle(request.memorial_id, actor.as_ref())
        .await?;
    Ok(Json(response))
}

/// Offer a flower
///
/// POST /tributes/flower
pub async fn offer_flower(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<OfferFlowerRequest>,
) -> ApiResult<Json<FlowerOfferedResponse>> {
    let actor = auth.actor();
    let service = TributeService::new(state.service_context());
    let response = service
        .offer_flower(request.memorial_id, &request.flower_type, actor.as_ref())
        .await?;
    Ok(Json(response))
}

/// Leave a message for moderation
///
/// POST /tributes/message
pub async fn submit_message(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<SubmitMessageRequest>,
) -> ApiResult<Created<Json<TributeResponse>>> {
    let actor = auth.actor();
    let service = TributeService::new(state.service_context());
    let tribute = service.submit_message(request, actor.as_ref()).await?;
    Ok(Created(Json(tribute)))
}
