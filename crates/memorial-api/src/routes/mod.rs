//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, memorials, moderation, photos, tributes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(memorial_routes())
        .merge(tribute_routes())
        .merge(moderation_routes())
}

/// Memorial routes
///
/// `:memorial` is the slug on the page route and the memorial ID on
/// sub-resources; the router requires one name per segment.
fn memorial_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/memorials",
            get(memorials::list_my_memorials).post(memorials::create_memorial),
        )
        .route("/memorials/public", get(memorials::list_public_memorials))
        .route("/memorials/:memorial", get(memorials::get_memorial))
        .route(
            "/memorials/:memorial/photos",
            get(photos::list_photos).post(photos::add_photo),
        )
        .route("/memorials/:memorial/tributes", get(tributes::list_tributes))
}

/// Tribute routes
fn tribute_routes() -> Router<AppState> {
    Router::new()
        .route("/tributes/candle", post(tributes::light_candle))
        .route("/tributes/flower", post(tributes::offer_flower))
        .route("/tributes/message", post(tributes::submit_message))
}

/// Moderation routes
fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/tributes", get(moderation::moderation_queue))
        .route("/admin/tributes/approve", post(moderation::approve_tribute))
        .route("/admin/tributes/reject", post(moderation::reject_tribute))
}
