//! Test fixtures and data generators

use serde::{Deserialize, Serialize};

/// Generate a suffix that keeps slugs unique across test runs
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Memorial creation request
#[derive(Debug, Serialize)]
pub struct CreateMemorialRequest {
    pub pet_name: String,
    pub pet_species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl CreateMemorialRequest {
    pub fn new(pet_name: &str) -> Self {
        Self {
            pet_name: pet_name.to_string(),
            pet_species: "dog".to_string(),
            privacy: None,
            slug: None,
        }
    }

    pub fn private(mut self) -> Self {
        self.privacy = Some("private".to_string());
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }
}

/// Memorial as returned by the API
#[derive(Debug, Deserialize)]
pub struct MemorialResponse {
    pub id: String,
    pub slug: String,
    pub pet_name: String,
    pub privacy: String,
    pub view_count: i64,
    pub candle_count: i64,
    pub flower_count: i64,
}

/// Memorial page with photos
#[derive(Debug, Deserialize)]
pub struct MemorialDetailResponse {
    #[serde(flatten)]
    pub memorial: MemorialResponse,
    pub photos: Vec<PhotoResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoResponse {
    pub id: String,
    pub url: String,
    pub display_order: i32,
}

#[derive(Debug, Deserialize)]
pub struct CandleLitResponse {
    pub tribute_id: String,
    pub candle_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct FlowerOfferedResponse {
    pub tribute_id: String,
    pub flower_type: String,
    pub flower_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct TributeResponse {
    pub id: String,
    pub message: String,
    pub author_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub approved: bool,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

#[derive(Debug, Deserialize)]
pub struct TributePage {
    pub data: Vec<TributeResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PendingTributeResponse {
    pub id: String,
    pub message: String,
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModerationQueueResponse {
    pub pending: Vec<PendingTributeResponse>,
    pub recent_approved: Vec<PendingTributeResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ModerationResponse {
    pub tribute_id: String,
    pub action: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
