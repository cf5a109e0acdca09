//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! IDs are serialized as UUID strings.

use chrono::{DateTime, NaiveDate, Utc};
use memorial_core::{
    FlowerType, MemorialId, PhotoId, Privacy, TributeId, TributeKind, UserId,
};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with page-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, limit: i64, has_more: bool) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                page,
                limit,
                has_more,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: i64,
    /// Page size limit used
    pub limit: i64,
    /// Whether more results exist
    pub has_more: bool,
}

// ============================================================================
// Memorial Responses
// ============================================================================

/// Memorial response
#[derive(Debug, Clone, Serialize)]
pub struct MemorialResponse {
    pub id: MemorialId,
    pub owner_id: UserId,
    pub slug: String,
    pub pet_name: String,
    pub pet_species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memorial_text: Option<String>,
    pub privacy: Privacy,
    pub template_id: i32,
    pub view_count: i64,
    pub candle_count: i64,
    pub flower_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Memorial page: the memorial and its photo gallery
#[derive(Debug, Clone, Serialize)]
pub struct MemorialDetailResponse {
    #[serde(flatten)]
    pub memorial: MemorialResponse,
    pub photos: Vec<PhotoResponse>,
}

// ============================================================================
// Photo Responses
// ============================================================================

/// Photo response
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: PhotoId,
    pub memorial_id: MemorialId,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}

// ============================================================================
// Tribute Responses
// ============================================================================

/// Public tribute response (author email is never exposed)
#[derive(Debug, Clone, Serialize)]
pub struct TributeResponse {
    pub id: TributeId,
    pub memorial_id: MemorialId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: TributeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flower_type: Option<FlowerType>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Result of lighting a candle
#[derive(Debug, Clone, Serialize)]
pub struct CandleLitResponse {
    pub tribute_id: TributeId,
    pub candle_count: i64,
}

/// Result of offering a flower
#[derive(Debug, Clone, Serialize)]
pub struct FlowerOfferedResponse {
    pub tribute_id: TributeId,
    pub flower_type: FlowerType,
    pub flower_count: i64,
}

// ============================================================================
// Moderation Responses
// ============================================================================

/// Tribute as seen by a moderator
#[derive(Debug, Clone, Serialize)]
pub struct PendingTributeResponse {
    #[serde(flatten)]
    pub tribute: TributeResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Tribute totals
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TributeStatsResponse {
    pub pending: i64,
    pub approved: i64,
}

/// Moderation dashboard
#[derive(Debug, Clone, Serialize)]
pub struct ModerationQueueResponse {
    pub pending: Vec<PendingTributeResponse>,
    pub recent_approved: Vec<PendingTributeResponse>,
    pub stats: TributeStatsResponse,
}

/// Moderation decision taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approved,
    Rejected,
}

/// Moderation result
#[derive(Debug, Clone, Serialize)]
pub struct ModerationResponse {
    pub tribute_id: TributeId,
    pub action: ModerationAction,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
