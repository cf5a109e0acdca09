//! Tribute database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for tributes table
#[derive(Debug, Clone, FromRow)]
pub struct TributeModel {
    pub id: Uuid,
    pub memorial_id: Uuid,
    pub author_id: Option<Uuid>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub message: String,
    pub kind: String,
    pub flower_type: Option<String>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Tribute row LEFT JOINed with its memorial's name and slug
#[derive(Debug, Clone, FromRow)]
pub struct TributeWithMemorialModel {
    #[sqlx(flatten)]
    pub tribute: TributeModel,
    pub pet_name: Option<String>,
    pub slug: Option<String>,
}

/// Pending/approved totals
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TributeStatsModel {
    pub pending: i64,
    pub approved: i64,
}
