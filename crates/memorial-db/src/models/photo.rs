//! Photo database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for memorial_photos table
#[derive(Debug, Clone, FromRow)]
pub struct PhotoModel {
    pub id: Uuid,
    pub memorial_id: Uuid,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}
