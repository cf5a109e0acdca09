//! Memorial database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for memorials table
#[derive(Debug, Clone, FromRow)]
pub struct MemorialModel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub slug: String,
    pub pet_name: String,
    pub pet_species: String,
    pub pet_breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub memorial_text: Option<String>,
    pub privacy: String,
    pub template_id: i32,
    pub view_count: i64,
    pub candle_count: i64,
    pub flower_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
