//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Unknown fields are rejected.

use chrono::NaiveDate;
use memorial_core::{MemorialId, Privacy, TributeId};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Memorial Requests
// ============================================================================

/// Create memorial request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateMemorialRequest {
    #[validate(length(min = 1, max = 100, message = "Pet name must be 1-100 characters"))]
    pub pet_name: String,

    #[validate(length(min = 1, max = 50, message = "Pet species must be 1-50 characters"))]
    pub pet_species: String,

    #[validate(length(max = 100, message = "Pet breed must be at most 100 characters"))]
    pub pet_breed: Option<String>,

    pub birth_date: Option<NaiveDate>,

    pub death_date: Option<NaiveDate>,

    #[validate(length(max = 5000, message = "Bio must be at most 5000 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 10000, message = "Memorial text must be at most 10000 characters"))]
    pub memorial_text: Option<String>,

    /// Defaults to public
    pub privacy: Option<Privacy>,

    #[validate(range(min = 1, message = "Template ID must be positive"))]
    pub template_id: Option<i32>,

    /// Generated from the pet name when omitted
    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: Option<String>,
}

// ============================================================================
// Photo Requests
// ============================================================================

/// Attach an already uploaded photo to a memorial
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddPhotoRequest {
    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub url: String,

    #[validate(url(message = "Thumbnail URL must be a valid URL"))]
    pub thumbnail_url: Option<String>,

    #[validate(length(max = 500, message = "Caption must be at most 500 characters"))]
    pub caption: Option<String>,

    #[validate(range(min = 0, message = "Display order must not be negative"))]
    pub display_order: Option<i32>,
}

// ============================================================================
// Tribute Requests
// ============================================================================

/// Light a candle
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LightCandleRequest {
    pub memorial_id: MemorialId,
}

/// Offer a flower
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OfferFlowerRequest {
    pub memorial_id: MemorialId,

    /// One of rose, lily, chrysanthemum, tulip
    #[validate(length(min = 1, max = 32, message = "Flower type is required"))]
    pub flower_type: String,
}

/// Leave a guestbook message
///
/// The message length is checked by the service after trimming.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SubmitMessageRequest {
    pub memorial_id: MemorialId,

    pub message: String,

    #[validate(length(max = 100, message = "Author name must be at most 100 characters"))]
    pub author_name: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub author_email: Option<String>,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Approve or reject a tribute
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ModerateTributeRequest {
    pub tribute_id: TributeId,
}
