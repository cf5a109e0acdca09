//! Photo entity - a picture attached to a memorial
//!
//! Only the URLs are stored here; the bytes live in an external object store.

use chrono::{DateTime, Utc};

use crate::value_objects::{MemorialId, PhotoId};

/// Photo entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub memorial_id: MemorialId,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}

impl Photo {
    /// Create a new Photo
    pub fn new(id: PhotoId, memorial_id: MemorialId, url: String) -> Self {
        Self {
            id,
            memorial_id,
            url,
            thumbnail_url: None,
            caption: None,
            display_order: 0,
            uploaded_at: Utc::now(),
        }
    }

    /// URL to show in galleries, falling back to the full image
    pub fn preview_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.url)
    }
}
