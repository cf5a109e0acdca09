//! Photo entity <-> model mapper

use memorial_core::entities::Photo;
use memorial_core::value_objects::{MemorialId, PhotoId};
use uuid::Uuid;

use crate::models::PhotoModel;

/// Convert PhotoModel to Photo entity
impl From<PhotoModel> for Photo {
    fn from(model: PhotoModel) -> Self {
        Photo {
            id: PhotoId::from_uuid(model.id),
            memorial_id: MemorialId::from_uuid(model.memorial_id),
            url: model.url,
            thumbnail_url: model.thumbnail_url,
            caption: model.caption,
            display_order: model.display_order,
            uploaded_at: model.uploaded_at,
        }
    }
}

/// Convert Photo entity reference to values for database insertion
pub struct PhotoInsert<'a> {
    pub id: Uuid,
    pub memorial_id: Uuid,
    pub url: &'a str,
    pub thumbnail_url: Option<&'a str>,
    pub caption: Option<&'a str>,
    pub display_order: i32,
}

impl<'a> PhotoInsert<'a> {
    pub fn new(photo: &'a Photo) -> Self {
        Self {
            id: photo.id.into_inner(),
            memorial_id: photo.memorial_id.into_inner(),
            url: &photo.url,
            thumbnail_url: photo.thumbnail_url.as_deref(),
            caption: photo.caption.as_deref(),
            display_order: photo.display_order,
        }
    }
}
