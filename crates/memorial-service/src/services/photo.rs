//! Photo service
//!
//! Records photos that were uploaded to the object store.

use memorial_core::{MemorialId, Photo, PhotoId, UserId};
use tracing::{info, instrument};

use crate::dto::{AddPhotoRequest, PhotoResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Photo service
pub struct PhotoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PhotoService<'a> {
    /// Create a new PhotoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attach a photo to a memorial the caller owns
    #[instrument(skip(self, request))]
    pub async fn add_photo(
        &self,
        owner_id: UserId,
        memorial_id: MemorialId,
        request: AddPhotoRequest,
    ) -> ServiceResult<PhotoResponse> {
        PermissionService::new(self.ctx)
            .require_memorial_owner(memorial_id, owner_id)
            .await?;

        let mut photo = Photo::new(PhotoId::generate(), memorial_id, request.url);
        photo.thumbnail_url = request.thumbnail_url;
        photo.caption = request.caption;
        photo.display_order = request.display_order.unwrap_or(0);

        self.ctx.photo_repo().create(&photo).await?;

        info!(photo_id = %photo.id, memorial_id = %memorial_id, "Photo added");

        Ok(PhotoResponse::from(photo))
    }

    /// Gallery of a memorial
    #[instrument(skip(self))]
    pub async fn list_photos(
        &self,
        memorial_id: MemorialId,
        viewer: Option<UserId>,
    ) -> ServiceResult<Vec<PhotoResponse>> {
        PermissionService::new(self.ctx)
            .require_visible_memorial(memorial_id, viewer)
            .await?;

        let photos = self.ctx.photo_repo().find_by_memorial(memorial_id).await?;
        Ok(photos.into_iter().map(PhotoResponse::from).collect())
    }
}
