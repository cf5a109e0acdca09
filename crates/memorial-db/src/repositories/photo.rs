//! PostgreSQL implementation of PhotoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use memorial_core::entities::Photo;
use memorial_core::traits::{PhotoRepository, RepoResult};
use memorial_core::value_objects::MemorialId;

use crate::mappers::PhotoInsert;
use crate::models::PhotoModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PhotoRepository
#[derive(Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    /// Create a new PgPhotoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    #[instrument(skip(self, photo), fields(photo_id = %photo.id))]
    async fn create(&self, photo: &Photo) -> RepoResult<()> {
        let insert = PhotoInsert::new(photo);

        sqlx::query(
            r#"
            INSERT INTO memorial_photos (id, memorial_id, url, thumbnail_url, caption,
                                         display_order, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.memorial_id)
        .bind(insert.url)
        .bind(insert.thumbnail_url)
        .bind(insert.caption)
        .bind(insert.display_order)
        .bind(photo.uploaded_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_memorial(&self, memorial_id: MemorialId) -> RepoResult<Vec<Photo>> {
        let results = sqlx::query_as::<_, PhotoModel>(
            r#"
            SELECT id, memorial_id, url, thumbnail_url, caption, display_order, uploaded_at
            FROM memorial_photos
            WHERE memorial_id = $1
            ORDER BY display_order, uploaded_at
            "#,
        )
        .bind(memorial_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Photo::from).collect())
    }
}
