//! PostgreSQL implementation of MemorialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use memorial_core::entities::Memorial;
use memorial_core::error::DomainError;
use memorial_core::traits::{MemorialRepository, MemorialSort, RepoResult};
use memorial_core::value_objects::{MemorialId, UserId};

use crate::mappers::{memorials_from_models, MemorialInsert};
use crate::models::MemorialModel;

use super::error::{map_db_error, map_unique_violation};

const MEMORIAL_COLUMNS: &str = "id, owner_id, slug, pet_name, pet_species, pet_breed, \
     birth_date, death_date, bio, memorial_text, privacy, template_id, \
     view_count, candle_count, flower_count, created_at, updated_at";

/// PostgreSQL implementation of MemorialRepository
#[derive(Clone)]
pub struct PgMemorialRepository {
    pool: PgPool,
}

impl PgMemorialRepository {
    /// Create a new PgMemorialRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemorialRepository for PgMemorialRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemorialId) -> RepoResult<Option<Memorial>> {
        let sql = format!("SELECT {MEMORIAL_COLUMNS} FROM memorials WHERE id = $1");
        let result = sqlx::query_as::<_, MemorialModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Memorial::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Memorial>> {
        let sql = format!("SELECT {MEMORIAL_COLUMNS} FROM memorials WHERE slug = $1");
        let result = sqlx::query_as::<_, MemorialModel>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Memorial::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Memorial>> {
        let sql = format!(
            "SELECT {MEMORIAL_COLUMNS} FROM memorials WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        let results = sqlx::query_as::<_, MemorialModel>(&sql)
            .bind(owner_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        memorials_from_models(results)
    }

    #[instrument(skip(self))]
    async fn find_public(&self, sort: MemorialSort, limit: i64) -> RepoResult<Vec<Memorial>> {
        let order_by = match sort {
            MemorialSort::Latest => "created_at DESC",
            MemorialSort::Popular => "(view_count + candle_count + flower_count) DESC, created_at DESC",
        };
        let sql = format!(
            "SELECT {MEMORIAL_COLUMNS} FROM memorials WHERE privacy = 'public' ORDER BY {order_by} LIMIT $1"
        );
        let results = sqlx::query_as::<_, MemorialModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        memorials_from_models(results)
    }

    #[instrument(skip(self, memorial), fields(slug = %memorial.slug))]
    async fn create(&self, memorial: &Memorial) -> RepoResult<()> {
        let insert = MemorialInsert::new(memorial);

        sqlx::query(
            r#"
            INSERT INTO memorials (id, owner_id, slug, pet_name, pet_species, pet_breed,
                                   birth_date, death_date, bio, memorial_text, privacy,
                                   template_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(insert.id)
        .bind(insert.owner_id)
        .bind(insert.slug)
        .bind(insert.pet_name)
        .bind(insert.pet_species)
        .bind(insert.pet_breed)
        .bind(insert.birth_date)
        .bind(insert.death_date)
        .bind(insert.bio)
        .bind(insert.memorial_text)
        .bind(insert.privacy)
        .bind(insert.template_id)
        .bind(memorial.created_at)
        .bind(memorial.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_view(&self, id: MemorialId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE memorials
            SET view_count = view_count + 1
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
