//! PostgreSQL implementation of TributeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use memorial_core::entities::{Counter, Tribute, TributeWithMemorial};
use memorial_core::error::DomainError;
use memorial_core::traits::{PageQuery, RepoResult, TributeRepository, TributeStats};
use memorial_core::value_objects::{MemorialId, TributeId};

use crate::mappers::TributeInsert;
use crate::models::{TributeModel, TributeStatsModel, TributeWithMemorialModel};

use super::error::{map_db_error, memorial_not_found};

/// In-place increment of one counter, returning the new value
fn increment_sql(counter: Counter) -> &'static str {
    match counter {
        Counter::Candle => {
            "UPDATE memorials SET candle_count = candle_count + 1 WHERE id = $1 RETURNING candle_count"
        }
        Counter::Flower => {
            "UPDATE memorials SET flower_count = flower_count + 1 WHERE id = $1 RETURNING flower_count"
        }
    }
}

/// PostgreSQL implementation of TributeRepository
#[derive(Clone)]
pub struct PgTributeRepository {
    pool: PgPool,
}

impl PgTributeRepository {
    /// Create a new PgTributeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TributeRepository for PgTributeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TributeId) -> RepoResult<Option<Tribute>> {
        let result = sqlx::query_as::<_, TributeModel>(
            r#"
            SELECT id, memorial_id, author_id, author_name, author_email, message,
                   kind, flower_type, approved, created_at
            FROM tributes
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Tribute::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_approved_by_memorial(
        &self,
        memorial_id: MemorialId,
        page: PageQuery,
    ) -> RepoResult<Vec<Tribute>> {
        let results = sqlx::query_as::<_, TributeModel>(
            r#"
            SELECT id, memorial_id, author_id, author_name, author_email, message,
                   kind, flower_type, approved, created_at
            FROM tributes
            WHERE memorial_id = $1 AND approved = TRUE
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(memorial_id.into_inner())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Tribute::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_pending(&self) -> RepoResult<Vec<TributeWithMemorial>> {
        let results = sqlx::query_as::<_, TributeWithMemorialModel>(
            r#"
            SELECT t.id, t.memorial_id, t.author_id, t.author_name, t.author_email, t.message,
                   t.kind, t.flower_type, t.approved, t.created_at,
                   m.pet_name, m.slug
            FROM tributes t
            LEFT JOIN memorials m ON m.id = t.memorial_id
            WHERE t.approved = FALSE
            ORDER BY t.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(TributeWithMemorial::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_recent_approved(&self, limit: i64) -> RepoResult<Vec<TributeWithMemorial>> {
        let results = sqlx::query_as::<_, TributeWithMemorialModel>(
            r#"
            SELECT t.id, t.memorial_id, t.author_id, t.author_name, t.author_email, t.message,
                   t.kind, t.flower_type, t.approved, t.created_at,
                   m.pet_name, m.slug
            FROM tributes t
            LEFT JOIN memorials m ON m.id = t.memorial_id
            WHERE t.approved = TRUE
            ORDER BY t.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(TributeWithMemorial::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<TributeStats> {
        let result = sqlx::query_as::<_, TributeStatsModel>(
            r#"
            SELECT COUNT(*) FILTER (WHERE approved = FALSE) AS pending,
                   COUNT(*) FILTER (WHERE approved = TRUE) AS approved
            FROM tributes
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self, tribute), fields(tribute_id = %tribute.id, kind = %tribute.kind))]
    async fn create(&self, tribute: &Tribute) -> RepoResult<()> {
        let insert = TributeInsert::new(tribute);

        let result = sqlx::query(
            r#"
            INSERT INTO tributes (id, memorial_id, author_id, author_name, author_email,
                                  message, kind, flower_type, approved, created_at)
            SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10
            WHERE EXISTS (SELECT 1 FROM memorials WHERE id = $2)
            "#,
        )
        .bind(insert.id)
        .bind(insert.memorial_id)
        .bind(insert.author_id)
        .bind(insert.author_name)
        .bind(insert.author_email)
        .bind(insert.message)
        .bind(insert.kind)
        .bind(insert.flower_type)
        .bind(insert.approved)
        .bind(tribute.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(memorial_not_found(tribute.memorial_id));
        }

        Ok(())
    }

    #[instrument(skip(self, tribute), fields(tribute_id = %tribute.id, kind = %tribute.kind))]
    async fn create_with_counter(&self, tribute: &Tribute) -> RepoResult<i64> {
        let counter = tribute
            .counter()
            .ok_or_else(|| DomainError::InvalidTributeKind(tribute.kind.to_string()))?;
        let insert = TributeInsert::new(tribute);

        // Increment first: the row lock it takes orders concurrent tributes on
        // the same memorial. Dropping `tx` on any early return rolls back.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let new_count: Option<i64> = sqlx::query_scalar(increment_sql(counter))
            .bind(insert.memorial_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let Some(new_count) = new_count else {
            debug!(memorial_id = %tribute.memorial_id, "memorial missing, rolling back");
            return Err(memorial_not_found(tribute.memorial_id));
        };

        sqlx::query(
            r#"
            INSERT INTO tributes (id, memorial_id, author_id, author_name, author_email,
                                  message, kind, flower_type, approved, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(insert.id)
        .bind(insert.memorial_id)
        .bind(insert.author_id)
        .bind(insert.author_name)
        .bind(insert.author_email)
        .bind(insert.message)
        .bind(insert.kind)
        .bind(insert.flower_type)
        .bind(insert.approved)
        .bind(tribute.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(new_count)
    }

    #[instrument(skip(self))]
    async fn approve(&self, id: TributeId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE tributes
            SET approved = TRUE
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TributeId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM tributes
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
