//! Tribute service
//!
//! Candles, flowers, guestbook messages and view counting. Every counter
//! change is delegated to an in-place increment in the store.

use memorial_core::traits::PageQuery;
use memorial_core::{FlowerType, MemorialId, Tribute, UserId};
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    CandleLitResponse, FlowerOfferedResponse, PaginatedResponse, SubmitMessageRequest,
    TributeResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::{Actor, PermissionService};

/// Default page size for tribute listings
pub const DEFAULT_TRIBUTE_PAGE_SIZE: i64 = 20;

/// Largest page size for tribute listings
pub const MAX_TRIBUTE_PAGE_SIZE: i64 = 100;

/// Tribute service
pub struct TributeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TributeService<'a> {
    /// Create a new TributeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Count one page view. Failures are logged, never returned.
    #[instrument(skip(self))]
    pub async fn record_view(&self, memorial_id: MemorialId) {
        match self.ctx.memorial_repo().increment_view(memorial_id).await {
            Ok(true) => {}
            Ok(false) => debug!(memorial_id = %memorial_id, "View on unknown memorial ignored"),
            Err(e) => warn!(memorial_id = %memorial_id, error = %e, "Failed to record view"),
        }
    }

    /// Light a candle and return the new candle count
    #[instrument(skip(self, actor))]
    pub async fn light_candle(
        &self,
        memorial_id: MemorialId,
        actor: Option<&Actor>,
    ) -> ServiceResult<CandleLitResponse> {
        let tribute = Tribute::candle(memorial_id, actor.map(|a| a.user_id));
        let candle_count = self
            .ctx
            .tribute_repo()
            .create_with_counter(&tribute)
            .await?;

        info!(
            memorial_id = %memorial_id,
            tribute_id = %tribute.id,
            candle_count,
            "Candle lit"
        );

        Ok(CandleLitResponse {
            tribute_id: tribute.id,
            candle_count,
        })
    }

    /// Offer a flower and return the new flower count
    #[instrument(skip(self, actor))]
    pub async fn offer_flower(
        &self,
        memorial_id: MemorialId,
        flower_type: &str,
        actor: Option<&Actor>,
    ) -> ServiceResult<FlowerOfferedResponse> {
        let flower_type: FlowerType = flower_type.parse()?;
        let tribute = Tribute::flower(memorial_id, flower_type, actor.map(|a| a.user_id));
        let flower_count = self
            .ctx
            .tribute_repo()
            .create_with_counter(&tribute)
            .await?;

        info!(
            memorial_id = %memorial_id,
            tribute_id = %tribute.id,
            flower_type = %flower_type,
            flower_count,
            "Flower offered"
        );

        Ok(FlowerOfferedResponse {
            tribute_id: tribute.id,
            flower_type,
            flower_count,
        })
    }

    /// Leave a message that waits for moderation
    ///
    /// The author falls back to the token identity, then to the anonymous name.
    #[instrument(skip(self, request, actor))]
    pub async fn submit_message(
        &self,
        request: SubmitMessageRequest,
        actor: Option<&Actor>,
    ) -> ServiceResult<TributeResponse> {
        let author_name = request
            .author_name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| actor.and_then(|a| a.name.clone()));
        let author_email = request
            .author_email
            .filter(|e| !e.trim().is_empty())
            .or_else(|| actor.and_then(|a| a.email.clone()));

        let tribute = Tribute::message(
            request.memorial_id,
            &request.message,
            author_name,
            author_email,
            actor.map(|a| a.user_id),
        )?;

        self.ctx.tribute_repo().create(&tribute).await?;

        info!(
            memorial_id = %tribute.memorial_id,
            tribute_id = %tribute.id,
            "Message submitted for moderation"
        );

        Ok(TributeResponse::from(tribute))
    }

    /// Approved tributes of a memorial, newest first
    #[instrument(skip(self))]
    pub async fn list_tributes(
        &self,
        memorial_id: MemorialId,
        viewer: Option<UserId>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<TributeResponse>> {
        PermissionService::new(self.ctx)
            .require_visible_memorial(memorial_id, viewer)
            .await?;

        let page = page.unwrap_or(1).max(1);
        let limit = limit
            .unwrap_or(DEFAULT_TRIBUTE_PAGE_SIZE)
            .clamp(1, MAX_TRIBUTE_PAGE_SIZE);

        // Fetch one extra row to learn whether another page exists
        let mut tributes = self
            .ctx
            .tribute_repo()
            .find_approved_by_memorial(
                memorial_id,
                PageQuery {
                    offset: (page - 1).saturating_mul(limit),
                    limit: limit + 1,
                },
            )
            .await?;

        let has_more = tributes.len() as i64 > limit;
        tributes.truncate(limit as usize);

        Ok(PaginatedResponse::new(
            tributes.into_iter().map(TributeResponse::from).collect(),
            page,
            limit,
            has_more,
        ))
    }
}
