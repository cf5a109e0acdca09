//! Memorial service
//!
//! Handles memorial creation, the memorial page and the public wall.

use memorial_core::traits::MemorialSort;
use memorial_core::{generate_slug, is_valid_slug, DomainError, Memorial, MemorialId, UserId};
use tracing::{debug, info, instrument};

use crate::dto::{CreateMemorialRequest, MemorialDetailResponse, MemorialResponse, PhotoResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::tribute::TributeService;

/// Default size of the public memorial wall
pub const DEFAULT_PUBLIC_LIMIT: i64 = 30;

/// Largest public memorial wall
pub const MAX_PUBLIC_LIMIT: i64 = 100;

/// Attempts at a fresh generated slug before giving up
const MAX_SLUG_ATTEMPTS: usize = 3;

/// Memorial service
pub struct MemorialService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemorialService<'a> {
    /// Create a new MemorialService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a memorial owned by `owner_id`
    #[instrument(skip(self, request))]
    pub async fn create_memorial(
        &self,
        owner_id: UserId,
        request: CreateMemorialRequest,
    ) -> ServiceResult<MemorialResponse> {
        if let (Some(birth), Some(death)) = (request.birth_date, request.death_date) {
            if death < birth {
                return Err(ServiceError::validation(
                    "death_date must not be before birth_date",
                ));
            }
        }

        let pet_name = request.pet_name.trim().to_string();
        let pet_species = request.pet_species.trim().to_string();
        if pet_name.is_empty() || pet_species.is_empty() {
            return Err(ServiceError::validation(
                "pet_name and pet_species are required",
            ));
        }

        let mut memorial = Memorial::new(
            MemorialId::generate(),
            owner_id,
            String::new(),
            pet_name,
            pet_species,
        );
        memorial.pet_breed = request.pet_breed.filter(|b| !b.trim().is_empty());
        memorial.birth_date = request.birth_date;
        memorial.death_date = request.death_date;
        memorial.bio = request.bio;
        memorial.memorial_text = request.memorial_text;
        memorial.privacy = request.privacy.unwrap_or_default();
        memorial.template_id = request
            .template_id
            .unwrap_or(Memorial::DEFAULT_TEMPLATE_ID);

        match request.slug {
            Some(slug) => {
                if !is_valid_slug(&slug) {
                    return Err(DomainError::InvalidSlug(slug).into());
                }
                memorial.slug = slug;
                self.ctx.memorial_repo().create(&memorial).await?;
            }
            None => self.create_with_generated_slug(&mut memorial).await?,
        }

        info!(
            memorial_id = %memorial.id,
            owner_id = %owner_id,
            slug = %memorial.slug,
            "Memorial created"
        );

        Ok(MemorialResponse::from(memorial))
    }

    async fn create_with_generated_slug(&self, memorial: &mut Memorial) -> ServiceResult<()> {
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            memorial.slug = generate_slug(&memorial.pet_name, memorial.pet_breed.as_deref());
            match self.ctx.memorial_repo().create(memorial).await {
                Ok(()) => return Ok(()),
                Err(DomainError::SlugAlreadyExists) => {
                    debug!(slug = %memorial.slug, attempt, "Generated slug taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(DomainError::SlugAlreadyExists.into())
    }

    /// The caller's own memorials, newest first
    #[instrument(skip(self))]
    pub async fn list_my_memorials(&self, owner_id: UserId) -> ServiceResult<Vec<MemorialResponse>> {
        let memorials = self.ctx.memorial_repo().find_by_owner(owner_id).await?;
        Ok(memorials.into_iter().map(MemorialResponse::from).collect())
    }

    /// Memorial page by slug
    ///
    /// Counts a view in the background once the memorial is found.
    #[instrument(skip(self))]
    pub async fn get_memorial(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ServiceResult<MemorialDetailResponse> {
        let memorial = self
            .ctx
            .memorial_repo()
            .find_by_slug(slug)
            .await?
            .filter(|m| m.is_visible_to(viewer))
            .ok_or_else(|| ServiceError::not_found("Memorial", slug))?;

        let photos = self.ctx.photo_repo().find_by_memorial(memorial.id).await?;

        let ctx = self.ctx.clone();
        let memorial_id = memorial.id;
        tokio::spawn(async move {
            TributeService::new(&ctx).record_view(memorial_id).await;
        });

        Ok(MemorialDetailResponse {
            memorial: MemorialResponse::from(memorial),
            photos: photos.into_iter().map(PhotoResponse::from).collect(),
        })
    }

    /// Public memorial wall
    #[instrument(skip(self))]
    pub async fn list_public_memorials(
        &self,
        sort: Option<&str>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<MemorialResponse>> {
        let sort = match sort {
            Some(s) => s.parse::<MemorialSort>()?,
            None => MemorialSort::default(),
        };
        let limit = limit.unwrap_or(DEFAULT_PUBLIC_LIMIT).clamp(1, MAX_PUBLIC_LIMIT);

        let memorials = self.ctx.memorial_repo().find_public(sort, limit).await?;
        Ok(memorials.into_iter().map(MemorialResponse::from).collect())
    }
}
