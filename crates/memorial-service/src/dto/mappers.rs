//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use memorial_core::traits::TributeStats;
use memorial_core::{Memorial, Photo, Tribute, TributeWithMemorial};

use super::responses::{
    MemorialResponse, PendingTributeResponse, PhotoResponse, TributeResponse,
    TributeStatsResponse,
};

// ============================================================================
// Memorial Mappers
// ============================================================================

impl From<&Memorial> for MemorialResponse {
    fn from(memorial: &Memorial) -> Self {
        Self {
            id: memorial.id,
            owner_id: memorial.owner_id,
            slug: memorial.slug.clone(),
            pet_name: memorial.pet_name.clone(),
            pet_species: memorial.pet_species.clone(),
            pet_breed: memorial.pet_breed.clone(),
            birth_date: memorial.birth_date,
            death_date: memorial.death_date,
            bio: memorial.bio.clone(),
            memorial_text: memorial.memorial_text.clone(),
            privacy: memorial.privacy,
            template_id: memorial.template_id,
            view_count: memorial.view_count,
            candle_count: memorial.candle_count,
            flower_count: memorial.flower_count,
            created_at: memorial.created_at,
            updated_at: memorial.updated_at,
        }
    }
}

impl From<Memorial> for MemorialResponse {
    fn from(memorial: Memorial) -> Self {
        Self::from(&memorial)
    }
}

// ============================================================================
// Photo Mappers
// ============================================================================

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            memorial_id: photo.memorial_id,
            url: photo.url,
            thumbnail_url: photo.thumbnail_url,
            caption: photo.caption,
            display_order: photo.display_order,
            uploaded_at: photo.uploaded_at,
        }
    }
}

// ============================================================================
// Tribute Mappers
// ============================================================================

impl From<&Tribute> for TributeResponse {
    fn from(tribute: &Tribute) -> Self {
        Self {
            id: tribute.id,
            memorial_id: tribute.memorial_id,
            author_id: tribute.author_id,
            author_name: tribute.author_name.clone(),
            message: tribute.message.clone(),
            kind: tribute.kind,
            flower_type: tribute.flower_type,
            approved: tribute.approved,
            created_at: tribute.created_at,
        }
    }
}

impl From<Tribute> for TributeResponse {
    fn from(tribute: Tribute) -> Self {
        Self::from(&tribute)
    }
}

impl From<TributeWithMemorial> for PendingTributeResponse {
    fn from(row: TributeWithMemorial) -> Self {
        Self {
            tribute: TributeResponse::from(&row.tribute),
            author_email: row.tribute.author_email,
            pet_name: row.pet_name,
            slug: row.slug,
        }
    }
}

impl From<TributeStats> for TributeStatsResponse {
    fn from(stats: TributeStats) -> Self {
        Self {
            pending: stats.pending,
            approved: stats.approved,
        }
    }
}
