//! Tribute entity <-> model mapper

use memorial_core::entities::{FlowerType, Tribute, TributeWithMemorial};
use memorial_core::error::DomainError;
use memorial_core::traits::TributeStats;
use memorial_core::value_objects::{MemorialId, TributeId, UserId};
use uuid::Uuid;

use crate::models::{TributeModel, TributeStatsModel, TributeWithMemorialModel};

/// Convert TributeModel to Tribute entity
impl TryFrom<TributeModel> for Tribute {
    type Error = DomainError;

    fn try_from(model: TributeModel) -> Result<Self, Self::Error> {
        Ok(Tribute {
            id: TributeId::from_uuid(model.id),
            memorial_id: MemorialId::from_uuid(model.memorial_id),
            author_id: model.author_id.map(UserId::from_uuid),
            author_name: model.author_name,
            author_email: model.author_email,
            message: model.message,
            kind: model.kind.parse()?,
            flower_type: model
                .flower_type
                .as_deref()
                .map(str::parse::<FlowerType>)
                .transpose()?,
            approved: model.approved,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<TributeWithMemorialModel> for TributeWithMemorial {
    type Error = DomainError;

    fn try_from(model: TributeWithMemorialModel) -> Result<Self, Self::Error> {
        Ok(TributeWithMemorial {
            tribute: Tribute::try_from(model.tribute)?,
            pet_name: model.pet_name,
            slug: model.slug,
        })
    }
}

impl From<TributeStatsModel> for TributeStats {
    fn from(model: TributeStatsModel) -> Self {
        TributeStats {
            pending: model.pending,
            approved: model.approved,
        }
    }
}

/// Convert Tribute entity reference to values for database insertion
pub struct TributeInsert<'a> {
    pub id: Uuid,
    pub memorial_id: Uuid,
    pub author_id: Option<Uuid>,
    pub author_name: Option<&'a str>,
    pub author_email: Option<&'a str>,
    pub message: &'a str,
    pub kind: &'static str,
    pub flower_type: Option<&'static str>,
    pub approved: bool,
}

impl<'a> TributeInsert<'a> {
    pub fn new(tribute: &'a Tribute) -> Self {
        Self {
            id: tribute.id.into_inner(),
            memorial_id: tribute.memorial_id.into_inner(),
            author_id: tribute.author_id.map(UserId::into_inner),
            author_name: tribute.author_name.as_deref(),
            author_email: tribute.author_email.as_deref(),
            message: &tribute.message,
            kind: tribute.kind.as_str(),
            flower_type: tribute.flower_type.map(FlowerType::as_str),
            approved: tribute.approved,
        }
    }
}
