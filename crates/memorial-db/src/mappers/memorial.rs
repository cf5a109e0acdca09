//! Memorial entity <-> model mapper

use chrono::NaiveDate;
use memorial_core::entities::Memorial;
use memorial_core::error::DomainError;
use memorial_core::value_objects::{MemorialId, UserId};
use uuid::Uuid;

use crate::models::MemorialModel;

/// Convert MemorialModel to Memorial entity
///
/// Fails only if the row holds a privacy value the CHECK constraint should have refused.
impl TryFrom<MemorialModel> for Memorial {
    type Error = DomainError;

    fn try_from(model: MemorialModel) -> Result<Self, Self::Error> {
        Ok(Memorial {
            id: MemorialId::from_uuid(model.id),
            owner_id: UserId::from_uuid(model.owner_id),
            slug: model.slug,
            pet_name: model.pet_name,
            pet_species: model.pet_species,
            pet_breed: model.pet_breed,
            birth_date: model.birth_date,
            death_date: model.death_date,
            bio: model.bio,
            memorial_text: model.memorial_text,
            privacy: model.privacy.parse()?,
            template_id: model.template_id,
            view_count: model.view_count,
            candle_count: model.candle_count,
            flower_count: model.flower_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a batch of rows, failing on the first bad one
pub fn memorials_from_models(models: Vec<MemorialModel>) -> Result<Vec<Memorial>, DomainError> {
    models.into_iter().map(Memorial::try_from).collect()
}

/// Convert Memorial entity reference to values for database insertion
///
/// Counters are not part of the insert; new rows start at zero.
pub struct MemorialInsert<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub slug: &'a str,
    pub pet_name: &'a str,
    pub pet_species: &'a str,
    pub pet_breed: Option<&'a str>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub bio: Option<&'a str>,
    pub memorial_text: Option<&'a str>,
    pub privacy: &'static str,
    pub template_id: i32,
}

impl<'a> MemorialInsert<'a> {
    pub fn new(memorial: &'a Memorial) -> Self {
        Self {
            id: memorial.id.into_inner(),
            owner_id: memorial.owner_id.into_inner(),
            slug: &memorial.slug,
            pet_name: &memorial.pet_name,
            pet_species: &memorial.pet_species,
            pet_breed: memorial.pet_breed.as_deref(),
            birth_date: memorial.birth_date,
            death_date: memorial.death_date,
            bio: memorial.bio.as_deref(),
            memorial_text: memorial.memorial_text.as_deref(),
            privacy: memorial.privacy.as_str(),
            template_id: memorial.template_id,
        }
    }
}
