//! Memorial entity - the page representing a deceased pet

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{MemorialId, UserId};

/// Who may read a memorial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Listed on the public wall, readable by anyone
    #[default]
    Public,
    /// Readable by anyone with the link, never listed
    Unlisted,
    /// Readable by the owner only
    Private,
}

impl Privacy {
    /// Storage representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Privacy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "unlisted" => Ok(Self::Unlisted),
            "private" => Ok(Self::Private),
            other => Err(DomainError::InvalidPrivacy(other.to_string())),
        }
    }
}

/// Counter bumped together with a tribute insert
///
/// Views have no tribute row and are counted by
/// `MemorialRepository::increment_view` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Candle,
    Flower,
}

impl Counter {
    /// Column holding this counter in the `memorials` table
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Candle => "candle_count",
            Self::Flower => "flower_count",
        }
    }
}

/// Memorial entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memorial {
    pub id: MemorialId,
    pub owner_id: UserId,
    pub slug: String,
    pub pet_name: String,
    pub pet_species: String,
    pub pet_breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub memorial_text: Option<String>,
    pub privacy: Privacy,
    pub template_id: i32,
    pub view_count: i64,
    pub candle_count: i64,
    pub flower_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memorial {
    /// Template used when the owner does not pick one
    pub const DEFAULT_TEMPLATE_ID: i32 = 1;

    /// Create a new public memorial with zeroed counters
    pub fn new(
        id: MemorialId,
        owner_id: UserId,
        slug: String,
        pet_name: String,
        pet_species: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            slug,
            pet_name,
            pet_species,
            pet_breed: None,
            birth_date: None,
            death_date: None,
            bio: None,
            memorial_text: None,
            privacy: Privacy::default(),
            template_id: Self::DEFAULT_TEMPLATE_ID,
            view_count: 0,
            candle_count: 0,
            flower_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Private memorials are readable only by their owner
    pub fn is_visible_to(&self, viewer: Option<UserId>) -> bool {
        match self.privacy {
            Privacy::Public | Privacy::Unlisted => true,
            Privacy::Private => viewer.is_some_and(|v| self.is_owned_by(v)),
        }
    }

    /// Whether the memorial appears on the public wall
    #[inline]
    pub fn is_listed(&self) -> bool {
        self.privacy == Privacy::Public
    }

    /// Ranking used by the "popular" sort
    pub fn popularity_score(&self) -> i64 {
        self.view_count + self.candle_count + self.flower_count
    }

    /// Current value of a counter
    pub fn counter(&self, counter: Counter) -> i64 {
        match counter {
            Counter::Candle => self.candle_count,
            Counter::Flower => self.flower_count,
        }
    }
}
