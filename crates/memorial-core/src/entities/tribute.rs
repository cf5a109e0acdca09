//! Tribute entity - a message, candle or flower left on a memorial
//!
//! Candles and flowers are approved the moment they are created. Messages
//! start unapproved and only become public through moderation; a rejected
//! tribute is deleted outright.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::memorial::Counter;
use crate::error::DomainError;
use crate::value_objects::{MemorialId, TributeId, UserId};

/// Maximum length of a message tribute, in characters
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Message stored with every candle tribute
pub const CANDLE_MESSAGE: &str = "点亮了一支蜡烛";

/// Author name shown when a visitor leaves none
pub const ANONYMOUS_AUTHOR: &str = "匿名访客";

/// Tribute kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TributeKind {
    Message,
    Candle,
    Flower,
}

impl TributeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Candle => "candle",
            Self::Flower => "flower",
        }
    }
}

impl fmt::Display for TributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TributeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "candle" => Ok(Self::Candle),
            "flower" => Ok(Self::Flower),
            other => Err(DomainError::InvalidTributeKind(other.to_string())),
        }
    }
}

/// Flowers a visitor can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerType {
    Rose,
    Lily,
    Chrysanthemum,
    Tulip,
}

impl FlowerType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rose => "rose",
            Self::Lily => "lily",
            Self::Chrysanthemum => "chrysanthemum",
            Self::Tulip => "tulip",
        }
    }

    /// Text stored as the tribute message
    #[must_use]
    pub fn meaning(self) -> &'static str {
        match self {
            Self::Rose => "献上一朵玫瑰 - 永恒的爱",
            Self::Lily => "献上一朵百合 - 纯洁的心",
            Self::Chrysanthemum => "献上一朵菊花 - 深切怀念",
            Self::Tulip => "献上一朵郁金香 - 美好的回忆",
        }
    }
}

impl fmt::Display for FlowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowerType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rose" => Ok(Self::Rose),
            "lily" => Ok(Self::Lily),
            "chrysanthemum" => Ok(Self::Chrysanthemum),
            "tulip" => Ok(Self::Tulip),
            other => Err(DomainError::InvalidFlowerType(other.to_string())),
        }
    }
}

/// Trim a visitor message and check its length
pub fn validate_message(raw: &str) -> Result<String, DomainError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(DomainError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(DomainError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(message.to_string())
}

/// Tribute entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tribute {
    pub id: TributeId,
    pub memorial_id: MemorialId,
    pub author_id: Option<UserId>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub message: String,
    pub kind: TributeKind,
    pub flower_type: Option<FlowerType>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Tribute {
    fn new(
        memorial_id: MemorialId,
        author_id: Option<UserId>,
        kind: TributeKind,
        message: String,
        approved: bool,
    ) -> Self {
        Self {
            id: TributeId::generate(),
            memorial_id,
            author_id,
            author_name: None,
            author_email: None,
            message,
            kind,
            flower_type: None,
            approved,
            created_at: Utc::now(),
        }
    }

    /// A lit candle, approved on creation
    pub fn candle(memorial_id: MemorialId, author_id: Option<UserId>) -> Self {
        Self::new(
            memorial_id,
            author_id,
            TributeKind::Candle,
            CANDLE_MESSAGE.to_string(),
            true,
        )
    }

    /// An offered flower, approved on creation
    pub fn flower(memorial_id: MemorialId, flower_type: FlowerType, author_id: Option<UserId>) -> Self {
        let mut tribute = Self::new(
            memorial_id,
            author_id,
            TributeKind::Flower,
            flower_type.meaning().to_string(),
            true,
        );
        tribute.flower_type = Some(flower_type);
        tribute
    }

    /// A guestbook message awaiting moderation
    ///
    /// The message is trimmed and must be 1..=500 characters.
    pub fn message(
        memorial_id: MemorialId,
        message: &str,
        author_name: Option<String>,
        author_email: Option<String>,
        author_id: Option<UserId>,
    ) -> Result<Self, DomainError> {
        let message = validate_message(message)?;
        let mut tribute = Self::new(memorial_id, author_id, TributeKind::Message, message, false);
        tribute.author_name = Some(
            author_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
        );
        tribute.author_email = author_email.filter(|e| !e.trim().is_empty());
        Ok(tribute)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        !self.approved
    }

    /// Mark as approved. Approving twice is a no-op.
    pub fn approve(&mut self) {
        self.approved = true;
    }

    /// Counter incremented together with this tribute's insert, if any
    pub fn counter(&self) -> Option<Counter> {
        match self.kind {
            TributeKind::Candle => Some(Counter::Candle),
            TributeKind::Flower => Some(Counter::Flower),
            TributeKind::Message => None,
        }
    }
}

/// A tribute joined with the memorial it belongs to, for the moderation queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TributeWithMemorial {
    pub tribute: Tribute,
    pub pet_name: Option<String>,
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_is_approved() {
        let t = Tribute::candle(MemorialId::generate(), None);
        assert!(t.approved);
        assert_eq!(t.kind, TributeKind::Candle);
        assert_eq!(t.message, CANDLE_MESSAGE);
        assert_eq!(t.counter(), Some(Counter::Candle));
    }

    #[test]
    fn test_flower_message_is_meaning() {
        let t = Tribute::flower(MemorialId::generate(), FlowerType::Lily, Some(UserId::generate()));
        assert!(t.approved);
        assert_eq!(t.flower_type, Some(FlowerType::Lily));
        assert_eq!(t.message, "献上一朵百合 - 纯洁的心");
        assert_eq!(t.counter(), Some(Counter::Flower));
    }

    #[test]
    fn test_message_starts_pending() {
        let t = Tribute::message(
            MemorialId::generate(),
            "  思念你  ",
            Some("访客A".to_string()),
            None,
            None,
        )
        .unwrap();
        assert!(t.is_pending());
        assert_eq!(t.message, "思念你");
        assert_eq!(t.author_name.as_deref(), Some("访客A"));
        assert_eq!(t.counter(), None);
    }

    #[test]
    fn test_message_defaults_to_anonymous() {
        let t = Tribute::message(MemorialId::generate(), "hi", Some("   ".to_string()), None, None)
            .unwrap();
        assert_eq!(t.author_name.as_deref(), Some(ANONYMOUS_AUTHOR));
    }

    #[test]
    fn test_message_length_boundary() {
        let ok = "念".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_message(&ok).is_ok());

        let too_long = "念".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(matches!(
            validate_message(&too_long),
            Err(DomainError::MessageTooLong { max: 500 })
        ));
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(matches!(validate_message(""), Err(DomainError::EmptyMessage)));
        assert!(matches!(validate_message(" \n\t "), Err(DomainError::EmptyMessage)));
    }

    #[test]
    fn test_flower_type_parse() {
        assert_eq!("tulip".parse::<FlowerType>().unwrap(), FlowerType::Tulip);
        assert!(matches!(
            "daisy".parse::<FlowerType>(),
            Err(DomainError::InvalidFlowerType(_))
        ));
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut t =
            Tribute::message(MemorialId::generate(), "rest easy", None, None, None).unwrap();
        t.approve();
        t.approve();
        assert!(t.approved);
    }
}
