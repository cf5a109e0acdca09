//! Domain entities - core business objects

mod memorial;
mod photo;
mod tribute;

pub use memorial::{Counter, Memorial, Privacy};
pub use photo::Photo;
pub use tribute::{
    validate_message, FlowerType, Tribute, TributeKind, TributeWithMemorial, ANONYMOUS_AUTHOR,
    CANDLE_MESSAGE, MAX_MESSAGE_CHARS,
};
