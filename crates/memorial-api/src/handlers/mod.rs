//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod memorials;
pub mod moderation;
pub mod photos;
pub mod tributes;
