//! Configuration structs

mod app_config;

pub use app_config::{
    parse_moderator_ids, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, ModerationConfig, RateLimitConfig, ServerConfig,
};
