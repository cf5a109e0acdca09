//! # memorial-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    Actor, MemorialService, ModerationService, PhotoService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StaticModeratorDirectory, TributeService,
};
