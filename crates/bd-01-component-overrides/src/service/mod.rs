//! Service Layer - Orchestration

pub mod override_service;

pub use override_service::ComponentOverrideService;
