//! Ports Layer - Trait definitions

pub mod inbound;

pub use inbound::ComponentOverrideApi;
