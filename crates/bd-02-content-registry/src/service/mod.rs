//! Service Layer - Registry queries

pub mod registry;

pub use registry::ContentRegistry;
