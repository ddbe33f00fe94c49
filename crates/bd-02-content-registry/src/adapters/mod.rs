//! Adapters Layer - ContentSource implementations

pub mod fs_source;
pub mod memory_source;

pub use fs_source::FsContentSource;
pub use memory_source::InMemoryContentSource;
