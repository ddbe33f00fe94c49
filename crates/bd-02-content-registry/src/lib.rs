//! # BD-02 Content Registry
//!
//! Typed model of the documentation content registry: versioned sidebars,
//! the per-version doc index and per-page metadata. The renderer treats it
//! as an external data source; nothing here renders.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Serde model of the registry JSON
//! - **Ports Layer** (`ports/`): `ContentSource` driven port
//! - **Adapters Layer** (`adapters/`): Filesystem and in-memory sources
//! - **Service Layer** (`service/`): `ContentRegistry` queries and validation
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Every doc's sidebar exists
//! - **INVARIANT-2**: Every sidebar doc link points at a known doc

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{FsContentSource, InMemoryContentSource};
pub use domain::{
    DocSummary, FrontMatter, NavLink, PageData, PageMetadata, SidebarCategory, SidebarItem,
    SidebarLink, Tag, TocEntry, VersionMetadata,
};
pub use error::RegistryError;
pub use ports::ContentSource;
pub use service::ContentRegistry;
