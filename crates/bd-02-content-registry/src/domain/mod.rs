//! Domain Layer - Typed content registry model
//!
//! RULES:
//! - No I/O operations
//! - JSON shapes match what the docs build emits (camelCase)

pub mod page;
pub mod sidebar;
pub mod version;

pub use page::{FrontMatter, NavLink, PageData, PageMetadata, Tag, TocEntry};
pub use sidebar::{flatten_links, neighbours, Neighbours, SidebarCategory, SidebarItem, SidebarLink};
pub use version::{DocSummary, VersionMetadata};
