//! Service Layer - Page rendering

pub mod page_renderer;

pub use page_renderer::{CompiledPage, PageRenderer};
