//! Domain Layer - Content tree, defaults and configuration
//!
//! RULES:
//! - No I/O operations
//! - Components stay opaque: the renderer only chooses which one to call

pub mod config;
pub mod content;
pub mod defaults;

pub use config::{RendererConfig, RendererConfigBuilder, MAX_SCOPE_DEPTH_LIMIT};
pub use content::ContentNode;
pub use defaults::{builtin_catalog, default_components, escape_html, html_element, render_attributes};
