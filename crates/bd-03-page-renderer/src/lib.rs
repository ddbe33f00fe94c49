//! # BD-03 Page Renderer
//!
//! Renders documentation content trees to HTML through the layered
//! component-override context of `bd-01`.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Content tree, root default components,
//!   renderer configuration
//! - **Service Layer** (`service/`): `CompiledPage` and `PageRenderer`
//!
//! ## Render Pass
//!
//! ```text
//! RenderContext(root defaults)
//!   └─ page scope (front matter components)
//!        ├─ paragraph  -> ctx.read()["p"]
//!        └─ scope "api" (local components)
//!             └─ code   -> ctx.read()["pre"], ctx.read()["code"]
//! ```
//!
//! ## Usage Example
//!
//! ```ignore
//! use bd_03_page_renderer::{CompiledPage, ContentNode, PageRenderer};
//!
//! let page = CompiledPage::from_page(&page_data, tree, &catalog)?;
//! let mut renderer = PageRenderer::default();
//! let html = renderer.render(&page)?;
//! ```

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{
    builtin_catalog, default_components, escape_html, html_element, ContentNode, RendererConfig,
    RendererConfigBuilder,
};
pub use error::RenderError;
pub use service::{CompiledPage, PageRenderer};
