//! # BD-01 Component Overrides
//!
//! Layered, memoized component-override context for rendering documentation
//! pages.
//!
//! A page renders inside zero or more nested override scopes. Each scope
//! reads the ambient mapping, layers its own overrides on top of it, and
//! makes the result ambient for its subtree only.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `ComponentMapping`: Immutable key -> component table
//!   - `Overrides`: Literal or derived partial mappings
//!   - `OverrideResolver`: Single-slot memoizing merge
//!   - `RenderContext`: Explicit stack of ambient mappings
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ComponentOverrideApi`: Driving port used by renderers
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `ComponentOverrideService`: Implements `ComponentOverrideApi`
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Resolution depends only on (parent, local)
//! - **INVARIANT-2**: A key absent from local overrides resolves to the
//!   parent's component for that key
//! - **INVARIANT-3**: Empty overrides return the parent mapping itself
//! - **INVARIANT-4**: Leaving a scope restores the previous ambient mapping,
//!   including on error and unwind
//!
//! ## Usage Example
//!
//! ```ignore
//! use bd_01_component_overrides::{
//!     ComponentKey, ComponentMapping, ComponentOverrideApi, ComponentOverrideService,
//!     OverrideScope, RenderContext, ScopeId,
//! };
//!
//! let mut ctx = RenderContext::new(default_components());
//! let mut service = ComponentOverrideService::new();
//! let page = OverrideScope::new(ScopeId::new("page"), page_overrides);
//!
//! service.enter_scope(&mut ctx, &page, |service, ctx| {
//!     let code = ctx.read().get(&ComponentKey::CODE).cloned();
//!     // ...
//! });
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    Component, ComponentCatalog, ComponentKey, ComponentMapping, ComponentMappingBuilder,
    ComponentProps, ComponentRef, FnComponent, OverrideFn, OverrideResolver, OverrideScope,
    Overrides, RenderContext, ResolverCache, ScopeGuard, ScopeId,
};
pub use error::OverrideError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::ComponentOverrideApi;
pub use service::ComponentOverrideService;
