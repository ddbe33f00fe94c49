//! Domain Layer - Pure override logic
//!
//! This layer contains:
//! - Component keys and the opaque renderer contract
//! - Immutable, identity-comparable component mappings
//! - Local overrides (literal or derived) and the named component catalog
//! - The single-slot memoizing resolver
//! - The render context holding the ambient mapping stack
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No global state

pub mod catalog;
pub mod component;
pub mod context;
pub mod mapping;
pub mod overrides;
pub mod resolver;
pub mod scope;

pub use catalog::ComponentCatalog;
pub use component::{Component, ComponentKey, ComponentProps, ComponentRef, FnComponent};
pub use context::{RenderContext, ScopeGuard};
pub use mapping::{ComponentMapping, ComponentMappingBuilder};
pub use overrides::{OverrideFn, Overrides};
pub use resolver::{OverrideResolver, ResolverCache, ScopeId};
pub use scope::OverrideScope;
