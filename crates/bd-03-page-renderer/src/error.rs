//! Error types for the Page Renderer subsystem

use bd_01_component_overrides::OverrideError;
use thiserror::Error;

/// Errors that can occur while compiling or rendering a page
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Override error: {0}")]
    Overrides(#[from] OverrideError),

    #[error("No component registered for key '{0}'")]
    MissingComponent(String),

    #[error("Invalid heading depth: {0} (must be 1-6)")]
    InvalidHeadingDepth(u8),

    #[error("Override scopes nested too deep: {depth} > {max}")]
    NestingTooDeep { depth: usize, max: usize },

    #[error("Duplicate scope id in page: {0}")]
    DuplicateScope(String),

    #[error("Scope '{0}' was not compiled into this page")]
    UnknownScope(String),

    #[error("Invalid renderer configuration: {0}")]
    InvalidConfig(String),
}
