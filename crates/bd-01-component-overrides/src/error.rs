//! Error types for the Component Overrides subsystem

use thiserror::Error;

/// Errors that can occur while building or resolving component overrides
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverrideError {
    /// Overrides were supplied as something other than a mapping.
    ///
    /// This is a caller bug: it is reported at the boundary and never
    /// reaches the resolver.
    #[error("Contract violation: overrides must be a mapping, found {found}")]
    ContractViolation { found: String },

    #[error("Unknown component '{name}' for key '{key}'")]
    UnknownComponent { key: String, name: String },

    #[error("Invalid component key: {0:?}")]
    InvalidKey(String),
}
