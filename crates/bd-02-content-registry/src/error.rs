//! Error types for the Content Registry subsystem

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying the content registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Invalid content name (must be a relative path inside the root): {0}")]
    InvalidName(String),

    #[error("Malformed registry JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown sidebar: {0}")]
    UnknownSidebar(String),

    #[error("Unknown doc: {0}")]
    UnknownDoc(String),

    #[error("Sidebar '{sidebar}' links to missing doc '{doc_id}'")]
    DanglingDocLink { sidebar: String, doc_id: String },

    #[error("Doc '{doc_id}' references missing sidebar '{sidebar}'")]
    MissingSidebar { doc_id: String, sidebar: String },
}
