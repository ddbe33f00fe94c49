//! Filesystem content source
//!
//! Reads registry documents from a directory of JSON files.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::RegistryError;
use crate::ports::ContentSource;

/// Reads `<root>/<name>` from disk.
///
/// `name` must be a plain relative path: no `..`, no root, no prefix.
#[derive(Clone, Debug)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsContentSource {
    fn read(&self, name: &str) -> Result<String, RegistryError> {
        let relative = Path::new(name);
        let plain = !name.is_empty()
            && relative
                .components()
                .all(|part| matches!(part, Component::Normal(_) | Component::CurDir));
        if !plain {
            return Err(RegistryError::InvalidName(name.to_string()));
        }

        let path = self.root.join(relative);
        debug!(path = %path.display(), "Reading registry document");
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => RegistryError::NotFound(name.to_string()),
            _ => RegistryError::Io { path, source },
        })
    }
}
