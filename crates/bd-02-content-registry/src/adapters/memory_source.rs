//! In-memory content source for tests and embedded fixtures

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::ports::ContentSource;

#[derive(Clone, Debug, Default)]
pub struct InMemoryContentSource {
    documents: HashMap<String, String>,
}

impl InMemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, json: impl Into<String>) -> Self {
        self.documents.insert(name.into(), json.into());
        self
    }
}

impl ContentSource for InMemoryContentSource {
    fn read(&self, name: &str) -> Result<String, RegistryError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}
