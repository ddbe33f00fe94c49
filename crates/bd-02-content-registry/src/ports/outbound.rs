//! Outbound Ports (Driven Ports)
//!
//! Where registry documents come from. The registry only needs raw JSON
//! text by name; the docs build decides how it is stored.

use crate::error::RegistryError;

/// Content data provider (Driven Port)
pub trait ContentSource: Send + Sync {
    /// Raw JSON text of the document called `name`
    fn read(&self, name: &str) -> Result<String, RegistryError>;
}
