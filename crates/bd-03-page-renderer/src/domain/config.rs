//! Renderer configuration and validation

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Upper bound accepted for `max_scope_depth`
pub const MAX_SCOPE_DEPTH_LIMIT: usize = 256;

/// Page renderer configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Deepest allowed nesting of override scopes (page scope included)
    pub max_scope_depth: usize,
    /// Inserted between sibling block-level nodes
    pub block_separator: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_scope_depth: 32,
            block_separator: "\n".to_string(),
        }
    }
}

impl RendererConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.max_scope_depth == 0 {
            return Err(RenderError::InvalidConfig(
                "max_scope_depth cannot be 0".to_string(),
            ));
        }
        if self.max_scope_depth > MAX_SCOPE_DEPTH_LIMIT {
            return Err(RenderError::InvalidConfig(format!(
                "max_scope_depth must be at most {MAX_SCOPE_DEPTH_LIMIT}"
            )));
        }
        Ok(())
    }
}

/// Builder for RendererConfig with validation
#[derive(Default)]
pub struct RendererConfigBuilder {
    max_scope_depth: Option<usize>,
    block_separator: Option<String>,
}

impl RendererConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_scope_depth(mut self, depth: usize) -> Self {
        self.max_scope_depth = Some(depth);
        self
    }

    pub fn block_separator(mut self, separator: impl Into<String>) -> Self {
        self.block_separator = Some(separator.into());
        self
    }

    pub fn build(self) -> Result<RendererConfig, RenderError> {
        let defaults = RendererConfig::default();
        let config = RendererConfig {
            max_scope_depth: self.max_scope_depth.unwrap_or(defaults.max_scope_depth),
            block_separator: self.block_separator.unwrap_or(defaults.block_separator),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RendererConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_zero_depth() {
        let result = RendererConfigBuilder::new().max_scope_depth(0).build();
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_rejects_excessive_depth() {
        let result = RendererConfigBuilder::new()
            .max_scope_depth(MAX_SCOPE_DEPTH_LIMIT + 1)
            .build();
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = RendererConfigBuilder::new().block_separator("").build().unwrap();
        assert_eq!(config.max_scope_depth, RendererConfig::default().max_scope_depth);
        assert_eq!(config.block_separator, "");
    }
}
