//! Named component catalog
//!
//! Content authors declare overrides as data (`{"code": "highlighted-code"}`).
//! The catalog turns those names back into component handles. Each name maps
//! to one shared handle, so two pages naming the same component get the
//! same identity.

use std::collections::HashMap;

use super::component::ComponentRef;

#[derive(Clone, Default)]
pub struct ComponentCatalog {
    components: HashMap<String, ComponentRef>,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under its own [`name`](super::Component::name).
    /// Re-registering a name replaces the earlier component.
    pub fn register(&mut self, component: ComponentRef) -> &mut Self {
        self.components
            .insert(component.name().to_string(), component);
        self
    }

    pub fn with(mut self, component: ComponentRef) -> Self {
        self.register(component);
        self
    }

    /// Component registered under `name`
    pub fn get(&self, name: &str) -> Option<&ComponentRef> {
        self.components.get(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
