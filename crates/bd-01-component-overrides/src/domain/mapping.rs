//! Component mapping: key -> component table for one scope
//!
//! Mappings are immutable once built and shared behind an `Arc`, so cloning
//! a mapping is cheap and two clones are *the same mapping* by identity.
//! The resolver relies on that identity to detect "nothing changed".

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::component::{ComponentKey, ComponentRef};

/// Immutable, identity-comparable mapping from [`ComponentKey`] to component
#[derive(Clone, Default)]
pub struct ComponentMapping {
    entries: Arc<HashMap<ComponentKey, ComponentRef>>,
}

impl ComponentMapping {
    /// The empty mapping
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a mapping
    pub fn builder() -> ComponentMappingBuilder {
        ComponentMappingBuilder::default()
    }

    /// Component for `key`, if this mapping has one
    pub fn get(&self, key: &ComponentKey) -> Option<&ComponentRef> {
        self.entries.get(key)
    }

    /// Whether `key` has a component
    pub fn contains(&self, key: &ComponentKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &ComponentKey> {
        self.entries.keys()
    }

    /// Entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&ComponentKey, &ComponentRef)> {
        self.entries.iter()
    }

    /// Identity comparison: true only for clones of the same mapping
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Whether `key` resolves to the very same component handle in both
    pub fn same_component(&self, other: &Self, key: &ComponentKey) -> bool {
        match (self.get(key), other.get(key)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// New mapping holding every entry of `self`, with every entry of
    /// `partial` written over it.
    ///
    /// Always allocates; callers wanting the identity fast-path go through
    /// the resolver.
    pub fn merged_with(&self, partial: &ComponentMapping) -> ComponentMapping {
        let mut entries = HashMap::with_capacity(self.len() + partial.len());
        for (key, component) in self.entries.iter() {
            entries.insert(key.clone(), Arc::clone(component));
        }
        for (key, component) in partial.entries.iter() {
            entries.insert(key.clone(), Arc::clone(component));
        }
        ComponentMapping {
            entries: Arc::new(entries),
        }
    }
}

impl fmt::Debug for ComponentMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.name()))
            .collect();
        sorted.sort_unstable();
        f.debug_map().entries(sorted).finish()
    }
}

impl FromIterator<(ComponentKey, ComponentRef)> for ComponentMapping {
    fn from_iter<I: IntoIterator<Item = (ComponentKey, ComponentRef)>>(iter: I) -> Self {
        Self {
            entries: Arc::new(iter.into_iter().collect()),
        }
    }
}

/// Builder for [`ComponentMapping`]
///
/// Later insertions for the same key win.
#[derive(Default)]
pub struct ComponentMappingBuilder {
    entries: HashMap<ComponentKey, ComponentRef>,
}

impl ComponentMappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component for `key`
    pub fn with(mut self, key: ComponentKey, component: ComponentRef) -> Self {
        self.entries.insert(key, component);
        self
    }

    pub fn insert(&mut self, key: ComponentKey, component: ComponentRef) -> &mut Self {
        self.entries.insert(key, component);
        self
    }

    pub fn build(self) -> ComponentMapping {
        ComponentMapping {
            entries: Arc::new(self.entries),
        }
    }
}
