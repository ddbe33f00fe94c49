//! Override resolution with a single-slot memo
//!
//! `resolve(parent, local)` computes the effective mapping for a scope:
//! every key of `parent`, with every key of the (possibly derived) partial
//! `local` written over it.
//!
//! ## Memoization
//!
//! Each call site owns one [`OverrideResolver`]. It remembers only the most
//! recent `(parent, local)` pair, compared by identity. Repeating the pair
//! returns the stored result without merging (and without re-running a
//! derive function). A structurally equal but freshly built input is a miss.
//!
//! The slot keeps clones of both inputs, so the `Arc`s it compares against
//! stay alive and their addresses cannot be reused by unrelated mappings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::mapping::ComponentMapping;
use super::overrides::Overrides;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// Identifier of a call site (one override boundary in a content tree)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(String);

impl ScopeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Child id derived from this one, for positional scopes
    pub fn child(&self, segment: impl fmt::Display) -> Self {
        Self(format!("{}/{}", self.0, segment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `root` itself and every id derived from it with
    /// [`child`](Self::child)
    pub fn is_within(&self, root: &ScopeId) -> bool {
        match self.0.strip_prefix(root.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct MemoSlot {
    parent: ComponentMapping,
    local: Overrides,
    result: ComponentMapping,
}

/// Resolver for one call site
pub struct OverrideResolver {
    slot: Option<MemoSlot>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl Default for OverrideResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl OverrideResolver {
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(NoOpMetrics))
    }

    pub fn with_metrics(metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self {
            slot: None,
            metrics,
        }
    }

    /// Effective mapping for `local` layered over `parent`.
    ///
    /// Empty or absent overrides return `parent` itself (same identity).
    pub fn resolve(&mut self, parent: &ComponentMapping, local: &Overrides) -> ComponentMapping {
        self.metrics.record_resolution();

        if local.is_empty() {
            // the slot holds the most recent pair; this one needs no result
            self.slot = None;
            self.metrics.record_identity_fast_path();
            return parent.clone();
        }

        if let Some(slot) = &self.slot {
            if slot.parent.ptr_eq(parent) && slot.local.same_identity(local) {
                self.metrics.record_memo_hit();
                trace!(entries = slot.result.len(), "Override memo hit");
                return slot.result.clone();
            }
        }

        self.metrics.record_memo_miss();
        let result = match local {
            Overrides::Absent => parent.clone(),
            Overrides::Mapping(partial) => parent.merged_with(partial),
            Overrides::Derive(derive) => {
                self.metrics.record_function_evaluation();
                let partial = (**derive)(parent);
                if partial.is_empty() {
                    parent.clone()
                } else {
                    parent.merged_with(&partial)
                }
            }
        };

        self.slot = Some(MemoSlot {
            parent: parent.clone(),
            local: local.clone(),
            result: result.clone(),
        });
        result
    }

    /// Drop the memo slot
    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_primed(&self) -> bool {
        self.slot.is_some()
    }
}

/// Per-call-site resolvers, kept across render passes.
///
/// Each entry holds a single slot. Callers bound the map with
/// [`retain_within`](Self::retain_within) once a page is done.
pub struct ResolverCache {
    resolvers: HashMap<ScopeId, OverrideResolver>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl Default for ResolverCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverCache {
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(NoOpMetrics))
    }

    pub fn with_metrics(metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self {
            resolvers: HashMap::new(),
            metrics,
        }
    }

    /// Resolver for `scope`, created on first use
    pub fn resolver(&mut self, scope: &ScopeId) -> &mut OverrideResolver {
        let metrics = &self.metrics;
        self.resolvers
            .entry(scope.clone())
            .or_insert_with(|| OverrideResolver::with_metrics(Arc::clone(metrics)))
    }

    /// Drop every resolver whose call site is not `root` or one of its
    /// children
    pub fn retain_within(&mut self, root: &ScopeId) {
        self.resolvers.retain(|id, _| id.is_within(root));
    }

    pub fn metrics(&self) -> &Arc<dyn MetricsRecorder> {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn clear(&mut self) {
        self.resolvers.clear();
    }
}
