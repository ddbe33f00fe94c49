//! Component Override Service
//!
//! Orchestrates the read -> resolve -> provide cycle for each scope and
//! owns the per-call-site memo slots so they survive across render passes.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ComponentMapping, OverrideScope, RenderContext, ResolverCache, ScopeId};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::ComponentOverrideApi;

/// Component override service implementation
pub struct ComponentOverrideService {
    cache: ResolverCache,
    metrics: Arc<dyn MetricsRecorder>,
}

impl Default for ComponentOverrideService {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentOverrideService {
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(NoOpMetrics))
    }

    pub fn with_metrics(metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self {
            cache: ResolverCache::with_metrics(Arc::clone(&metrics)),
            metrics,
        }
    }

    /// Number of call sites with a memo slot
    pub fn tracked_scopes(&self) -> usize {
        self.cache.len()
    }

    /// Forget every memo slot
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Keep only the memo slots of `page` and its nested scopes.
    pub fn retain_page(&mut self, page: &ScopeId) {
        let before = self.cache.len();
        self.cache.retain_within(page);
        debug!(
            page = %page,
            dropped = before - self.cache.len(),
            "Pruned override memo slots"
        );
    }
}

impl ComponentOverrideApi for ComponentOverrideService {
    fn resolve_scope(&mut self, ctx: &RenderContext, scope: &OverrideScope) -> ComponentMapping {
        self.metrics.record_scope_entered();

        let parent = if scope.isolated {
            ctx.root().clone()
        } else {
            ctx.read()
        };

        let effective = self.cache.resolver(&scope.id).resolve(&parent, &scope.overrides);
        debug!(
            scope = %scope.id,
            isolated = scope.isolated,
            depth = ctx.depth(),
            entries = effective.len(),
            "Resolved override scope"
        );
        effective
    }
}
