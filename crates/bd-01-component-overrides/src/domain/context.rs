//! Override context store
//!
//! The ambient mapping is held on an explicit stack inside a
//! [`RenderContext`] that the renderer threads through its traversal. There
//! is no global: two render passes with separate contexts never observe
//! each other.
//!
//! Entering a scope pushes; leaving pops. The pop lives in a guard's `Drop`,
//! so it runs on normal return, on an early `?` return and during unwinding.

use std::ops::{Deref, DerefMut};

use super::mapping::ComponentMapping;

/// Per-traversal holder of the ambient component mapping
#[derive(Debug, Clone)]
pub struct RenderContext {
    root: ComponentMapping,
    stack: Vec<ComponentMapping>,
}

impl RenderContext {
    /// Fresh context whose ambient mapping is `root`.
    ///
    /// `root` is fixed for the lifetime of the context.
    pub fn new(root: ComponentMapping) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    /// Ambient mapping at this point of the traversal.
    ///
    /// Falls back to the root default when no scope has been entered.
    pub fn read(&self) -> ComponentMapping {
        self.stack.last().unwrap_or(&self.root).clone()
    }

    /// The fixed root default mapping
    pub fn root(&self) -> &ComponentMapping {
        &self.root
    }

    /// Number of scopes currently entered
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Run `body` with `mapping` as the ambient mapping, restoring the
    /// previous one afterwards on every exit path.
    pub fn provide<T>(
        &mut self,
        mapping: ComponentMapping,
        body: impl FnOnce(&mut RenderContext) -> T,
    ) -> T {
        let mut scope = self.enter(mapping);
        body(&mut scope)
    }

    /// RAII form of [`provide`](Self::provide): `mapping` stays ambient
    /// until the returned guard is dropped.
    pub fn enter(&mut self, mapping: ComponentMapping) -> ScopeGuard<'_> {
        let depth = self.stack.len();
        self.stack.push(mapping);
        ScopeGuard { ctx: self, depth }
    }
}

/// Guard returned by [`RenderContext::enter`]
///
/// Dereferences to the context so nested scopes can be entered through it.
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct ScopeGuard<'a> {
    ctx: &'a mut RenderContext,
    depth: usize,
}

impl Deref for ScopeGuard<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        self.ctx
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        self.ctx
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        // truncate rather than pop: also discards anything a leaked inner
        // guard left behind
        self.ctx.stack.truncate(self.depth);
    }
}
