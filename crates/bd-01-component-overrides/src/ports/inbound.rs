//! Inbound Ports (Driving Ports)
//!
//! The API content renderers use to open override scopes while walking a
//! content tree.

use crate::domain::{ComponentMapping, OverrideScope, RenderContext};

/// Primary override API (Driving Port)
pub trait ComponentOverrideApi {
    /// Effective mapping for `scope` given the ambient mapping of `ctx`.
    ///
    /// Memoized per scope id across calls.
    fn resolve_scope(&mut self, ctx: &RenderContext, scope: &OverrideScope) -> ComponentMapping;

    /// Resolve `scope`, make the result ambient for `body`, and restore the
    /// previous ambient mapping afterwards.
    ///
    /// `body` gets the API back so nested scopes can be entered from it.
    fn enter_scope<T>(
        &mut self,
        ctx: &mut RenderContext,
        scope: &OverrideScope,
        body: impl FnOnce(&mut Self, &mut RenderContext) -> T,
    ) -> T
    where
        Self: Sized,
    {
        let effective = self.resolve_scope(ctx, scope);
        ctx.provide(effective, |ctx| body(self, ctx))
    }
}
