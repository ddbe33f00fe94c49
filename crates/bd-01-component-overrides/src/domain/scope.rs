//! Override scope: one nesting boundary in a content tree

use super::overrides::Overrides;
use super::resolver::ScopeId;

/// A nesting boundary that may layer overrides onto its ambient mapping
#[derive(Clone, Debug)]
pub struct OverrideScope {
    /// Call-site identity; selects the memo slot
    pub id: ScopeId,
    /// Local overrides
    pub overrides: Overrides,
    /// Ignore the ambient mapping and layer directly on the root default
    pub isolated: bool,
}

impl OverrideScope {
    pub fn new(id: ScopeId, overrides: impl Into<Overrides>) -> Self {
        Self {
            id,
            overrides: overrides.into(),
            isolated: false,
        }
    }

    /// Scope that starts over from the root default
    pub fn isolated(id: ScopeId, overrides: impl Into<Overrides>) -> Self {
        Self {
            id,
            overrides: overrides.into(),
            isolated: true,
        }
    }
}
