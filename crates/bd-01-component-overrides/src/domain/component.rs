//! Component keys and the opaque renderer contract
//!
//! A component is anything that can turn a content element into markup.
//! This crate never looks inside a component; it only decides *which*
//! component a key resolves to at a given nesting level.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::OverrideError;

/// Identifier of a renderable content role.
///
/// The key space is open: pages may introduce keys the root default has
/// never heard of. The constants below cover the roles the page renderer
/// emits itself.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentKey(Cow<'static, str>);

impl ComponentKey {
    pub const PARAGRAPH: ComponentKey = ComponentKey::from_static("p");
    pub const H1: ComponentKey = ComponentKey::from_static("h1");
    pub const H2: ComponentKey = ComponentKey::from_static("h2");
    pub const H3: ComponentKey = ComponentKey::from_static("h3");
    pub const H4: ComponentKey = ComponentKey::from_static("h4");
    pub const H5: ComponentKey = ComponentKey::from_static("h5");
    pub const H6: ComponentKey = ComponentKey::from_static("h6");
    pub const CODE: ComponentKey = ComponentKey::from_static("code");
    pub const INLINE_CODE: ComponentKey = ComponentKey::from_static("inlineCode");
    pub const PRE: ComponentKey = ComponentKey::from_static("pre");
    pub const LINK: ComponentKey = ComponentKey::from_static("a");
    pub const UNORDERED_LIST: ComponentKey = ComponentKey::from_static("ul");
    pub const ORDERED_LIST: ComponentKey = ComponentKey::from_static("ol");
    pub const LIST_ITEM: ComponentKey = ComponentKey::from_static("li");
    pub const BLOCKQUOTE: ComponentKey = ComponentKey::from_static("blockquote");
    /// Wraps the whole rendered page when present.
    pub const WRAPPER: ComponentKey = ComponentKey::from_static("wrapper");

    /// Key backed by a static string (usable in `const` position)
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Create a key from arbitrary input, rejecting empty or
    /// whitespace-bearing names
    pub fn new(key: impl Into<String>) -> Result<Self, OverrideError> {
        let key = key.into();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(OverrideError::InvalidKey(key));
        }
        Ok(Self(Cow::Owned(key)))
    }

    /// Heading key for the given depth (1..=6)
    pub fn heading(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ComponentKey {
    type Error = OverrideError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl From<ComponentKey> for String {
    fn from(key: ComponentKey) -> Self {
        key.0.into_owned()
    }
}

/// Everything a component receives when asked to render one element
#[derive(Clone, Debug)]
pub struct ComponentProps<'a> {
    /// Role being rendered
    pub key: &'a ComponentKey,
    /// Element attributes (`id`, `href`, `className`, ...)
    pub attributes: &'a BTreeMap<String, String>,
    /// Already-rendered children markup
    pub children: &'a str,
}

/// Opaque renderer for one content role
pub trait Component: Send + Sync {
    /// Diagnostic name, also used by the component catalog
    fn name(&self) -> &str;

    /// Render one element to markup
    fn render(&self, props: &ComponentProps<'_>) -> String;
}

/// Shared handle to a component.
///
/// Identity of the handle (not of the renderer's output) is what the
/// resolver compares.
pub type ComponentRef = Arc<dyn Component>;

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({})", self.name())
    }
}

/// Component backed by a closure
pub struct FnComponent<F> {
    name: String,
    render: F,
}

impl<F> FnComponent<F>
where
    F: Fn(&ComponentProps<'_>) -> String + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, render: F) -> Self {
        Self {
            name: name.into(),
            render,
        }
    }

    /// Convenience: wrap straight into a [`ComponentRef`]
    pub fn shared(name: impl Into<String>, render: F) -> ComponentRef {
        Arc::new(Self::new(name, render))
    }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&ComponentProps<'_>) -> String + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &ComponentProps<'_>) -> String {
        (self.render)(props)
    }
}
