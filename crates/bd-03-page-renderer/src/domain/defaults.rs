//! Root default components
//!
//! Plain HTML elements for every role the renderer emits. Built once and
//! handed to each render pass as the fixed root mapping.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use bd_01_component_overrides::{
    ComponentCatalog, ComponentKey, ComponentMapping, ComponentRef, FnComponent,
};

/// Root default mapping: one plain HTML element per content role.
///
/// `wrapper` is deliberately absent; pages opt into one through overrides.
pub fn default_components() -> ComponentMapping {
    let roles = [
        (ComponentKey::PARAGRAPH, "p"),
        (ComponentKey::H1, "h1"),
        (ComponentKey::H2, "h2"),
        (ComponentKey::H3, "h3"),
        (ComponentKey::H4, "h4"),
        (ComponentKey::H5, "h5"),
        (ComponentKey::H6, "h6"),
        (ComponentKey::CODE, "code"),
        (ComponentKey::INLINE_CODE, "code"),
        (ComponentKey::PRE, "pre"),
        (ComponentKey::LINK, "a"),
        (ComponentKey::UNORDERED_LIST, "ul"),
        (ComponentKey::ORDERED_LIST, "ol"),
        (ComponentKey::LIST_ITEM, "li"),
        (ComponentKey::BLOCKQUOTE, "blockquote"),
    ];

    roles
        .into_iter()
        .map(|(key, tag)| (key, html_element(tag)))
        .collect()
}

/// Catalog of every default element plus the layout elements pages use as
/// wrappers, each under its `html:<tag>` name.
pub fn builtin_catalog() -> ComponentCatalog {
    let mut catalog = ComponentCatalog::new();
    for (_, component) in default_components().iter() {
        catalog.register(Arc::clone(component));
    }
    for tag in ["article", "div", "section", "main", "strong", "em"] {
        catalog.register(html_element(tag));
    }
    catalog
}

/// Component rendering `<tag attrs>children</tag>`
pub fn html_element(tag: &'static str) -> ComponentRef {
    FnComponent::shared(format!("html:{tag}"), move |props| {
        format!(
            "<{tag}{}>{}</{tag}>",
            render_attributes(props.attributes),
            props.children
        )
    })
}

/// ` name="value"` pairs in key order; `className` is emitted as `class`
pub fn render_attributes(attributes: &BTreeMap<String, String>) -> String {
    attributes
        .iter()
        .map(|(name, value)| {
            let name = if name == "className" { "class" } else { name.as_str() };
            format!(" {}=\"{}\"", name, escape_html(value))
        })
        .collect()
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
