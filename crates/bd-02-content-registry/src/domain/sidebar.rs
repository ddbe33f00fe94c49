//! Sidebar tree
//!
//! Sidebars are ordered trees of links and collapsible categories. Reading
//! order (depth-first, categories expanded) drives previous/next navigation.

use serde::{Deserialize, Serialize};

/// One sidebar entry, tagged by `type`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SidebarItem {
    Link(SidebarLink),
    Category(SidebarCategory),
}

/// Leaf entry pointing at a page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarLink {
    pub label: String,
    pub href: String,
    /// Absent for external links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    /// Unlisted links are reachable but not shown or navigated to
    #[serde(default)]
    pub unlisted: bool,
}

/// Group of entries
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarCategory {
    pub label: String,
    #[serde(default)]
    pub collapsible: bool,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// Previous/next links around a doc
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbours<'a> {
    pub previous: Option<&'a SidebarLink>,
    pub next: Option<&'a SidebarLink>,
}

/// Listed links in reading order
pub fn flatten_links(items: &[SidebarItem]) -> Vec<&SidebarLink> {
    let mut out = Vec::new();
    collect_links(items, &mut out);
    out
}

fn collect_links<'a>(items: &'a [SidebarItem], out: &mut Vec<&'a SidebarLink>) {
    for item in items {
        match item {
            SidebarItem::Link(link) if !link.unlisted => out.push(link),
            SidebarItem::Link(_) => {}
            SidebarItem::Category(category) => collect_links(&category.items, out),
        }
    }
}

/// Listed doc links adjacent to `doc_id`, or `None` if the sidebar does
/// not list it
pub fn neighbours<'a>(items: &'a [SidebarItem], doc_id: &str) -> Option<Neighbours<'a>> {
    let docs: Vec<&SidebarLink> = flatten_links(items)
        .into_iter()
        .filter(|link| link.doc_id.is_some())
        .collect();
    let position = docs
        .iter()
        .position(|link| link.doc_id.as_deref() == Some(doc_id))?;

    Some(Neighbours {
        previous: position.checked_sub(1).map(|i| docs[i]),
        next: docs.get(position + 1).copied(),
    })
}
