//! Content Registry
//!
//! Typed access to one docs version: its doc index and sidebars, plus the
//! per-page documents stored next to it.

use tracing::{debug, info};

use crate::domain::{
    flatten_links, neighbours, DocSummary, NavLink, PageData, SidebarItem, SidebarLink,
    VersionMetadata,
};
use crate::error::RegistryError;
use crate::ports::ContentSource;

/// Registry for one docs version
#[derive(Clone, Debug)]
pub struct ContentRegistry {
    version: VersionMetadata,
}

impl ContentRegistry {
    pub fn new(version: VersionMetadata) -> Self {
        Self { version }
    }

    /// Parse version metadata. Accepts either the bare record or the
    /// `{"version": {...}}` envelope the site emits.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let record = match value.get("version") {
            Some(inner) if inner.is_object() => inner.clone(),
            _ => value,
        };
        Ok(Self::new(serde_json::from_value(record)?))
    }

    /// Load and validate version metadata from `source`
    pub fn load(source: &dyn ContentSource, name: &str) -> Result<Self, RegistryError> {
        let registry = Self::from_json_str(&source.read(name)?)?;
        registry.validate()?;
        info!(
            version = %registry.version.version,
            docs = registry.version.docs.len(),
            sidebars = registry.version.docs_sidebars.len(),
            "Loaded content registry"
        );
        Ok(registry)
    }

    /// Load one page document from `source`
    pub fn load_page(source: &dyn ContentSource, name: &str) -> Result<PageData, RegistryError> {
        let page = PageData::from_json_str(&source.read(name)?)?;
        debug!(page = %page.metadata.id, "Loaded page metadata");
        Ok(page)
    }

    /// Cross-check docs and sidebars
    pub fn validate(&self) -> Result<(), RegistryError> {
        for doc in self.version.docs.values() {
            if let Some(sidebar) = &doc.sidebar {
                if !self.version.docs_sidebars.contains_key(sidebar) {
                    return Err(RegistryError::MissingSidebar {
                        doc_id: doc.id.clone(),
                        sidebar: sidebar.clone(),
                    });
                }
            }
        }

        for (name, items) in &self.version.docs_sidebars {
            for link in flatten_all(items) {
                if let Some(doc_id) = &link.doc_id {
                    if !self.version.docs.contains_key(doc_id) {
                        return Err(RegistryError::DanglingDocLink {
                            sidebar: name.clone(),
                            doc_id: doc_id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn version(&self) -> &VersionMetadata {
        &self.version
    }

    pub fn doc(&self, id: &str) -> Result<&DocSummary, RegistryError> {
        self.version
            .docs
            .get(id)
            .ok_or_else(|| RegistryError::UnknownDoc(id.to_string()))
    }

    pub fn sidebar(&self, name: &str) -> Result<&[SidebarItem], RegistryError> {
        self.version
            .docs_sidebars
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| RegistryError::UnknownSidebar(name.to_string()))
    }

    /// Listed links of a sidebar in reading order
    pub fn sidebar_links(&self, name: &str) -> Result<Vec<&SidebarLink>, RegistryError> {
        Ok(flatten_links(self.sidebar(name)?))
    }

    /// Name of the sidebar a doc belongs to, if any
    pub fn sidebar_of(&self, doc_id: &str) -> Result<Option<&str>, RegistryError> {
        Ok(self.doc(doc_id)?.sidebar.as_deref())
    }

    /// Previous/next navigation for a doc, as the page footer shows it
    pub fn neighbours(
        &self,
        doc_id: &str,
    ) -> Result<(Option<NavLink>, Option<NavLink>), RegistryError> {
        let Some(sidebar) = self.sidebar_of(doc_id)? else {
            return Ok((None, None));
        };
        let around = neighbours(self.sidebar(sidebar)?, doc_id).unwrap_or_default();
        Ok((around.previous.map(nav_link), around.next.map(nav_link)))
    }
}

fn nav_link(link: &SidebarLink) -> NavLink {
    NavLink {
        title: link.label.clone(),
        permalink: link.href.clone(),
    }
}

/// Every link including unlisted ones
fn flatten_all(items: &[SidebarItem]) -> Vec<&SidebarLink> {
    let mut out = Vec::new();
    let mut stack: Vec<&[SidebarItem]> = vec![items];
    while let Some(level) = stack.pop() {
        for item in level {
            match item {
                SidebarItem::Link(link) => out.push(link),
                SidebarItem::Category(category) => stack.push(&category.items),
            }
        }
    }
    out
}
