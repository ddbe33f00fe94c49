//! Per-page metadata

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata emitted for one page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub source: String,
    pub source_dir_name: String,
    pub slug: String,
    pub permalink: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub unlisted: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub version: String,
    #[serde(default)]
    pub front_matter: FrontMatter,
    #[serde(default)]
    pub sidebar: Option<String>,
    #[serde(default)]
    pub previous: Option<NavLink>,
    #[serde(default)]
    pub next: Option<NavLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub permalink: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub permalink: String,
}

/// Author-written front matter
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Page-level component overrides, kept raw: validated where they are
    /// turned into overrides
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub components: Value,
}

/// Table-of-contents entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub value: String,
    pub id: String,
    pub level: u8,
}

/// Metadata plus table of contents, as stored per page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub metadata: PageMetadata,
    #[serde(default)]
    pub toc: Vec<TocEntry>,
}

impl PageData {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Table-of-contents entries at exactly `level`
    pub fn toc_at_level(&self, level: u8) -> impl Iterator<Item = &TocEntry> {
        self.toc.iter().filter(move |entry| entry.level == level)
    }
}
