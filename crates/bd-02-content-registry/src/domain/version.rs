//! Versioned docs metadata: one record per docs version

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::sidebar::SidebarItem;

/// Metadata of one docs version, including its sidebars and doc index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMetadata {
    pub plugin_id: String,
    /// Version name used in URLs (`current`, `1.0.0`, ...)
    pub version: String,
    /// Human label
    pub label: String,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub badge: bool,
    #[serde(default)]
    pub no_index: bool,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub is_last: bool,
    #[serde(default)]
    pub docs_sidebars: BTreeMap<String, Vec<SidebarItem>>,
    #[serde(default)]
    pub docs: BTreeMap<String, DocSummary>,
}

/// Short description of one doc
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sidebar: Option<String>,
}
