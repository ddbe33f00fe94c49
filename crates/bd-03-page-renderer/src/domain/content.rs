//! Content tree
//!
//! Markdown-AST-like tree the renderer walks. `scope` nodes are override
//! boundaries: their `components` are layered over the ambient mapping for
//! their children only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of page content, tagged by `type`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    Root {
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    Heading {
        depth: u8,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    /// Fenced code block
    Code {
        #[serde(default)]
        lang: Option<String>,
        value: String,
    },
    InlineCode {
        value: String,
    },
    Text {
        value: String,
    },
    Link {
        url: String,
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    ListItem {
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    Blockquote {
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    /// Override boundary
    Scope {
        id: String,
        /// Component key -> catalog name; `null` for none
        #[serde(default)]
        components: Value,
        /// Start over from the root default instead of the ambient mapping
        #[serde(default)]
        isolated: bool,
        #[serde(default)]
        children: Vec<ContentNode>,
    },
}

impl ContentNode {
    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text {
            value: value.into(),
        }
    }

    pub fn paragraph(children: Vec<ContentNode>) -> Self {
        ContentNode::Paragraph { children }
    }

    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Root { children }
            | ContentNode::Paragraph { children }
            | ContentNode::Heading { children, .. }
            | ContentNode::Link { children, .. }
            | ContentNode::List { children, .. }
            | ContentNode::ListItem { children }
            | ContentNode::Blockquote { children }
            | ContentNode::Scope { children, .. } => children,
            ContentNode::Code { .. } | ContentNode::InlineCode { .. } | ContentNode::Text { .. } => {
                &[]
            }
        }
    }

    /// Flow (block-level) nodes are separated by the configured separator;
    /// phrasing nodes are concatenated.
    pub fn is_block(&self) -> bool {
        !matches!(
            self,
            ContentNode::Text { .. } | ContentNode::InlineCode { .. } | ContentNode::Link { .. }
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
