//! Sitemap set and node definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a sitemap node, handed to the renderer after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a sitemap set's hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapNode {
    /// Unique node identifier.
    pub id: NodeId,

    /// Path fragment appended to the set's root path (e.g. "/blog.xml").
    pub path: String,

    /// Nested nodes. Their paths are relative to the set root as well.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_nodes: Vec<SitemapNode>,
}

impl SitemapNode {
    /// Create a leaf node.
    pub fn new(id: impl Into<NodeId>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            child_nodes: Vec::new(),
        }
    }

    /// Attach child nodes.
    pub fn with_children(mut self, children: Vec<SitemapNode>) -> Self {
        self.child_nodes = children;
        self
    }
}

/// A named, enableable group of sitemap nodes rooted at a configured path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapSet {
    /// Set identifier.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Disabled sets contribute no routes.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Root path fragment; a leading separator is ignored.
    #[serde(default)]
    pub root_path: String,

    /// Top-level nodes of the set.
    #[serde(default)]
    pub nodes: Vec<SitemapNode>,
}

fn default_enabled() -> bool {
    true
}

impl SitemapSet {
    /// Create an enabled set with no nodes.
    pub fn new(id: impl Into<String>, root_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            enabled: true,
            root_path: root_path.into(),
            nodes: Vec::new(),
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<SitemapNode>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Total number of nodes in the tree, children included.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[SitemapNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.child_nodes)).sum()
        }
        count(&self.nodes)
    }
}
