//! Flattened route index.
//!
//! # Responsibilities
//! - Flatten every enabled sitemap set into `full path → node id` pairs
//! - Reject builds where two nodes produce the same path
//! - Answer O(1) containment and lookup queries
//!
//! # Design Decisions
//! - Immutable after construction; a rebuild produces a new index
//! - Child nodes are keyed under the set root, not under their parent's path
//! - Keys already carry the tenant prefix

use std::collections::hash_map::{Entry, HashMap};

use crate::error::{RouteError, RouteResult};
use crate::sitemap::model::{NodeId, SitemapNode, SitemapSet};
use crate::tenant::TenantPrefix;

/// Mapping from fully-qualified request path to sitemap node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteIndex {
    routes: HashMap<String, NodeId>,
}

impl RouteIndex {
    /// Build an index from the given sets. Disabled sets are skipped.
    pub fn build(sets: &[SitemapSet], prefix: &TenantPrefix) -> RouteResult<Self> {
        let mut routes = HashMap::new();

        for set in sets.iter().filter(|s| s.enabled) {
            let root = prefix.root(&set.root_path);
            tracing::trace!(set = %set.id, root = %root, "Flattening sitemap set");
            insert_nodes(&mut routes, &set.nodes, &root)?;
        }

        Ok(Self { routes })
    }

    pub fn get(&self, path: &str) -> Option<&NodeId> {
        self.routes.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeId)> {
        self.routes.iter().map(|(path, id)| (path.as_str(), id))
    }

    /// All indexed paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

fn insert_nodes(
    routes: &mut HashMap<String, NodeId>,
    nodes: &[SitemapNode],
    root: &str,
) -> RouteResult<()> {
    for node in nodes {
        let path = format!("{}{}", root, node.path);
        match routes.entry(path) {
            Entry::Occupied(existing) => {
                tracing::warn!(
                    path = %existing.key(),
                    existing = %existing.get(),
                    conflicting = %node.id,
                    "Duplicate sitemap route"
                );
                return Err(RouteError::DuplicateRoute {
                    path: existing.key().clone(),
                    existing: existing.get().clone(),
                    conflicting: node.id.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(node.id.clone());
            }
        }

        // Same root at every depth
        insert_nodes(routes, &node.child_nodes, root)?;
    }
    Ok(())
}
