//! Ancestry graph over directory paths.
//!
//! The graph links every supplied path to its parent, and that parent to its
//! own parent, up to a root. Directories that were never declared as folders
//! still become nodes; they are the places where sibling folders may merge.
//! Because paths only get shorter toward the root, the graph is a forest and
//! never contains a cycle.
//!
//! Edges point from parent to child. Roots and children are always reported
//! in path order so a merge pass is deterministic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::DfsPostOrder;
use petgraph::Direction;

use crate::path::parent_dir;

/// Parent→child containment graph restricted to the ancestors of a path set
#[derive(Debug, Clone, Default)]
pub struct AncestryGraph {
    /// Directed graph (parent directory -> child directory)
    graph: DiGraph<PathBuf, ()>,

    /// Path -> NodeIndex mapping for fast lookup
    index: HashMap<PathBuf, NodeIndex>,
}

impl AncestryGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for a set of directory paths.
    pub fn build<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut graph = Self::new();
        for path in paths {
            graph.insert(path.as_ref());
        }
        graph
    }

    /// Add `path` and every ancestor of it.
    ///
    /// Inserting a path twice, or a path whose ancestors are already present,
    /// leaves the graph unchanged.
    pub fn insert(&mut self, path: &Path) {
        let mut child = self.add_node(path);

        let mut current = path;
        while let Some(parent) = parent_dir(current) {
            let known = self.index.contains_key(parent);
            let parent_idx = self.add_node(parent);
            self.graph.update_edge(parent_idx, child, ());
            if known {
                // Every node already in the graph is linked up to its root
                break;
            }
            child = parent_idx;
            current = parent;
        }
    }

    fn add_node(&mut self, path: &Path) -> NodeIndex {
        if let Some(&idx) = self.index.get(path) {
            return idx;
        }
        let idx = self.graph.add_node(path.to_path_buf());
        self.index.insert(path.to_path_buf(), idx);
        idx
    }

    fn sorted_paths(&self, nodes: impl Iterator<Item = NodeIndex>) -> Vec<&Path> {
        let mut paths: Vec<&Path> = nodes.map(|idx| self.graph[idx].as_path()).collect();
        paths.sort();
        paths
    }

    /// Nodes without a parent, in path order.
    pub fn roots(&self) -> impl Iterator<Item = &Path> + '_ {
        self.sorted_paths(self.graph.externals(Direction::Incoming))
            .into_iter()
    }

    /// Direct children of `node`, in path order.
    pub fn children(&self, node: &Path) -> impl DoubleEndedIterator<Item = &Path> + '_ {
        let children = match self.index.get(node) {
            Some(&idx) => self.sorted_paths(self.graph.neighbors_directed(idx, Direction::Outgoing)),
            None => Vec::new(),
        };
        children.into_iter()
    }

    /// Every node under `root`, each one after all of its descendants.
    ///
    /// Iterative, so deep directory chains do not grow the call stack. A root
    /// that is not in the graph yields nothing.
    pub fn post_order(&self, root: &Path) -> impl Iterator<Item = &Path> + '_ {
        let mut dfs = self
            .index
            .get(root)
            .map(|&idx| DfsPostOrder::new(&self.graph, idx));
        std::iter::from_fn(move || {
            let idx = dfs.as_mut()?.next(&self.graph)?;
            Some(self.graph[idx].as_path())
        })
    }

    pub fn contains(&self, node: &Path) -> bool {
        self.index.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
