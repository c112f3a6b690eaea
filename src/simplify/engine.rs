//! Merge engine: a bottom-up walk over the ancestry graph.
//!
//! ## Process
//!
//! 1.  **Post-order traversal**: every child of a node is walked before the
//!     node itself. The traversal is petgraph's iterative `DfsPostOrder`, so
//!     arbitrarily deep directory trees cannot overflow the call stack.
//!
//! 2.  **Blocking**: if any child could not be merged into a single folder,
//!     the node is `Blocked` as well. Whatever the children already merged
//!     stays in the [`Accumulator`]; blocking never rolls work back.
//!
//! 3.  **Merging**: otherwise one child is relocated to the node's path as a
//!     template, every child is checked against that template with
//!     [`can_merge`], and on success all children are folded into one folder
//!     that replaces them in the accumulator.
//!
//! Children are only compared with the template, never with each other.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use log::debug;

use crate::ancestry::AncestryGraph;
use crate::compat::can_merge;
use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::namespace::NamespaceCache;

/// Result of walking one ancestry node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The node's whole subtree is covered by this folder
    Merged(Folder),
    /// Nothing may merge at or above this node
    Blocked,
}

impl WalkOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, WalkOutcome::Blocked)
    }

    pub fn merged(&self) -> Option<&Folder> {
        match self {
            WalkOutcome::Merged(folder) => Some(folder),
            WalkOutcome::Blocked => None,
        }
    }
}

/// Current best folder per path for one merge pass
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    folders: BTreeMap<PathBuf, Folder>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input folder, rejecting a second folder at the same path.
    pub fn register(&mut self, folder: Folder) -> Result<()> {
        if self.folders.contains_key(folder.path()) {
            return Err(Error::DuplicateFolder {
                path: folder.path().to_path_buf(),
            });
        }
        self.folders.insert(folder.path().to_path_buf(), folder);
        Ok(())
    }

    pub fn get(&self, path: &Path) -> Option<&Folder> {
        self.folders.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.folders.contains_key(path)
    }

    fn replace(&mut self, absorbed: &[Folder], merged: Folder) {
        for child in absorbed {
            self.folders.remove(child.path());
        }
        self.folders.insert(merged.path().to_path_buf(), merged);
    }

    /// Paths currently held, in order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.folders.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Surviving folders, in path order.
    pub fn into_folders(self) -> impl Iterator<Item = Folder> {
        self.folders.into_values()
    }
}

/// Walk the subtree under `root`, merging bottom-up into `accumulator`.
pub fn walk(
    graph: &AncestryGraph,
    root: &Path,
    namespaces: &NamespaceCache,
    accumulator: &mut Accumulator,
) -> Result<WalkOutcome> {
    if !graph.contains(root) {
        return Err(Error::invariant(format!(
            "{} is not in the ancestry graph",
            root.display()
        )));
    }

    let mut finished: HashMap<&Path, WalkOutcome> = HashMap::new();
    for node in graph.post_order(root) {
        let mut outcomes = Vec::new();
        for child in graph.children(node) {
            let outcome = finished.remove(child).ok_or_else(|| {
                Error::invariant(format!("{} was not walked", child.display()))
            })?;
            outcomes.push(outcome);
        }
        let outcome = merge_node(node, outcomes, namespaces, accumulator)?;
        finished.insert(node, outcome);
    }

    finished
        .remove(root)
        .ok_or_else(|| Error::invariant(format!("{} was not walked", root.display())))
}

/// Decide the outcome for `node` given the outcomes of its children.
fn merge_node(
    node: &Path,
    outcomes: Vec<WalkOutcome>,
    namespaces: &NamespaceCache,
    accumulator: &mut Accumulator,
) -> Result<WalkOutcome> {
    let mut children = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            WalkOutcome::Merged(folder) => children.push(folder),
            WalkOutcome::Blocked => {
                debug!("{}: blocked below", node.display());
                return Ok(WalkOutcome::Blocked);
            }
        }
    }

    let Some(template) = children.first() else {
        return accumulator
            .get(node)
            .cloned()
            .map(WalkOutcome::Merged)
            .ok_or_else(|| {
                Error::invariant(format!(
                    "leaf directory {} has no declared folder",
                    node.display()
                ))
            });
    };

    if accumulator.contains(node) {
        return Err(Error::invariant(format!(
            "{} is declared as a folder but also contains declared folders",
            node.display()
        )));
    }

    let candidate = template.relocated(node);
    for child in &children {
        if !can_merge(&candidate, child, namespaces)? {
            debug!(
                "{}: cannot absorb {}",
                node.display(),
                child.path().display()
            );
            return Ok(WalkOutcome::Blocked);
        }
    }

    let mut merged = candidate;
    for child in &children {
        merged = child.merge(&merged)?;
    }
    debug!(
        "{}: merged {} {} folder(s)",
        node.display(),
        children.len(),
        merged.kind()
    );
    accumulator.replace(&children, merged.clone());
    Ok(WalkOutcome::Merged(merged))
}
