//! # Folder Simplification
//!
//! This module collapses an over-specific set of classified folders into the
//! smallest equivalent set. It is the core of the crate and is split into:
//!
//! - **`engine`**: the bottom-up merge walk over the ancestry graph, its
//!   `WalkOutcome` and the `Accumulator` of finalized folders.
//! - **`assemble`**: the final `SimplifiedFolders` set.
//!
//! ## Execution Flow
//!
//! 1.  **Validation**: the non-excluded folders must have unique paths and
//!     must not be nested inside one another.
//! 2.  **Registration**: each non-excluded folder is entered into the
//!     accumulator and, when it wants a namespace prefix, its namespace is
//!     resolved once and recorded in the per-pass `NamespaceCache`. Excluded
//!     folders skip the engine entirely.
//! 3.  **Ancestry**: an `AncestryGraph` is built over the registered paths.
//! 4.  **Merging**: every root of the graph is walked bottom-up.
//! 5.  **Assembly**: excluded folders and the accumulator's survivors form the
//!     result.
//!
//! Everything is scoped to one call: no cache or accumulator outlives it.

pub mod assemble;
pub mod engine;

pub use assemble::{assemble, SimplifiedFolders};
pub use engine::{walk, Accumulator, WalkOutcome};

use std::collections::HashSet;
use std::path::Path;

use log::debug;

use crate::ancestry::AncestryGraph;
use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::namespace::{NamespaceCache, NamespaceResolver};
use crate::path::parent_dir;

/// Collapse `folders` into the minimal equivalent set.
///
/// `resolver` is consulted at most once per representative file for the
/// folders that want a namespace prefix.
///
/// # Errors
///
/// Returns [`Error::DuplicateFolder`] when two non-excluded folders share a
/// path and [`Error::Invariant`] when one non-excluded folder is nested inside
/// another.
pub fn simplify<I, R>(folders: I, resolver: &R) -> Result<SimplifiedFolders>
where
    I: IntoIterator<Item = Folder>,
    R: NamespaceResolver + ?Sized,
{
    let mut folders: Vec<Folder> = folders.into_iter().collect();
    folders.sort_by(|a, b| a.path().cmp(b.path()));
    validate(&folders)?;

    let mut excluded = Vec::new();
    let mut accumulator = Accumulator::new();
    let mut namespaces = NamespaceCache::new();
    for folder in folders {
        if folder.is_excluded() {
            excluded.push(folder);
        } else {
            namespaces.register(&folder, resolver);
            accumulator.register(folder)?;
        }
    }
    debug!(
        "simplifying {} folder(s), {} excluded, {} namespace lookup(s)",
        accumulator.len(),
        excluded.len(),
        namespaces.resolutions()
    );

    let graph = AncestryGraph::build(accumulator.paths());
    for root in graph.roots() {
        let outcome = walk(&graph, root, &namespaces, &mut accumulator)?;
        if let WalkOutcome::Merged(folder) = outcome {
            debug!("{} collapses to {}", root.display(), folder);
        }
    }

    Ok(assemble(excluded, accumulator))
}

/// Check that the non-excluded folders can go through a merge pass.
///
/// Excluded folders are passed through untouched and are not checked.
pub fn validate(folders: &[Folder]) -> Result<()> {
    let mut declared: HashSet<&Path> = HashSet::new();
    for folder in folders.iter().filter(|folder| !folder.is_excluded()) {
        if !declared.insert(folder.path()) {
            return Err(Error::DuplicateFolder {
                path: folder.path().to_path_buf(),
            });
        }
    }

    for path in &declared {
        let mut current = *path;
        while let Some(parent) = parent_dir(current) {
            if declared.contains(parent) {
                return Err(Error::invariant(format!(
                    "{} is declared inside declared folder {}",
                    path.display(),
                    parent.display()
                )));
            }
            current = parent;
        }
    }
    Ok(())
}
