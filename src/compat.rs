//! Compatibility predicate deciding whether a parent folder may absorb a child.

use log::trace;

use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::namespace::NamespaceCache;
use crate::path::{drop_trailing_segments, nesting_depth, segment_count};

/// Decide whether `parent` may absorb `child`.
///
/// Folders must agree on kind and namespace-prefix flag. Prefix-less folders
/// then merge purely structurally. Folders with a prefix additionally need
/// their namespaces to mirror the directory layout: removing the directory
/// levels between `parent` and `child` from the end of the child's namespace
/// must give exactly the parent's namespace. A missing namespace on either
/// side means no merge.
///
/// `child` must be strictly nested under `parent`; anything else is an
/// internal-consistency error.
pub fn can_merge(parent: &Folder, child: &Folder, namespaces: &NamespaceCache) -> Result<bool> {
    let depth = nesting_depth(parent.path(), child.path()).ok_or_else(|| {
        Error::invariant(format!(
            "{} is not nested under {}",
            child.path().display(),
            parent.path().display()
        ))
    })?;

    if parent.kind() != child.kind() {
        return Ok(false);
    }
    if parent.wants_namespace_prefix() != child.wants_namespace_prefix() {
        return Ok(false);
    }
    if !parent.wants_namespace_prefix() {
        return Ok(true);
    }

    let Some(parent_namespace) = namespaces.lookup(parent.path()) else {
        trace!("no namespace recorded for {}", parent.path().display());
        return Ok(false);
    };
    let Some(child_namespace) = namespaces.lookup(child.path()) else {
        trace!("no namespace recorded for {}", child.path().display());
        return Ok(false);
    };

    if depth >= segment_count(child_namespace) {
        // Namespace is too shallow to have an ancestor that far up
        return Ok(false);
    }
    Ok(drop_trailing_segments(child_namespace, depth).as_deref() == Some(parent_namespace))
}
