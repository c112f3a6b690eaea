//! Path manipulation utilities for source-root-simplifier
//!
//! Directory and namespace paths are compared segment by segment, so
//! everything here works on `Path::components()` rather than on strings.

use std::path::{Path, PathBuf};

/// Parent directory of `path`, or `None` at a root.
///
/// Unlike [`Path::parent`], a single relative segment such as `src` has no
/// parent here: the empty path is not a directory anyone declares.
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

/// Number of segments in `path`.
pub fn segment_count(path: &Path) -> usize {
    path.components().count()
}

/// Segments separating `descendant` from `ancestor`.
///
/// Returns `None` unless `descendant` is strictly nested under `ancestor`.
pub fn nesting_depth(ancestor: &Path, descendant: &Path) -> Option<usize> {
    descendant
        .strip_prefix(ancestor)
        .ok()
        .map(segment_count)
        .filter(|depth| *depth > 0)
}

/// `path` with its last `count` segments removed.
///
/// Returns `None` when `path` has fewer than `count` segments. Dropping every
/// segment yields the empty path.
pub fn drop_trailing_segments(path: &Path, count: usize) -> Option<PathBuf> {
    let total = segment_count(path);
    if count > total {
        return None;
    }
    Some(path.components().take(total - count).collect())
}
