//! Classified folder values handed to the simplifier.
//!
//! A [`Folder`] is an immutable description of one directory root in an IDE
//! project descriptor: where it is, what kind of root it is, whether its
//! contents are expected to follow a namespace (package) prefix, and which
//! files it contains. Merging never mutates a folder; it produces a new one.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::segment_count;

/// File name used to build a representative path for folders without members.
pub const PLACEHOLDER_FILE_NAME: &str = "notfound";

/// Classification of a folder root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    /// Production sources
    Source,
    /// Test sources
    Test,
    /// Excluded from indexing; never merged
    Exclude,
}

impl FolderKind {
    /// Lowercase name as used in manifests and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderKind::Source => "source",
            FolderKind::Test => "test",
            FolderKind::Exclude => "exclude",
        }
    }
}

impl fmt::Display for FolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified directory root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folder {
    path: PathBuf,
    kind: FolderKind,
    wants_namespace_prefix: bool,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    members: BTreeSet<PathBuf>,
}

impl Folder {
    /// Create a folder with an explicit namespace-prefix flag and no members.
    pub fn new<P: Into<PathBuf>>(path: P, kind: FolderKind, wants_namespace_prefix: bool) -> Self {
        Self {
            path: path.into(),
            kind,
            wants_namespace_prefix,
            members: BTreeSet::new(),
        }
    }

    /// A source root that follows its namespace prefix.
    pub fn source<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, FolderKind::Source, true)
    }

    /// A test root that follows its namespace prefix.
    pub fn test<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, FolderKind::Test, true)
    }

    /// An excluded root.
    pub fn exclude<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, FolderKind::Exclude, false)
    }

    /// Same folder, but merged purely structurally.
    pub fn without_namespace_prefix(mut self) -> Self {
        self.wants_namespace_prefix = false;
        self
    }

    /// Same folder with the given member files added.
    pub fn with_members<I, P>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> FolderKind {
        self.kind
    }

    pub fn wants_namespace_prefix(&self) -> bool {
        self.wants_namespace_prefix
    }

    pub fn members(&self) -> &BTreeSet<PathBuf> {
        &self.members
    }

    pub fn is_excluded(&self) -> bool {
        self.kind == FolderKind::Exclude
    }

    /// Whether `other` could ever be combined with this folder.
    pub fn is_compatible_with(&self, other: &Folder) -> bool {
        self.kind == other.kind && self.wants_namespace_prefix == other.wants_namespace_prefix
    }

    /// The file whose namespace stands in for the whole folder.
    ///
    /// This is the first member in path order, or a placeholder file directly
    /// inside the folder when there are no members.
    pub fn representative_path(&self) -> PathBuf {
        match self.members.iter().next() {
            Some(first) => first.clone(),
            None => self.path.join(PLACEHOLDER_FILE_NAME),
        }
    }

    /// A memberless copy of this folder moved to `path`.
    ///
    /// The merge engine uses this as the template for an ancestor directory.
    pub fn relocated<P: Into<PathBuf>>(&self, path: P) -> Self {
        Self {
            path: path.into(),
            kind: self.kind,
            wants_namespace_prefix: self.wants_namespace_prefix,
            members: BTreeSet::new(),
        }
    }

    /// Combine two folders into one rooted at the ancestor of the two paths.
    ///
    /// Both folders must share kind and namespace-prefix flag, and one path
    /// must contain the other.
    pub fn merge(&self, other: &Folder) -> Result<Folder> {
        if !self.is_compatible_with(other) {
            return Err(Error::invariant(format!(
                "cannot merge {} folder {} with {} folder {}",
                self.kind,
                self.path.display(),
                other.kind,
                other.path.display()
            )));
        }

        let (outer, inner) = if segment_count(&self.path) <= segment_count(&other.path) {
            (self, other)
        } else {
            (other, self)
        };
        if !inner.path.starts_with(&outer.path) {
            return Err(Error::invariant(format!(
                "cannot merge unrelated folders {} and {}",
                outer.path.display(),
                inner.path.display()
            )));
        }

        Ok(Folder {
            path: outer.path.clone(),
            kind: self.kind,
            wants_namespace_prefix: self.wants_namespace_prefix,
            members: self.members.union(&other.members).cloned().collect(),
        })
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path.display())
    }
}
