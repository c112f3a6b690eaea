//! Namespace resolution and the per-pass namespace cache.
//!
//! A namespace is the logical package path of a source file (`com/example`
//! for a file declaring `package com.example;`). Folders that want a
//! namespace prefix may only merge when their namespaces mirror the directory
//! layout, so the simplifier needs to know each folder's namespace.
//!
//! ## Resolvers
//!
//! Resolution is delegated to a [`NamespaceResolver`], which maps one
//! representative file to the directory form of its namespace. Resolvers
//! never fail loudly: a file that cannot be read or parsed resolves to
//! `None`, and the simplifier refuses to merge anything it cannot place.
//!
//! - [`DirectoryNamespaceResolver`]: the file's directory *is* its namespace.
//! - [`MappedNamespaceResolver`]: an explicit directory → namespace table,
//!   falling back to the directory itself.
//! - [`SourceDeclarationResolver`]: reads the `package` declaration from the
//!   file on disk.
//! - Any `Fn(&Path) -> Option<PathBuf>` closure.
//!
//! ## Cache
//!
//! [`NamespaceCache`] memoizes resolutions per representative path and turns
//! them into a directory → namespace table. When a folder's directory and its
//! namespace end in the same segments, those shared segments are peeled off
//! and the shorter pairs are recorded as well, so a directory that was never
//! declared as a folder still gets a namespace from the descendant that
//! established it first.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use regex::Regex;

use crate::error::Result;
use crate::folder::Folder;
use crate::path::parent_dir;

/// Maps a representative file to its namespace directory
pub trait NamespaceResolver {
    /// Resolve the namespace of `representative`, or `None` if it is unknown.
    fn resolve(&self, representative: &Path) -> Option<PathBuf>;
}

impl<F> NamespaceResolver for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn resolve(&self, representative: &Path) -> Option<PathBuf> {
        self(representative)
    }
}

/// Directory of a representative file; the empty path for a bare file name.
fn containing_dir(representative: &Path) -> PathBuf {
    representative
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Treats every file's directory as its namespace
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryNamespaceResolver;

impl NamespaceResolver for DirectoryNamespaceResolver {
    fn resolve(&self, representative: &Path) -> Option<PathBuf> {
        Some(containing_dir(representative))
    }
}

/// Explicit directory → namespace table
///
/// Directories without an entry resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct MappedNamespaceResolver {
    mappings: BTreeMap<PathBuf, PathBuf>,
}

impl MappedNamespaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map files directly inside `directory` to `namespace`.
    pub fn with_mapping<D, N>(mut self, directory: D, namespace: N) -> Self
    where
        D: Into<PathBuf>,
        N: Into<PathBuf>,
    {
        self.mappings.insert(directory.into(), namespace.into());
        self
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl<D, N> FromIterator<(D, N)> for MappedNamespaceResolver
where
    D: Into<PathBuf>,
    N: Into<PathBuf>,
{
    fn from_iter<T: IntoIterator<Item = (D, N)>>(iter: T) -> Self {
        Self {
            mappings: iter
                .into_iter()
                .map(|(dir, ns)| (dir.into(), ns.into()))
                .collect(),
        }
    }
}

impl NamespaceResolver for MappedNamespaceResolver {
    fn resolve(&self, representative: &Path) -> Option<PathBuf> {
        let dir = containing_dir(representative);
        match self.mappings.get(&dir) {
            Some(namespace) => Some(namespace.clone()),
            None => Some(dir),
        }
    }
}

/// Reads `package` declarations from source files under a project root
///
/// Understands Java and Kotlin style declarations (`package a.b.c;`, with or
/// without the semicolon). A readable file without a declaration is in the
/// default namespace, which resolves to the empty path.
pub struct SourceDeclarationResolver {
    root: PathBuf,
    declaration: Regex,
    fallback: Option<Box<dyn NamespaceResolver>>,
}

impl SourceDeclarationResolver {
    /// Create a resolver reading files relative to `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let declaration = Regex::new(
            r"(?m)^\s*package\s+([A-Za-z_][A-Za-z0-9_]*(?:\s*\.\s*[A-Za-z_][A-Za-z0-9_]*)*)\s*;?",
        )?;
        Ok(Self {
            root: root.into(),
            declaration,
            fallback: None,
        })
    }

    /// Consult `fallback` for files that cannot be read.
    pub fn with_fallback<R>(mut self, fallback: R) -> Self
    where
        R: NamespaceResolver + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Namespace directory declared in `source`, if any.
    pub fn parse_declaration(&self, source: &str) -> Option<PathBuf> {
        let captures = self.declaration.captures(source)?;
        Some(
            captures[1]
                .split('.')
                .map(str::trim)
                .collect::<PathBuf>(),
        )
    }
}

impl NamespaceResolver for SourceDeclarationResolver {
    fn resolve(&self, representative: &Path) -> Option<PathBuf> {
        let file = self.root.join(representative);
        match fs::read_to_string(&file) {
            Ok(source) => Some(self.parse_declaration(&source).unwrap_or_default()),
            Err(e) => {
                debug!("cannot read {} for namespace lookup: {}", file.display(), e);
                self.fallback
                    .as_ref()
                    .and_then(|fallback| fallback.resolve(representative))
            }
        }
    }
}

/// Namespace knowledge for one merge pass
#[derive(Debug, Clone, Default)]
pub struct NamespaceCache {
    resolved: HashMap<PathBuf, Option<PathBuf>>,
    directories: HashMap<PathBuf, PathBuf>,
}

impl NamespaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `representative` through `resolver`, at most once per path.
    pub fn resolve<R>(&mut self, representative: &Path, resolver: &R) -> Option<PathBuf>
    where
        R: NamespaceResolver + ?Sized,
    {
        if let Some(known) = self.resolved.get(representative) {
            return known.clone();
        }
        let namespace = resolver.resolve(representative);
        self.resolved
            .insert(representative.to_path_buf(), namespace.clone());
        namespace
    }

    /// Record the namespace of a folder that takes part in a merge pass.
    ///
    /// Folders without the namespace-prefix flag are ignored.
    pub fn register<R>(&mut self, folder: &Folder, resolver: &R)
    where
        R: NamespaceResolver + ?Sized,
    {
        if !folder.wants_namespace_prefix() {
            return;
        }
        let representative = folder.representative_path();
        let Some(namespace) = self.resolve(&representative, resolver) else {
            debug!(
                "no namespace for {} (looked up via {})",
                folder.path().display(),
                representative.display()
            );
            return;
        };
        if let Some(dir) = parent_dir(&representative) {
            self.record(dir, &namespace);
        }
    }

    /// Store `dir → namespace` and every shorter pair sharing a suffix.
    ///
    /// Existing entries win.
    fn record(&mut self, dir: &Path, namespace: &Path) {
        let mut dir = dir;
        let mut namespace = namespace;
        loop {
            trace!("namespace {} => {}", dir.display(), namespace.display());
            self.directories
                .entry(dir.to_path_buf())
                .or_insert_with(|| namespace.to_path_buf());

            match (dir.file_name(), namespace.file_name()) {
                (Some(d), Some(n)) if d == n => {}
                _ => break,
            }
            let (Some(dir_parent), Some(namespace_parent)) = (parent_dir(dir), namespace.parent())
            else {
                break;
            };
            dir = dir_parent;
            namespace = namespace_parent;
        }
    }

    /// Namespace recorded for directory `dir`.
    pub fn lookup(&self, dir: &Path) -> Option<&Path> {
        self.directories.get(dir).map(PathBuf::as_path)
    }

    /// Number of distinct representative paths resolved so far.
    pub fn resolutions(&self) -> usize {
        self.resolved.len()
    }
}
