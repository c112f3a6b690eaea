//! # Folder Manifest
//!
//! This module defines the manifest format used to hand a folder set to the
//! `source-root-simplifier` CLI, and the logic for loading it. A manifest is
//! a YAML (or JSON) document with two sections:
//!
//! ```yaml
//! folders:
//!   - path: java/com/example
//!     kind: source
//!     members: [java/com/example/Main.java]
//!   - path: java/com/example/gen
//!     kind: source
//!     scan: "*.java"
//!   - path: buck-out
//!     kind: exclude
//! namespaces:
//!   java/com/example: com/example
//! ```
//!
//! ## Folder entries
//!
//! - **`path`**: the folder's directory, relative to the project root.
//! - **`kind`**: `source`, `test` or `exclude`.
//! - **`namespace_prefix`**: whether the folder follows its package layout.
//!   Defaults to `false` for excluded folders and `true` otherwise.
//! - **`members`**: files inside the folder; the first one is used to look up
//!   the folder's namespace.
//! - **`scan`**: a glob; matching files under the folder on disk are added to
//!   `members`.
//!
//! ## Namespaces
//!
//! The optional `namespaces` map feeds a [`MappedNamespaceResolver`]: files
//! directly inside a listed directory belong to the given namespace.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::folder::{Folder, FolderKind};
use crate::namespace::MappedNamespaceResolver;

/// A folder manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Declared folders
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
    /// Directory → namespace overrides
    #[serde(default)]
    pub namespaces: BTreeMap<PathBuf, PathBuf>,
}

/// One folder declaration in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderEntry {
    /// The folder's directory
    pub path: PathBuf,
    /// What kind of root the folder is
    pub kind: FolderKind,
    /// Whether the folder follows its namespace layout
    #[serde(default)]
    pub namespace_prefix: Option<bool>,
    /// Files contained in the folder
    #[serde(default)]
    pub members: Vec<PathBuf>,
    /// Glob selecting additional members from disk
    #[serde(default)]
    pub scan: Option<String>,
}

impl FolderEntry {
    /// The effective namespace-prefix flag.
    pub fn wants_namespace_prefix(&self) -> bool {
        self.namespace_prefix
            .unwrap_or(self.kind != FolderKind::Exclude)
    }

    /// Build the folder, scanning `project_root` for members when requested.
    pub fn to_folder(&self, project_root: &Path) -> Result<Folder> {
        let mut members = self.members.clone();
        if let Some(pattern) = &self.scan {
            members.extend(scan_members(project_root, &self.path, pattern)?);
        }
        Ok(Folder::new(self.path.clone(), self.kind, self.wants_namespace_prefix())
            .with_members(members))
    }
}

impl Manifest {
    /// Build every declared folder.
    ///
    /// Relative `scan` lookups are resolved against `project_root`.
    pub fn folders(&self, project_root: &Path) -> Result<Vec<Folder>> {
        self.folders
            .iter()
            .map(|entry| entry.to_folder(project_root))
            .collect()
    }

    /// Resolver built from the `namespaces` section.
    pub fn resolver(&self) -> MappedNamespaceResolver {
        self.namespaces
            .iter()
            .map(|(dir, ns)| (dir.clone(), ns.clone()))
            .collect()
    }
}

/// Convert a serde error into a manifest error with a hint where one helps.
fn manifest_error(message: String) -> Error {
    let hint = if message.contains("unknown variant") {
        Some("kind must be one of: source, test, exclude".to_string())
    } else if message.contains("missing field `path`") {
        Some("add 'path:' to every folder entry".to_string())
    } else if message.contains("missing field `kind`") {
        Some("add 'kind:' to every folder entry".to_string())
    } else if message.contains("unknown field") {
        Some(
            "folder entries accept path, kind, namespace_prefix, members and scan".to_string(),
        )
    } else {
        None
    };
    Error::ManifestParse { message, hint }
}

/// Parse a YAML manifest.
pub fn parse(yaml_content: &str) -> Result<Manifest> {
    serde_yaml::from_str(yaml_content).map_err(|e| manifest_error(e.to_string()))
}

/// Parse a JSON manifest.
pub fn parse_json(json_content: &str) -> Result<Manifest> {
    serde_json::from_str(json_content).map_err(|e| manifest_error(e.to_string()))
}

/// Load a manifest from disk; `.json` files are parsed as JSON, anything
/// else as YAML.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json(&content)
    } else {
        parse(&content)
    }
}

/// Files under `project_root/folder` whose folder-relative path matches
/// `pattern`, returned relative to `project_root` and in path order.
///
/// A folder that does not exist on disk has no members.
pub fn scan_members(project_root: &Path, folder: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(pattern)?;
    let base = project_root.join(folder);
    if !base.is_dir() {
        warn!("cannot scan {}: not a directory", base.display());
        return Ok(Vec::new());
    }

    let mut members = Vec::new();
    for entry in WalkDir::new(&base).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&base) else {
            continue;
        };
        if pattern.matches_path(relative) {
            members.push(folder.join(relative));
        }
    }
    debug!(
        "scanned {} member(s) of {} matching {}",
        members.len(),
        folder.display(),
        pattern
    );
    Ok(members)
}
