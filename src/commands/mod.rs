//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `source-root-simplifier` command-line tool. Each subcommand lives in its
//! own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `source_root_simplifier` library.

pub mod check;
pub mod simplify;
pub mod tree;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use source_root_simplifier::folder::Folder;
use source_root_simplifier::manifest::{self, Manifest};

/// Directory that relative manifest paths are resolved against.
///
/// Defaults to the directory containing the manifest.
pub fn project_root(manifest_path: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) => root.to_path_buf(),
        None => manifest_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

/// Load a manifest and build its folders.
pub fn load_folders(manifest_path: &Path, project_root: &Path) -> Result<(Manifest, Vec<Folder>)> {
    let manifest = manifest::from_file(manifest_path)
        .with_context(|| format!("Failed to load manifest from {}", manifest_path.display()))?;
    let folders = manifest
        .folders(project_root)
        .with_context(|| format!("Failed to collect folders under {}", project_root.display()))?;
    Ok((manifest, folders))
}
