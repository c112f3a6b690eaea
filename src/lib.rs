//! # Source Root Simplifier
//!
//! This library collapses an over-specific set of classified IDE folders
//! (source roots, test roots and excluded roots) into the smallest equivalent
//! set. It is designed to sit inside a project-generation pipeline, between
//! the step that classifies directories and the step that writes the IDE
//! project descriptor, and is also driven by the `source-root-simplifier`
//! command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use source_root_simplifier::folder::Folder;
//! use source_root_simplifier::namespace::DirectoryNamespaceResolver;
//! use source_root_simplifier::simplify::simplify;
//!
//! let folders = vec![Folder::source("src/left"), Folder::source("src/right")];
//! let simplified = simplify(folders, &DirectoryNamespaceResolver).unwrap();
//!
//! assert_eq!(simplified.into_vec(), vec![Folder::source("src")]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Folders (`folder`)**: immutable classified directory roots. Two folders
//!   can only ever merge when they share a kind and a namespace-prefix flag.
//! - **Ancestry graph (`ancestry`)**: links every folder path to its parents,
//!   including directories nobody declared, which is where siblings merge.
//! - **Namespaces (`namespace`)**: resolvers that map a file to its logical
//!   package path, and the per-pass cache the merge consults.
//! - **Compatibility (`compat`)**: the rule deciding whether an ancestor may
//!   absorb a descendant folder.
//! - **Simplification (`simplify`)**: the bottom-up merge engine and the
//!   assembly of the final folder set.
//! - **Manifests (`manifest`)**: the YAML/JSON format the CLI reads folder
//!   sets from.
//!
//! ## Execution Flow
//!
//! 1.  **Validation**: reject duplicate or nested non-excluded folders.
//! 2.  **Registration**: resolve each prefix folder's namespace once.
//! 3.  **Ancestry**: build the parent graph over all non-excluded paths.
//! 4.  **Merging**: walk each graph root bottom-up, merging compatible
//!     children into their parent and stopping above any incompatibility.
//! 5.  **Assembly**: return the excluded folders untouched plus every folder
//!     that survived the walk.
//!
//! The whole pass is a pure function of its input: it performs no I/O itself
//! and keeps no state between calls.

pub mod ancestry;
pub mod compat;
pub mod error;
pub mod folder;
pub mod manifest;
pub mod namespace;
pub mod output;
pub mod path;
pub mod simplify;

mod path_proptest;
mod simplify_proptest;

pub use error::{Error, Result};
pub use folder::{Folder, FolderKind};
pub use simplify::{simplify, SimplifiedFolders};
