//! # Error Handling
//!
//! This module defines the centralized error type for the
//! `source-root-simplifier` library. It uses `thiserror` to build a single
//! `Error` enum covering every failure the library can report, and a
//! `Result<T>` alias used throughout the crate.
//!
//! There are two broad families of errors:
//!
//! - **Internal-consistency errors** (`Invariant`, `DuplicateFolder`): the
//!   merge engine was handed input it cannot reason about, such as two folders
//!   with the same path or a declared folder nested inside another declared
//!   folder. These fail fast instead of producing a plausible but wrong
//!   folder set.
//! - **Loading errors** (`ManifestParse`, `Io`, `Yaml`, `Json`, `Glob`,
//!   `Walk`): problems reading a folder manifest or scanning folder members
//!   from disk.
//!
//! Namespace resolution never produces an `Error`. Resolvers report failure
//! as `None`, which the compatibility predicate treats as "do not merge".

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for source-root-simplifier operations
#[derive(Error, Debug)]
pub enum Error {
    /// The merge engine reached a state that well-formed input cannot produce.
    #[error("Internal consistency error: {message}")]
    Invariant { message: String },

    /// Two input folders share the same path.
    #[error("Duplicate folder path: {}", path.display())]
    DuplicateFolder { path: PathBuf },

    /// The folder manifest could not be interpreted.
    ///
    /// Includes an optional hint about how to fix the manifest.
    #[error("Manifest parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ManifestParse {
        message: String,
        /// Optional hint for how to fix the manifest
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON parsing or rendering error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A directory walk error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Shorthand for an [`Error::Invariant`] with the given message.
    pub fn invariant(message: impl Into<String>) -> Self {
        Error::Invariant {
            message: message.into(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
