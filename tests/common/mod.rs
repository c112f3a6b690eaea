//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions, and manifests
//! to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manifest(manifests::SIBLINGS);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
#[allow(unused_imports)]
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::manifests;
    pub use super::TestFixture;
}

/// Common manifest snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// Two sibling source folders that merge into their parent.
    pub const SIBLINGS: &str = r#"
folders:
  - path: src/left
    kind: source
  - path: src/right
    kind: source
"#;

    /// Sibling folders whose namespaces disagree.
    pub const MISMATCHED_NAMESPACES: &str = r#"
folders:
  - path: src/left
    kind: source
  - path: src/right
    kind: source
namespaces:
  src/left: onething
  src/right: another
"#;

    /// Source and test folders sharing a tree, plus an excluded folder.
    pub const MIXED: &str = r#"
folders:
  - path: a/a/a
    kind: source
  - path: a/a/b
    kind: source
  - path: a/b
    kind: source
  - path: a/c
    kind: test
  - path: a/d/a
    kind: test
  - path: buck-out
    kind: exclude
"#;

    /// A folder declared inside another declared folder.
    pub const NESTED: &str = r#"
folders:
  - path: src
    kind: source
  - path: src/main
    kind: source
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "invalid: yaml: content:";
}

/// A test fixture that provides a temporary project directory.
///
/// The manifest is written to `folders.yaml` at the fixture root, which is
/// also the project root the CLI resolves folder paths against.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `folders.yaml` manifest with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp_dir
            .child("folders.yaml")
            .write_str(content)
            .expect("Failed to write manifest");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.temp_dir.path().join("folders.yaml")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("source-root-simplifier");
        cmd.current_dir(self.path()).arg("--color=never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_manifest() {
        let fixture = TestFixture::new().with_manifest(manifests::SIBLINGS);
        assert!(fixture.manifest_path().exists());
    }

    #[test]
    fn test_manifests_are_valid_yaml() {
        let snippets = [
            manifests::SIBLINGS,
            manifests::MISMATCHED_NAMESPACES,
            manifests::MIXED,
            manifests::NESTED,
        ];

        for manifest in snippets {
            serde_yaml::from_str::<serde_yaml::Value>(manifest)
                .expect("Manifest should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(manifests::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
