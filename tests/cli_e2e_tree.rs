//! End-to-end tests for the `tree` command.
//!
//! These tests invoke the actual CLI binary and validate the behavior of the
//! `tree` subcommand from a user's perspective.

mod common;
use common::prelude::*;

/// Test that tree --help flag shows help information
#[test]
fn test_tree_help() {
    let mut cmd = cargo_bin_cmd!("source-root-simplifier");

    cmd.arg("tree")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Display the ancestry tree of a manifest's folders",
        ));
}

/// Declared folders are marked with their kind, ancestors are not
#[test]
fn test_tree_marks_declared_folders() {
    let fixture = TestFixture::new().with_manifest(manifests::MIXED);

    fixture
        .command()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("[TREE] folders.yaml"))
        .stdout(predicate::str::contains("└─ a\n"))
        .stdout(predicate::str::contains("├─ a [source]"))
        .stdout(predicate::str::contains("└─ b [source]"))
        .stdout(predicate::str::contains("├─ c [test]"))
        .stdout(predicate::str::contains("└─ d\n"))
        .stdout(predicate::str::contains("exclude buck-out"));
}

/// Emoji are used when color is forced on
#[test]
fn test_tree_with_color() {
    let fixture = TestFixture::new().with_manifest(manifests::SIBLINGS);

    let mut cmd = cargo_bin_cmd!("source-root-simplifier");
    cmd.current_dir(fixture.path())
        .arg("--color=always")
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("🌳 folders.yaml"));
}

/// --depth cuts the tree below the given level
#[test]
fn test_tree_depth_limit() {
    let fixture = TestFixture::new().with_manifest(
        r#"
folders:
  - path: src/main/java
    kind: source
"#,
    );

    fixture
        .command()
        .arg("tree")
        .arg("--depth")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("main"))
        .stdout(predicate::str::contains("java").not());
}

/// A missing manifest fails with a load error
#[test]
fn test_tree_missing_manifest() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load manifest"));
}
