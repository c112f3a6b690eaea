//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which validates a folder
//! manifest without merging it.
//!
//! ## Functionality
//!
//! - **Manifest Parsing**: the manifest must parse and every `scan` glob must
//!   be a valid pattern.
//! - **Folder Validation**: non-excluded folders must have unique paths and
//!   must not be nested inside one another.
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use source_root_simplifier::folder::FolderKind;
use source_root_simplifier::manifest;
use source_root_simplifier::output::{emoji, OutputConfig};
use source_root_simplifier::simplify::validate;

use super::project_root;

/// Validate a folder manifest without merging it
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the folder manifest to validate.
    #[arg(short, long, value_name = "FILE", default_value = "folders.yaml")]
    pub manifest: PathBuf,

    /// Project root that folder paths are relative to.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Execute the `check` command.
///
/// Prints a report of every problem found and returns an error when there
/// was at least one.
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let manifest_path = &args.manifest;
    println!(
        "{} Checking manifest: {}",
        emoji(&out, "🔍", "[SCAN]"),
        manifest_path.display()
    );

    let manifest = match manifest::from_file(manifest_path) {
        Ok(manifest) => {
            println!("{} Manifest parsed successfully", emoji(&out, "✅", "[OK]"));
            manifest
        }
        Err(e) => {
            println!(
                "{} Manifest parsing failed: {}",
                emoji(&out, "❌", "[ERR]"),
                e
            );
            return Err(anyhow::anyhow!("Manifest parsing failed: {}", e));
        }
    };

    let count = |kind: FolderKind| manifest.folders.iter().filter(|f| f.kind == kind).count();
    println!("\n{} Manifest Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Source folders: {}", count(FolderKind::Source));
    println!("   Test folders: {}", count(FolderKind::Test));
    println!("   Excluded folders: {}", count(FolderKind::Exclude));
    println!("   Namespace overrides: {}", manifest.namespaces.len());

    let mut has_errors = false;
    for (idx, entry) in manifest.folders.iter().enumerate() {
        if let Some(pattern) = &entry.scan {
            if let Err(e) = glob::Pattern::new(pattern) {
                println!(
                    "{} Invalid scan pattern in folder {} ({}): {}",
                    emoji(&out, "❌", "[ERR]"),
                    idx,
                    entry.path.display(),
                    e
                );
                has_errors = true;
            }
        }
    }

    if !has_errors {
        let root = project_root(manifest_path, args.root.as_deref());
        match manifest
            .folders(&root)
            .and_then(|folders| validate(&folders))
        {
            Ok(()) => println!(
                "{} No duplicate or nested folders",
                emoji(&out, "✅", "[OK]")
            ),
            Err(e) => {
                println!("{} {}", emoji(&out, "❌", "[ERR]"), e);
                has_errors = true;
            }
        }
    }

    println!("\n{} Check Result:", emoji(&out, "🎯", "[RESULT]"));
    if has_errors {
        println!(
            "{} Manifest has errors that must be fixed",
            emoji(&out, "❌", "[ERR]")
        );
        return Err(anyhow::anyhow!("Manifest check failed"));
    }
    println!("{} Manifest is valid", emoji(&out, "✅", "[OK]"));
    Ok(())
}
