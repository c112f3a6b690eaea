//! # Simplify Command Implementation
//!
//! This module implements the `simplify` subcommand, which loads a folder
//! manifest, runs one merge pass over it and prints the resulting folder set.
//!
//! ## Resolvers
//!
//! - **`mapped`** (default): the manifest's `namespaces` section, with every
//!   other directory standing for its own namespace.
//! - **`directory`**: every directory is its own namespace.
//! - **`source`**: read `package` declarations from member files under the
//!   project root, falling back to the directory for files that are missing.
//!
//! This command is read-only; it never writes to the project.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use source_root_simplifier::namespace::{
    DirectoryNamespaceResolver, NamespaceResolver, SourceDeclarationResolver,
};
use source_root_simplifier::output::{render_text, OutputConfig};
use source_root_simplifier::simplify::simplify;

use super::{load_folders, project_root};

/// How namespaces are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolverKind {
    /// Use the manifest's namespaces section
    Mapped,
    /// Treat each directory as its own namespace
    Directory,
    /// Parse package declarations from source files
    Source,
}

/// Output format for the simplified folder set
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml,
}

/// Merge the folders of a manifest into the minimal equivalent set
#[derive(Args, Debug)]
pub struct SimplifyArgs {
    /// Path to the folder manifest (YAML, or JSON with a .json extension).
    #[arg(short, long, value_name = "FILE", default_value = "folders.yaml")]
    pub manifest: PathBuf,

    /// How to look up the namespace of folders with a namespace prefix.
    #[arg(long, value_enum, default_value = "mapped")]
    pub resolver: ResolverKind,

    /// Project root that folder paths are relative to.
    ///
    /// Defaults to the directory containing the manifest.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Execute the `simplify` command.
pub fn execute(args: SimplifyArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let root = project_root(&args.manifest, args.root.as_deref());
    let (manifest, folders) = load_folders(&args.manifest, &root)?;
    let input_count = folders.len();

    let resolver: Box<dyn NamespaceResolver> = match args.resolver {
        ResolverKind::Mapped => Box::new(manifest.resolver()),
        ResolverKind::Directory => Box::new(DirectoryNamespaceResolver),
        ResolverKind::Source => Box::new(
            SourceDeclarationResolver::new(&root)?.with_fallback(DirectoryNamespaceResolver),
        ),
    };

    let simplified = simplify(folders, resolver.as_ref())
        .with_context(|| format!("Failed to simplify folders from {}", args.manifest.display()))?;
    log::info!(
        "{} folder(s) simplified to {}",
        input_count,
        simplified.len()
    );

    match args.format {
        Format::Text => print!("{}", render_text(&simplified, &out)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&simplified)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(&simplified)?),
    }
    Ok(())
}
