//! # Source Root Simplifier CLI
//!
//! This is the binary entry point for the `source-root-simplifier`
//! command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the appropriate command and reporting its errors.
//!
//! The merge logic lives in the `lib.rs` library crate; the binary only loads
//! manifests and prints results.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
