//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Source Root Simplifier - Collapse IDE source folders into the fewest roots
#[derive(Parser, Debug)]
#[command(name = "source-root-simplifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        env = "SOURCE_ROOT_SIMPLIFIER_LOG",
        default_value = "warn"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge the folders of a manifest into the minimal equivalent set
    Simplify(commands::simplify::SimplifyArgs),

    /// Display the ancestry tree of a manifest's folders
    Tree(commands::tree::TreeArgs),

    /// Validate a folder manifest without merging it
    Check(commands::check::CheckArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Simplify(args) => commands::simplify::execute(args, &self.color),
            Commands::Tree(args) => commands::tree::execute(args, &self.color),
            Commands::Check(args) => commands::check::execute(args, &self.color),
        }
    }
}

/// Route `log` records to stderr at the requested level.
fn init_logging(level: &str) {
    // A logger may already be installed when running under a test harness
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .try_init();
}
