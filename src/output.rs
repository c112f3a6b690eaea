//! # Output Rendering
//!
//! This module renders simplified folder sets for the CLI and decides whether
//! that output may use color and emoji.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use source_root_simplifier::output::{render_text, OutputConfig};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! print!("{}", render_text(&folders, &config));
//! ```

use std::env;

use console::style;

use crate::folder::{Folder, FolderKind};
use crate::simplify::SimplifiedFolders;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces colors on, `--color=never` forces them off, and
    /// anything else detects support from the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Kind label padded to a fixed width, colored when enabled.
pub fn kind_label(config: &OutputConfig, kind: FolderKind) -> String {
    let label = format!("{:<7}", kind.as_str());
    if !config.use_color {
        return label;
    }
    match kind {
        FolderKind::Source => style(label).force_styling(true).green().to_string(),
        FolderKind::Test => style(label).force_styling(true).cyan().to_string(),
        FolderKind::Exclude => style(label).force_styling(true).dim().to_string(),
    }
}

/// One line describing `folder`.
pub fn folder_line(config: &OutputConfig, folder: &Folder) -> String {
    let mut line = format!("{} {}", kind_label(config, folder.kind()), folder.path().display());
    if folder.wants_namespace_prefix() {
        line.push_str(" (namespace prefix)");
    }
    line
}

/// Render a folder set as one line per folder.
pub fn render_text(folders: &SimplifiedFolders, config: &OutputConfig) -> String {
    let mut out = String::new();
    for folder in folders {
        out.push_str(&folder_line(config, folder));
        out.push('\n');
    }
    out
}
