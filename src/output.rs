//! # Output Configuration
//!
//! Report lines are read by people watching a commit hook run, often inside a
//! GUI client that shows raw text. Color is therefore only used when the
//! terminal and the user allow it.
//!
//! The following are honored, in order of precedence:
//! - `--color=never|always|auto`
//! - `NO_COLOR` (any value, including empty) disables color
//! - `CLICOLOR=0` disables color
//! - `CLICOLOR_FORCE` (non-empty, not `0`) forces color
//! - `TERM=dumb` disables color
//! - otherwise color follows TTY detection on stdout

use std::env;
use std::io::{self, Write};
use std::path::Path;

use console::style;

/// Output configuration for report lines.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether ANSI styling should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Build from the `--color` flag value and the environment.
    ///
    /// Unrecognized values behave like `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_ascii_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Plain output, used by tests and non-interactive callers.
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    fn detect_color_support() -> bool {
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

    /// Write the report line for a file a formatter modified.
    pub fn report_formatted(&self, out: &mut dyn Write, file: &Path) -> io::Result<()> {
        if self.use_color {
            writeln!(
                out,
                "{} {}",
                style("Formatted:").green().force_styling(true),
                file.display()
            )
        } else {
            writeln!(out, "Formatted: {}", file.display())
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
