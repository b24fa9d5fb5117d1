//! # Formatter Adapters
//!
//! The two supported formatters report changes in different ways, so each
//! gets its own invocation protocol behind a common `Formatter` interface:
//!
//! - **astyle** always exits 0 on valid input and rewrites the file in place.
//!   The only sign that something changed is a `Formatted` line on stdout.
//! - **clang-format** is first run as a `--dry-run --Werror` check. A non-zero
//!   status means the file needs formatting, and only then is it run again
//!   with `-i` to rewrite it.
//!
//! Any other failure, including a tool killed by a signal, is returned as an
//! error and stops the run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::runner::{ToolOutput, ToolRunner};
use crate::search_path::SearchPath;

/// Substring astyle prints when it rewrote a file.
pub const ASTYLE_FORMATTED_MARKER: &str = "Formatted";

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Formatted,
    Unchanged,
}

/// A configured formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatter {
    /// astyle with an `--options` file
    Astyle { options: PathBuf },
    /// clang-format with a `--style=file:` file
    ClangFormat { style: PathBuf },
}

impl Formatter {
    /// Executable name looked up on the search path.
    pub fn tool(&self) -> &'static str {
        match self {
            Formatter::Astyle { .. } => "astyle",
            Formatter::ClangFormat { .. } => "clang-format",
        }
    }

    /// Path of the configuration file this formatter was given.
    pub fn config(&self) -> &Path {
        match self {
            Formatter::Astyle { options } => options,
            Formatter::ClangFormat { style } => style,
        }
    }

    /// Installation hint printed when the executable is missing.
    pub fn install_hint(&self) -> &'static str {
        match self {
            Formatter::Astyle { .. } => {
                "(e.g. 'brew install astyle' on mac or 'apt-get install astyle' on Ubuntu)"
            }
            Formatter::ClangFormat { .. } => {
                "(e.g. 'brew install clang-format' on mac or 'apt-get install clang-format' on Debian/Ubuntu)"
            }
        }
    }

    /// Format one file with the executable at `exe`.
    pub fn format_file(
        &self,
        exe: &Path,
        file: &Path,
        runner: &dyn ToolRunner,
        search_path: &SearchPath,
    ) -> Result<FileOutcome> {
        match self {
            Formatter::Astyle { options } => {
                let args: Vec<OsString> =
                    vec![flag_with_path("--options=", options), file.into()];
                let output = runner.run(exe, &args, search_path)?;
                self.require_success(&output, file)?;

                if output.stdout.contains(ASTYLE_FORMATTED_MARKER) {
                    Ok(FileOutcome::Formatted)
                } else {
                    Ok(FileOutcome::Unchanged)
                }
            }
            Formatter::ClangFormat { style } => {
                let style_arg = flag_with_path("--style=file:", style);

                let check_args: Vec<OsString> = vec![
                    "--dry-run".into(),
                    "--Werror".into(),
                    style_arg.clone(),
                    "-i".into(),
                    file.into(),
                ];
                let check = runner.run(exe, &check_args, search_path)?;
                match check.status {
                    None => return Err(self.interrupted(file)),
                    Some(0) => return Ok(FileOutcome::Unchanged),
                    Some(code) => {
                        log::debug!("{} needs formatting (dry run exit {})", file.display(), code)
                    }
                }

                let apply_args: Vec<OsString> = vec![style_arg, "-i".into(), file.into()];
                let applied = runner.run(exe, &apply_args, search_path)?;
                self.require_success(&applied, file)?;
                Ok(FileOutcome::Formatted)
            }
        }
    }

    fn require_success(&self, output: &ToolOutput, file: &Path) -> Result<()> {
        if output.success() {
            return Ok(());
        }

        match output.status {
            Some(code) => Err(Error::ToolFailed {
                tool: self.tool().to_string(),
                file: file.to_path_buf(),
                code,
                output: output.combined(),
            }),
            None => Err(self.interrupted(file)),
        }
    }

    fn interrupted(&self, file: &Path) -> Error {
        Error::Interrupted {
            tool: self.tool().to_string(),
            file: file.to_path_buf(),
        }
    }
}

fn flag_with_path(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push(path);
    arg
}
