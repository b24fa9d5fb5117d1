//! # Error Handling
//!
//! This module defines the centralized error type for `format-c-source`. It
//! uses the `thiserror` library to describe every way a formatting run can
//! stop early, each with a message suitable for printing straight to the
//! user running the commit hook.
//!
//! ## Key Components
//!
//! - **`Error`**: All failure modes of a run: no formatter requested, a tool
//!   missing from the search path, a missing configuration file, and a tool
//!   invocation that failed, was interrupted or could not be launched.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Every variant is terminal for the run. The command-line layer turns any of
//! them into exit code 1.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for format-c-source operations
#[derive(Error, Debug)]
pub enum Error {
    /// Neither an astyle nor a clang-format configuration was supplied.
    #[error("No action requested, specify at least one formatter configuration.")]
    NoAction,

    /// The formatter executable could not be found on the search path.
    ///
    /// The hint names the package-manager commands that install the tool.
    #[error("{tool} executable not found in PATH, is it installed?\nConsult your favorite package manager for installation\n{hint}")]
    ToolNotFound { tool: String, hint: String },

    /// The configuration file given for a formatter does not exist.
    #[error("{} not found. Please check that the file exists", path.display())]
    ConfigNotFound { path: PathBuf },

    /// A formatter exited with a failure status where success was required.
    ///
    /// The tool's own output is the diagnostic; when it printed nothing the
    /// file and exit code are shown instead.
    #[error("{tool} can not format file: {}", if output.is_empty() { format!("{} (exit code {code})", file.display()) } else { output.clone() })]
    ToolFailed {
        tool: String,
        file: PathBuf,
        code: i32,
        /// Captured standard output and error of the failed invocation
        output: String,
    },

    /// A formatter was terminated by a signal before it finished.
    #[error("{tool} was interrupted while processing {}", file.display())]
    Interrupted { tool: String, file: PathBuf },

    /// The formatter process could not be started at all.
    #[error("Failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
