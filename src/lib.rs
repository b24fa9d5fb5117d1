//! # format-c-source
//!
//! A pre-commit hook step that runs `astyle` and `clang-format` over the C and
//! C++ files being committed and reports which of them were rewritten.
//!
//! The library holds all of the behavior so that it can be driven with a mock
//! process runner in tests. The `format-c-source` binary is a thin wrapper
//! that parses arguments, captures the search path and maps errors to the
//! process exit code.
//!
//! ## Core Concepts
//!
//! - **Request (`coordinator::FormatRequest`)**: the files to format and the
//!   configuration file of each requested formatter.
//! - **Formatters (`formatter`)**: the invocation protocol of each tool. astyle
//!   signals a change through its output, clang-format through a dry run.
//! - **Search path (`search_path`)**: `PATH` captured once and extended with
//!   `/usr/local/bin`, passed explicitly to lookups and child processes.
//! - **Runner (`runner`)**: the process-spawning seam.
//! - **Coordinator (`coordinator`)**: validates the request and runs each
//!   formatter in turn, stopping at the first error.

pub mod coordinator;
pub mod error;
pub mod formatter;
pub mod output;
pub mod runner;
pub mod search_path;
