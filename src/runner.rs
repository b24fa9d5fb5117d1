//! # Tool Invocation
//!
//! The coordinator never spawns processes directly. It goes through the
//! `ToolRunner` trait, which covers the two things it needs from the host:
//! finding an executable and running it to completion. `SystemRunner` is the
//! real implementation built on `std::process::Command`; tests substitute a
//! scripted runner so that no formatter has to be installed.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::search_path::SearchPath;

/// Captured result of one finished tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, or `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Whether the tool exited with status zero.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Standard output followed by standard error, trimmed.
    pub fn combined(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, _) => stderr.to_string(),
            (_, true) => stdout.to_string(),
            _ => format!("{}\n{}", stdout, stderr),
        }
    }
}

/// Trait for running external tools - allows mocking in tests
pub trait ToolRunner {
    /// Locate an executable by name on the given search path.
    fn locate(&self, tool: &str, search_path: &SearchPath) -> Option<PathBuf> {
        search_path.resolve(tool)
    }

    /// Run `program` with `args` and wait for it to finish.
    ///
    /// A non-zero exit is not an error here; callers decide what a status
    /// means for their tool. Only a failure to start the process is.
    fn run(&self, program: &Path, args: &[OsString], search_path: &SearchPath)
        -> Result<ToolOutput>;
}

/// The default implementation of `ToolRunner`, which spawns real processes.
///
/// The child's `PATH` is set to the supplied search path so that tools which
/// shell out themselves see the same directories the lookup used.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(
        &self,
        program: &Path,
        args: &[OsString],
        search_path: &SearchPath,
    ) -> Result<ToolOutput> {
        log::debug!("Running {} {:?}", program.display(), args);

        let output = Command::new(program)
            .args(args)
            .env("PATH", search_path.as_os_str())
            .output()
            .map_err(|source| Error::Launch {
                tool: program.display().to_string(),
                source,
            })?;

        let result = ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        log::trace!("{} exited with {:?}", program.display(), result.status);

        Ok(result)
    }
}
