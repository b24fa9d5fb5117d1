//! # Executable Search Path
//!
//! Some git clients launch commit hooks with a truncated `PATH` that leaves
//! out `/usr/local/bin`, where Homebrew and hand-built formatters usually
//! live. `SearchPath` captures `PATH` once, appends that directory when it is
//! missing, and is then handed explicitly to tool lookup and to every child
//! process. The process environment itself is never modified.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Directory appended to the search path on non-Windows hosts.
pub const LOCAL_BIN: &str = "/usr/local/bin";

/// An executable search path, in the platform's `PATH` syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    value: OsString,
}

impl SearchPath {
    /// Wrap a raw `PATH`-style value without normalizing it.
    pub fn new(value: impl Into<OsString>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Capture the current process `PATH` and normalize it for the host.
    pub fn from_env() -> Self {
        let search_path = Self::new(env::var_os("PATH").unwrap_or_default());
        if cfg!(windows) {
            search_path
        } else {
            search_path.with_local_bin()
        }
    }

    /// Append [`LOCAL_BIN`] unless it is already one of the entries.
    pub fn with_local_bin(self) -> Self {
        if self.contains(Path::new(LOCAL_BIN)) {
            return self;
        }

        // Empty entries mean the current directory and are kept as they are.
        let mut entries: Vec<PathBuf> = env::split_paths(&self.value).collect();
        entries.push(PathBuf::from(LOCAL_BIN));

        match env::join_paths(entries) {
            Ok(value) => {
                log::debug!("Appended {} to search path", LOCAL_BIN);
                Self { value }
            }
            Err(e) => {
                log::warn!("Could not extend search path with {}: {}", LOCAL_BIN, e);
                self
            }
        }
    }

    /// Whether `dir` is one of the entries.
    pub fn contains(&self, dir: &Path) -> bool {
        env::split_paths(&self.value).any(|entry| entry == dir)
    }

    /// Resolve an executable name against this search path.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(name, Some(&self.value), cwd).ok()
    }

    /// The raw value, suitable for a child's `PATH`.
    pub fn as_os_str(&self) -> &OsStr {
        &self.value
    }
}
