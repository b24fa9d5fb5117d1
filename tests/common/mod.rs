//! Shared test utilities for E2E tests.
//!
//! `TestFixture` builds a temporary directory holding fake `astyle` and
//! `clang-format` scripts, their configuration files and the sources to
//! format. The binary is run with `PATH` pointing only at the fixture's
//! `bin/` directory, so the fakes stand in for the real formatters.
//!
//! The fakes use shell builtins only and key off marker text in the files:
//!
//! - a line containing `NEEDS_FORMAT` makes the file "unformatted"; the
//!   fake rewrites it to `formatted` when asked to apply,
//! - a line containing `UNFORMATTABLE` makes the clang-format apply step
//!   fail with a diagnostic on stdout.
//!
//! Every invocation is appended to `calls.log` as `<tool> <args>`.

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;
    pub use serial_test::serial;

    pub use super::sources;
    pub use super::TestFixture;
}

/// Source snippets understood by the fake formatters.
#[allow(dead_code)]
pub mod sources {
    pub const CLEAN: &str = "int main(void)\n{\n    return 0;\n}\n";
    pub const NEEDS_FORMAT: &str = "int main(void){return 0;} /* NEEDS_FORMAT */\n";
    pub const UNFORMATTABLE: &str = "int main( /* NEEDS_FORMAT UNFORMATTABLE */\n";
}

const FAKE_ASTYLE: &str = r#"#!/bin/sh
echo "astyle $*" >> "@LOG@"
for file; do :; done
needs=""
while IFS= read -r line || [ -n "$line" ]; do
    case "$line" in *NEEDS_FORMAT*) needs=1 ;; esac
done < "$file"
if [ -n "$needs" ]; then
    printf 'formatted\n' > "$file"
    echo "Formatted  $file"
else
    echo "Unchanged  $file"
fi
exit 0
"#;

const FAKE_CLANG_FORMAT: &str = r#"#!/bin/sh
echo "clang-format $*" >> "@LOG@"
for file; do :; done
needs=""
broken=""
while IFS= read -r line || [ -n "$line" ]; do
    case "$line" in *NEEDS_FORMAT*) needs=1 ;; esac
    case "$line" in *UNFORMATTABLE*) broken=1 ;; esac
done < "$file"
if [ "$1" = "--dry-run" ]; then
    if [ -n "$needs" ]; then
        echo "$file:1:1: error: code should be clang-formatted" >&2
        exit 1
    fi
    exit 0
fi
if [ -n "$broken" ]; then
    echo "error: unable to format $file"
    exit 1
fi
printf 'formatted\n' > "$file"
exit 0
"#;

/// A temporary directory with fake formatters and source files.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a fixture with an empty `bin/` directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("bin")
            .create_dir_all()
            .expect("Failed to create bin directory");
        Self { temp_dir }
    }

    /// Install the fake astyle executable.
    pub fn with_astyle(self) -> Self {
        self.install_tool("astyle", FAKE_ASTYLE);
        self
    }

    /// Install the fake clang-format executable.
    pub fn with_clang_format(self) -> Self {
        self.install_tool("clang-format", FAKE_CLANG_FORMAT);
        self
    }

    /// Write both formatter configuration files.
    pub fn with_configs(self) -> Self {
        self.with_file(".astylerc", "--style=allman\n")
            .with_file(".clang-format", "BasedOnStyle: LLVM\n")
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read back a file from the fixture.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Invocations recorded by the fake tools, one per line.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Number of recorded invocations of `tool`.
    pub fn call_count(&self, tool: &str) -> usize {
        let prefix = format!("{} ", tool);
        self.calls().iter().filter(|c| c.starts_with(&prefix)).count()
    }

    /// Create a command running in this fixture with `PATH` set to `bin/`.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("format-c-source");
        cmd.current_dir(self.path())
            .env("PATH", self.bin_dir())
            .env_remove("FORMAT_C_SOURCE_ASTYLE")
            .env_remove("FORMAT_C_SOURCE_CLANGFORMAT")
            .env_remove("RUST_LOG")
            .arg("--color=never");
        cmd
    }

    fn bin_dir(&self) -> PathBuf {
        self.path().join("bin")
    }

    fn log_path(&self) -> PathBuf {
        self.path().join("calls.log")
    }

    #[cfg(unix)]
    fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join(name);
        let script = script.replace("@LOG@", &self.log_path().display().to_string());
        std::fs::write(&path, script).expect("Failed to write tool script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool script executable");
    }

    #[cfg(not(unix))]
    fn install_tool(&self, _name: &str, _script: &str) {
        panic!("fake formatter scripts require a unix shell");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a real formatter is installed where the binary will look for it.
///
/// `/usr/local/bin` is always appended to the search path, so tests that
/// expect a tool to be missing cannot run on hosts that have it there.
#[allow(dead_code)]
pub fn tool_in_local_bin(tool: &str) -> bool {
    Path::new("/usr/local/bin").join(tool).exists()
}
