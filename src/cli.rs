//! CLI argument parsing and dispatch

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use format_c_source::coordinator::{Coordinator, FormatRequest};
use format_c_source::output::OutputConfig;
use format_c_source::runner::SystemRunner;
use format_c_source::search_path::SearchPath;

/// Format C/C++ source files with astyle and/or clang-format
#[derive(Parser, Debug)]
#[command(name = "format-c-source")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Filenames pre-commit believes are changed
    #[arg(value_name = "FILENAMES")]
    filenames: Vec<PathBuf>,

    /// Path to astyle config file
    #[arg(
        short = 'a',
        long = "astyle",
        visible_alias = "tool-one-config",
        value_name = "FILE",
        env = "FORMAT_C_SOURCE_ASTYLE"
    )]
    astyle: Option<PathBuf>,

    /// Path to clang-format options file
    #[arg(
        short = 'c',
        long = "clangformat",
        visible_alias = "tool-two-config",
        value_name = "FILE",
        env = "FORMAT_C_SOURCE_CLANGFORMAT"
    )]
    clang_format: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the formatting run
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        let search_path = SearchPath::from_env();
        let request = self.into_request();

        let runner = SystemRunner;
        let coordinator = Coordinator::new(&runner, search_path, output);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let result = coordinator.run(&request, &mut out);
        out.flush()?;

        result?;
        Ok(())
    }

    fn into_request(self) -> FormatRequest {
        FormatRequest {
            filenames: self.filenames,
            astyle: self.astyle,
            clang_format: self.clang_format,
        }
    }
}

/// `RUST_LOG`, when set, refines the level given on the command line.
fn init_logging(level: &str) {
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
