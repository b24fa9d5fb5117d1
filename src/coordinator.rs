//! # Format Coordinator
//!
//! Runs each requested formatter over the supplied files and reports the
//! files that were modified.
//!
//! ## Execution Flow
//!
//! 1.  **Validate**: at least one formatter must be configured.
//! 2.  **Empty input**: with no files there is nothing to do; print `No files`
//!     and succeed.
//! 3.  For each formatter, astyle first and clang-format second:
//!     - locate its executable on the search path,
//!     - check that its configuration file exists,
//!     - format every file in input order, printing `Formatted: <file>` for
//!       each file that changed.
//!
//! Every failure is terminal. The first error stops the run and nothing after
//! it, neither the remaining files nor the next formatter, is processed.

use std::io::Write;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::formatter::{FileOutcome, Formatter};
use crate::output::OutputConfig;
use crate::runner::ToolRunner;
use crate::search_path::SearchPath;

/// A single invocation of the hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRequest {
    /// Files to format, in the order they are processed.
    pub filenames: Vec<PathBuf>,
    /// astyle options file.
    pub astyle: Option<PathBuf>,
    /// clang-format style file.
    pub clang_format: Option<PathBuf>,
}

impl FormatRequest {
    /// The configured formatters, astyle before clang-format.
    pub fn formatters(&self) -> Vec<Formatter> {
        let astyle = self.astyle.clone().map(|options| Formatter::Astyle { options });
        let clang_format = self
            .clang_format
            .clone()
            .map(|style| Formatter::ClangFormat { style });

        astyle.into_iter().chain(clang_format).collect()
    }
}

/// Files each formatter modified during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub formatted: Vec<(String, PathBuf)>,
}

impl RunSummary {
    /// Total number of report lines printed.
    pub fn formatted_count(&self) -> usize {
        self.formatted.len()
    }
}

/// Drives the formatters for one request.
pub struct Coordinator<'a, R: ToolRunner> {
    runner: &'a R,
    search_path: SearchPath,
    output: OutputConfig,
}

impl<'a, R: ToolRunner> Coordinator<'a, R> {
    pub fn new(runner: &'a R, search_path: SearchPath, output: OutputConfig) -> Self {
        Self {
            runner,
            search_path,
            output,
        }
    }

    /// Process `request`, writing notices and report lines to `out`.
    pub fn run(&self, request: &FormatRequest, out: &mut dyn Write) -> Result<RunSummary> {
        let formatters = request.formatters();
        if formatters.is_empty() {
            return Err(Error::NoAction);
        }

        let mut summary = RunSummary::default();

        if request.filenames.is_empty() {
            writeln!(out, "No files")?;
            return Ok(summary);
        }

        for formatter in &formatters {
            self.run_formatter(formatter, &request.filenames, out, &mut summary)?;
        }

        log::debug!("{} file(s) formatted", summary.formatted_count());
        Ok(summary)
    }

    fn run_formatter(
        &self,
        formatter: &Formatter,
        filenames: &[PathBuf],
        out: &mut dyn Write,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let tool = formatter.tool();

        let exe = self
            .runner
            .locate(tool, &self.search_path)
            .ok_or_else(|| Error::ToolNotFound {
                tool: tool.to_string(),
                hint: formatter.install_hint().to_string(),
            })?;

        let config = formatter.config();
        if !config.exists() {
            return Err(Error::ConfigNotFound {
                path: config.to_path_buf(),
            });
        }

        log::info!(
            "Running {} ({}) on {} file(s) with {}",
            tool,
            exe.display(),
            filenames.len(),
            config.display()
        );

        for file in filenames {
            let outcome = formatter.format_file(&exe, file, self.runner, &self.search_path)?;
            if outcome == FileOutcome::Formatted {
                self.output.report_formatted(out, file)?;
                summary.formatted.push((tool.to_string(), file.clone()));
            }
        }

        Ok(())
    }
}
