//! Renderer module
//!
//! Renders a [`Report`] to text and publishes it to the console (through
//! `tracing`) and to a fixed-name result file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::error::AnalyzeError;
use crate::core::model::Report;

/// Header placed before the error records in the result file
pub const ERRORS_HEADER: &str = "Errors found:";

/// Render a report as the text stored in the result file
pub fn render_text(report: &Report) -> String {
    let mut out = report.body_lines().join("\n");

    if let Some(timing) = report.timing_line() {
        out.push_str("\n\n");
        out.push_str(&timing);
    }
    out.push('\n');

    if !report.errors.is_empty() {
        out.push('\n');
        out.push_str(ERRORS_HEADER);
        out.push('\n');
        for error in &report.errors {
            out.push_str(&error.to_string());
            out.push('\n');
        }
    }

    out
}

/// Publishes reports to the console and to the output directory
#[derive(Debug, Clone)]
pub struct Reporter {
    output_dir: PathBuf,
}

impl Reporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the result files are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of a result file
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Emit the report to the console, then write it to `file_name`
    pub fn publish(&self, report: &Report, file_name: &str) -> Result<PathBuf, AnalyzeError> {
        self.log(report);
        let path = self.output_path(file_name);
        self.write(report, &path)?;
        Ok(path)
    }

    /// Report lines at info level, each error record at warn level
    fn log(&self, report: &Report) {
        for line in report.body_lines() {
            info!("{line}");
        }
        if let Some(timing) = report.timing_line() {
            info!("{timing}");
        }
        for error in &report.errors {
            warn!("{error}");
        }
    }

    fn write(&self, report: &Report, path: &Path) -> Result<(), AnalyzeError> {
        fs::write(path, render_text(report)).map_err(|source| AnalyzeError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "results written");
        Ok(())
    }
}
