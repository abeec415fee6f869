//! Unified Report Model
//!
//! Every tool maps its results to a [`Report`] before rendering. Rejected
//! input lines are carried alongside as [`ErrorRecord`]s.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Why a single input line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),

    #[error("empty line")]
    EmptyLine,

    #[error("invalid characters")]
    InvalidCharacters,
}

/// A rejected line, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub line_number: usize,
    pub error: LineError,
}

impl ErrorRecord {
    pub fn new(line_number: usize, error: LineError) -> Self {
        Self { line_number, error }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.error)
    }
}

/// A fully computed report, ready for rendering
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Column header row (tab separated)
    pub header: Option<String>,

    /// Width of the `=` rule under the header
    pub rule_width: Option<usize>,

    /// Payload rows
    pub rows: Vec<String>,

    /// Execution time, for tools that report it
    pub elapsed: Option<Duration>,

    /// Rejected lines, in input order
    pub errors: Vec<ErrorRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header row and the width of the rule beneath it
    pub fn with_header(mut self, header: impl Into<String>, rule_width: usize) -> Self {
        self.header = Some(header.into());
        self.rule_width = Some(rule_width);
        self
    }

    pub fn with_rows(mut self, rows: Vec<String>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    pub fn with_errors(mut self, errors: Vec<ErrorRecord>) -> Self {
        self.errors = errors;
        self
    }

    /// Header, rule and payload rows in display order
    pub fn body_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        if let Some(header) = &self.header {
            lines.push(header.clone());
        }
        if let Some(width) = self.rule_width {
            lines.push("=".repeat(width));
        }
        lines.extend(self.rows.iter().cloned());
        lines
    }

    /// The `Execution time: ...` line, if timing was recorded
    pub fn timing_line(&self) -> Option<String> {
        self.elapsed
            .map(|d| format!("Execution time: {:.4} seconds", d.as_secs_f64()))
    }
}
