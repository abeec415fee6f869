//! Line ingest
//!
//! Reads an input file once, splits it into numbered lines and hands each
//! decoded line to a tool-specific classifier. One bad line never stops
//! the run: rejected lines are collected as [`ErrorRecord`]s in order.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::core::error::AnalyzeError;
use crate::core::model::{ErrorRecord, LineError};

/// Verdict of a classifier for one trimmed line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome<T> {
    /// Well-formed data item
    Item(T),
    /// Ignored without an error record
    Skip,
    /// Malformed line
    Reject(LineError),
}

/// One line of input with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub number: usize,
    pub bytes: &'a [u8],
}

impl<'a> RawLine<'a> {
    /// Decode as UTF-8 and trim surrounding whitespace
    pub fn text(&self) -> Option<&'a str> {
        std::str::from_utf8(self.bytes).ok().map(str::trim)
    }
}

/// Items accepted by a classifier, plus every rejected line
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested<T> {
    pub items: Vec<T>,
    pub errors: Vec<ErrorRecord>,
}

impl<T> Default for Ingested<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Read the whole input file into memory
pub fn read_input(path: &Path) -> Result<Vec<u8>, AnalyzeError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AnalyzeError::InputNotFound(path.to_path_buf()),
        _ => AnalyzeError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| AnalyzeError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = buffer.len(), "read input");
    Ok(buffer)
}

/// Split raw bytes into numbered lines
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing line break does
/// not produce an extra empty line.
pub fn raw_lines(content: &[u8]) -> impl Iterator<Item = RawLine<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if content.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(idx, bytes)| RawLine {
            number: idx + 1,
            bytes,
        })
}

/// Run `classify` over every line of `content`
///
/// Lines that are not valid UTF-8 are rejected with
/// [`LineError::InvalidCharacters`] before reaching the classifier.
pub fn ingest<T, F>(content: &[u8], mut classify: F) -> Ingested<T>
where
    F: FnMut(&str) -> LineOutcome<T>,
{
    let mut ingested = Ingested::default();

    for line in raw_lines(content) {
        let outcome = match line.text() {
            Some(text) => classify(text),
            None => LineOutcome::Reject(LineError::InvalidCharacters),
        };

        match outcome {
            LineOutcome::Item(item) => ingested.items.push(item),
            LineOutcome::Skip => {}
            LineOutcome::Reject(error) => {
                ingested.errors.push(ErrorRecord::new(line.number, error));
            }
        }
    }

    tracing::debug!(
        items = ingested.items.len(),
        errors = ingested.errors.len(),
        "ingest finished"
    );
    ingested
}
