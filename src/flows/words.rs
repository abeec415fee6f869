//! Word count flow - Frequency of whitespace-delimited words
//!
//! Words are kept exactly as written: no case folding, punctuation stays.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::core::error::AnalyzeError;
use crate::core::ingest::{ingest, read_input, LineOutcome};
use crate::core::model::{LineError, Report};
use crate::core::render::Reporter;

/// Fixed name of the result file
pub const OUTPUT_FILE: &str = "WordCountResults.txt";

const HEADER: &str = "Word\tCount";
const RULE_WIDTH: usize = 16;

/// Occurrences per word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word in `words`
    pub fn add_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            *self.counts.entry(word.into()).or_insert(0) += 1;
        }
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Highest count first; equal counts in ascending word order
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Classify one trimmed line
pub fn parse_line(text: &str) -> LineOutcome<Vec<String>> {
    if text.is_empty() {
        return LineOutcome::Reject(LineError::EmptyLine);
    }
    LineOutcome::Item(text.split_whitespace().map(str::to_string).collect())
}

/// Run the word count tool on `input`
pub fn run_words(input: &Path, reporter: &Reporter) -> Result<()> {
    let start = Instant::now();

    let content = read_input(input)?;
    let ingested = ingest(&content, parse_line);

    let mut frequency = WordFrequency::new();
    for words in ingested.items {
        frequency.add_all(words);
    }

    if frequency.is_empty() {
        return Err(AnalyzeError::NoValidItems("words").into());
    }
    tracing::debug!(distinct = frequency.len(), "words counted");

    let rows = frequency
        .sorted()
        .into_iter()
        .map(|(word, count)| format!("{word}\t{count}"))
        .collect();

    let report = Report::new()
        .with_header(HEADER, RULE_WIDTH)
        .with_rows(rows)
        .with_elapsed(start.elapsed())
        .with_errors(ingested.errors);

    reporter.publish(&report, OUTPUT_FILE)?;
    Ok(())
}
