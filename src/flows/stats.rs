//! Statistics flow - Descriptive statistics over a list of numbers
//!
//! Blank lines are skipped silently; any other line must be a finite
//! floating-point literal.

use std::fmt;
use std::path::Path;

use anyhow::Result;

use crate::core::error::AnalyzeError;
use crate::core::ingest::{ingest, read_input, LineOutcome};
use crate::core::model::{LineError, Report};
use crate::core::render::Reporter;

/// Fixed name of the result file
pub const OUTPUT_FILE: &str = "StatisticsResults.txt";

/// Most frequent value, if any value repeats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Value(f64),
    None,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Value(v) => write_number(f, *v),
            Mode::None => f.write_str("None"),
        }
    }
}

/// Plain digits in the usual range, `1e+308` style outside it
fn write_number(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let magnitude = v.abs();
    if v == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return write!(f, "{v}");
    }

    let formatted = format!("{v:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Descriptive statistics for a non-empty sample
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Sample variance (n - 1)
    pub variance: f64,
    /// Sample standard deviation (n - 1)
    pub standard_deviation: f64,
}

impl Statistics {
    /// Report rows in their fixed order and precision
    pub fn rows(&self) -> Vec<String> {
        vec![
            format!("COUNT\t{}", self.count),
            format!("MEAN\t{:.2}", self.mean),
            format!("MEDIAN\t{:.1}", self.median),
            format!("MODE\t{}", self.mode),
            format!("SD\t{:.7}", self.standard_deviation),
            format!("VARIANCE\t{:.4}", self.variance),
        ]
    }
}

/// Classify one trimmed line
pub fn parse_line(text: &str) -> LineOutcome<f64> {
    if text.is_empty() {
        return LineOutcome::Skip;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => LineOutcome::Item(value),
        _ => LineOutcome::Reject(LineError::InvalidNumber(text.to_string())),
    }
}

/// Compute statistics for `numbers`
///
/// Returns `None` for an empty slice; callers treat that as fatal.
pub fn calculate_statistics(numbers: &[f64]) -> Option<Statistics> {
    if numbers.is_empty() {
        return None;
    }

    let count = numbers.len();
    let n = count as f64;
    let mean = mean_of(numbers);

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = count / 2;
    let median = if count % 2 == 0 {
        midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    };

    let standard_deviation = if count > 1 {
        sample_deviation(&sorted, mean, n)
    } else {
        0.0
    };
    let variance = standard_deviation * standard_deviation;

    Some(Statistics {
        count,
        mean,
        median,
        mode: mode_of_sorted(&sorted),
        variance,
        standard_deviation,
    })
}

/// Arithmetic mean that stays finite when the plain sum overflows
fn mean_of(numbers: &[f64]) -> f64 {
    let n = numbers.len() as f64;
    let sum = numbers.iter().sum::<f64>();
    if sum.is_finite() {
        sum / n
    } else {
        numbers.iter().map(|x| x / n).sum()
    }
}

/// Average of two sorted values without overflowing
fn midpoint(low: f64, high: f64) -> f64 {
    if (low < 0.0) == (high < 0.0) {
        low + (high - low) / 2.0
    } else {
        (low + high) / 2.0
    }
}

/// Sample standard deviation (n - 1)
///
/// Deviations are scaled by the largest one so squaring cannot overflow.
fn sample_deviation(values: &[f64], mean: f64, n: f64) -> f64 {
    let scale = values
        .iter()
        .map(|x| (x - mean).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }

    let sum_sq = values
        .iter()
        .map(|x| ((x - mean) / scale).powi(2))
        .sum::<f64>();
    scale * (sum_sq / (n - 1.0)).sqrt()
}

/// Smallest value among those with the highest frequency (at least 2)
fn mode_of_sorted(sorted: &[f64]) -> Mode {
    let mut best: Option<(f64, usize)> = None;
    let mut i = 0;

    while i < sorted.len() {
        let value = sorted[i];
        let run = sorted[i..].iter().take_while(|&&x| x == value).count();
        // strict comparison keeps the first (smallest) value on ties
        if run > best.map_or(1, |(_, freq)| freq) {
            best = Some((value, run));
        }
        i += run;
    }

    match best {
        // -0.0 and 0.0 share a run; report it as 0
        Some((value, _)) => Mode::Value(value + 0.0),
        None => Mode::None,
    }
}

/// Run the statistics tool on `input`
pub fn run_stats(input: &Path, reporter: &Reporter) -> Result<()> {
    let content = read_input(input)?;
    let ingested = ingest(&content, parse_line);

    let stats =
        calculate_statistics(&ingested.items).ok_or(AnalyzeError::NoValidItems("numbers"))?;

    let report = Report::new()
        .with_rows(stats.rows())
        .with_errors(ingested.errors);

    reporter.publish(&report, OUTPUT_FILE)?;
    Ok(())
}
