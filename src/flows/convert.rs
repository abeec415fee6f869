//! Conversion flow - Binary and hexadecimal renderings of integers
//!
//! Each valid integer also gets a 0-100 position relative to the smallest
//! and largest value in the input.

use std::num::IntErrorKind;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::core::error::AnalyzeError;
use crate::core::ingest::{ingest, read_input, LineOutcome};
use crate::core::model::{LineError, Report};
use crate::core::render::Reporter;

/// Fixed name of the result file
pub const OUTPUT_FILE: &str = "ConversionResults.txt";

const HEADER: &str = "Index\tNumber\tDecimal\tBinary\tHexadecimal";
const RULE_WIDTH: usize = 50;

/// Value given to every item when all inputs are equal
const FLAT_NORMALIZED: u8 = 50;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// One output row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRow {
    /// 1-based position among the valid items
    pub index: usize,
    pub number: i64,
    /// Scaled 0-100
    pub normalized: u8,
    pub binary: String,
    pub hex: String,
}

impl ConversionRow {
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.index, self.number, self.normalized, self.binary, self.hex
        )
    }
}

/// Classify one trimmed line
///
/// Accepts integer literals and floats with no fractional part
/// (`3.0` becomes 3).
pub fn parse_line(text: &str) -> LineOutcome<i64> {
    if text.is_empty() {
        return LineOutcome::Reject(LineError::EmptyLine);
    }

    match text.parse::<i64>() {
        Ok(n) => LineOutcome::Item(n),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            LineOutcome::Reject(LineError::OutOfRange(text.to_string()))
        }
        Err(_) => parse_whole_float(text),
    }
}

fn parse_whole_float(text: &str) -> LineOutcome<i64> {
    // i64::MIN is exactly representable; i64::MAX + 1 is the first float past the range
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => {
            if (LOWER..UPPER).contains(&v) {
                LineOutcome::Item(v as i64)
            } else {
                LineOutcome::Reject(LineError::OutOfRange(text.to_string()))
            }
        }
        Ok(_) => LineOutcome::Reject(LineError::NotAnInteger(text.to_string())),
        Err(_) => LineOutcome::Reject(LineError::InvalidNumber(text.to_string())),
    }
}

/// Digits of `number` in `base`, most significant first
fn to_base(number: i64, base: u64) -> String {
    if number == 0 {
        return "0".to_string();
    }

    let mut magnitude = number.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % base) as usize] as char);
        magnitude /= base;
    }
    if number < 0 {
        digits.push('-');
    }

    digits.iter().rev().collect()
}

/// Binary digits without a prefix
pub fn to_binary(number: i64) -> String {
    to_base(number, 2)
}

/// Uppercase hexadecimal digits without a prefix
pub fn to_hex(number: i64) -> String {
    to_base(number, 16)
}

/// Scale every number to 0-100 between the minimum and maximum
///
/// Halves round to even. When all numbers are equal each one maps to 50.
pub fn normalize(numbers: &[i64]) -> Vec<u8> {
    let (Some(&min), Some(&max)) = (numbers.iter().min(), numbers.iter().max()) else {
        return Vec::new();
    };

    if min == max {
        return vec![FLAT_NORMALIZED; numbers.len()];
    }

    let span = (i128::from(max) - i128::from(min)) as f64;
    numbers
        .iter()
        .map(|&n| {
            let scaled = (100 * (i128::from(n) - i128::from(min))) as f64 / span;
            scaled.round_ties_even() as u8
        })
        .collect()
}

/// Build the output rows for `numbers`, in input order
pub fn convert_all(numbers: &[i64]) -> Vec<ConversionRow> {
    numbers
        .iter()
        .zip(normalize(numbers))
        .enumerate()
        .map(|(idx, (&number, normalized))| ConversionRow {
            index: idx + 1,
            number,
            normalized,
            binary: to_binary(number),
            hex: to_hex(number),
        })
        .collect()
}

/// Run the conversion tool on `input`
pub fn run_convert(input: &Path, reporter: &Reporter) -> Result<()> {
    let start = Instant::now();

    let content = read_input(input)?;
    let ingested = ingest(&content, parse_line);

    if ingested.items.is_empty() {
        return Err(AnalyzeError::NoValidItems("numbers").into());
    }

    let rows = convert_all(&ingested.items)
        .iter()
        .map(ConversionRow::to_line)
        .collect();

    let report = Report::new()
        .with_header(HEADER, RULE_WIDTH)
        .with_rows(rows)
        .with_elapsed(start.elapsed())
        .with_errors(ingested.errors);

    reporter.publish(&report, OUTPUT_FILE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ErrorRecord;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_line_integers() {
        assert_eq!(parse_line("10"), LineOutcome::Item(10));
        assert_eq!(parse_line("-7"), LineOutcome::Item(-7));
        assert_eq!(parse_line("+4"), LineOutcome::Item(4));
    }

    #[test]
    fn test_parse_line_whole_float() {
        assert_eq!(parse_line("3.0"), LineOutcome::Item(3));
        assert_eq!(parse_line("-2.0"), LineOutcome::Item(-2));
        assert_eq!(parse_line("1e3"), LineOutcome::Item(1000));
    }

    #[test]
    fn test_parse_line_rejections() {
        assert_eq!(parse_line(""), LineOutcome::Reject(LineError::EmptyLine));
        assert_eq!(
            parse_line("3.5"),
            LineOutcome::Reject(LineError::NotAnInteger("3.5".to_string()))
        );
        assert_eq!(
            parse_line("abc"),
            LineOutcome::Reject(LineError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            parse_line("inf"),
            LineOutcome::Reject(LineError::NotAnInteger("inf".to_string()))
        );
    }

    #[test]
    fn test_parse_line_out_of_range() {
        assert_eq!(
            parse_line("99999999999999999999"),
            LineOutcome::Reject(LineError::OutOfRange("99999999999999999999".to_string()))
        );
        assert_eq!(
            parse_line("1e30"),
            LineOutcome::Reject(LineError::OutOfRange("1e30".to_string()))
        );
    }

    #[test]
    fn test_zero_is_literal_zero() {
        assert_eq!(to_binary(0), "0");
        assert_eq!(to_hex(0), "0");
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(to_binary(10), "1010");
        assert_eq!(to_hex(10), "A");
        assert_eq!(to_binary(3), "11");
        assert_eq!(to_hex(255), "FF");
        assert_eq!(to_hex(4096), "1000");
    }

    #[test]
    fn test_negative_conversions() {
        assert_eq!(to_binary(-5), "-101");
        assert_eq!(to_hex(-255), "-FF");
        assert_eq!(to_hex(i64::MIN), "-8000000000000000");
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(&[10, 3]), vec![100, 0]);
        assert_eq!(normalize(&[0, 5, 10]), vec![0, 50, 100]);
    }

    #[test]
    fn test_normalize_all_equal() {
        assert_eq!(normalize(&[4, 4, 4]), vec![50, 50, 50]);
        assert_eq!(normalize(&[9]), vec![50]);
    }

    #[test]
    fn test_normalize_rounds_half_to_even() {
        // 100 * 1 / 8 = 12.5, 100 * 3 / 8 = 37.5
        assert_eq!(normalize(&[0, 1, 3, 8]), vec![0, 12, 38, 100]);
    }

    #[test]
    fn test_normalize_extreme_range() {
        assert_eq!(normalize(&[i64::MIN, 0, i64::MAX]), vec![0, 50, 100]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_convert_all_rows() {
        let rows = convert_all(&[10, 3]);
        let lines: Vec<_> = rows.iter().map(ConversionRow::to_line).collect();
        assert_eq!(lines, vec!["1\t10\t100\t1010\tA", "2\t3\t0\t11\t3"]);
    }

    #[test]
    fn test_run_convert_writes_report() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("numbers.txt");
        fs::write(&input, "10\n3.0\n3.5\n").unwrap();

        run_convert(&input, &Reporter::new(temp.path())).unwrap();

        let content = fs::read_to_string(temp.path().join(OUTPUT_FILE)).unwrap();
        let expected_head = format!(
            "{HEADER}\n{}\n1\t10\t100\t1010\tA\n2\t3\t0\t11\t3\n\nExecution time: ",
            "=".repeat(50)
        );
        assert!(content.starts_with(&expected_head));
        assert!(content.ends_with("\nErrors found:\nLine 3: '3.5' is not an integer\n"));
    }

    #[test]
    fn test_blank_line_is_error() {
        let ingested = ingest(b"1\n\n2\n", parse_line);
        assert_eq!(ingested.items, vec![1, 2]);
        assert_eq!(
            ingested.errors,
            vec![ErrorRecord::new(2, LineError::EmptyLine)]
        );
    }

    #[test]
    fn test_run_convert_no_valid_numbers() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("numbers.txt");
        fs::write(&input, "x\n1.5\n").unwrap();

        let err = run_convert(&input, &Reporter::new(temp.path())).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalyzeError>(),
            Some(AnalyzeError::NoValidItems(_))
        ));
        assert!(!temp.path().join(OUTPUT_FILE).exists());
    }

    proptest! {
        #[test]
        fn binary_round_trips(n in 1i64..=i64::MAX) {
            prop_assert_eq!(i64::from_str_radix(&to_binary(n), 2).unwrap(), n);
        }

        #[test]
        fn hex_round_trips(n in 1i64..=i64::MAX) {
            let hex = to_hex(n);
            prop_assert!(!hex.chars().any(|c| c.is_ascii_lowercase()));
            prop_assert_eq!(i64::from_str_radix(&hex, 16).unwrap(), n);
        }

        #[test]
        fn normalize_hits_both_ends(values in prop::collection::vec(any::<i64>(), 2..40)) {
            let normalized = normalize(&values);
            let min = *values.iter().min().unwrap();
            let max = *values.iter().max().unwrap();
            prop_assume!(min != max);

            for (value, scaled) in values.iter().zip(&normalized) {
                prop_assert!(*scaled <= 100);
                if *value == min {
                    prop_assert_eq!(*scaled, 0);
                }
                if *value == max {
                    prop_assert_eq!(*scaled, 100);
                }
            }
        }

        #[test]
        fn normalize_flat_input_is_fifty(value in any::<i64>(), len in 1usize..20) {
            prop_assert!(normalize(&vec![value; len]).iter().all(|&v| v == 50));
        }
    }
}
