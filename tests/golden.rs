//! Golden tests for linestat
//!
//! These tests verify that result files match expected golden files.
//! The execution time is the only unstable part of a report and is
//! replaced by `<elapsed>` before comparing.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Run `tool` on a fixture, writing results into `out`
fn run_tool(tool: &str, fixture: &str, out: &Path) {
    Command::new(assert_cmd::cargo::cargo_bin!("linestat"))
        .env_remove("RUST_LOG")
        .arg("--output-dir")
        .arg(out)
        .arg(tool)
        .arg(fixtures_dir().join(fixture))
        .assert()
        .success();
}

/// Replace the measured seconds with a placeholder
fn normalize_timing(content: &str) -> String {
    content
        .lines()
        .map(|line| match line.strip_prefix("Execution time: ") {
            Some(rest) if rest.ends_with(" seconds") => {
                "Execution time: <elapsed> seconds".to_string()
            }
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

fn assert_golden(tool: &str, fixture: &str, result_file: &str, golden: &str) {
    let temp = tempdir().unwrap();
    run_tool(tool, fixture, temp.path());

    let actual = fs::read_to_string(temp.path().join(result_file)).unwrap();
    let expected = fs::read_to_string(fixtures_dir().join(golden)).unwrap();

    assert_eq!(normalize_timing(&actual), expected, "{tool} output drifted");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_stats() {
        assert_golden(
            "stats",
            "numbers.txt",
            "StatisticsResults.txt",
            "StatisticsResults.golden",
        );
    }

    #[test]
    fn test_golden_convert() {
        assert_golden(
            "convert",
            "integers.txt",
            "ConversionResults.txt",
            "ConversionResults.golden",
        );
    }

    #[test]
    fn test_golden_words() {
        assert_golden(
            "words",
            "words.txt",
            "WordCountResults.txt",
            "WordCountResults.golden",
        );
    }

    #[test]
    fn test_timing_precision() {
        let temp = tempdir().unwrap();
        run_tool("words", "words.txt", temp.path());

        let actual = fs::read_to_string(temp.path().join("WordCountResults.txt")).unwrap();
        let timing = actual
            .lines()
            .find_map(|l| l.strip_prefix("Execution time: "))
            .and_then(|rest| rest.strip_suffix(" seconds"))
            .expect("timing line present");

        let (_, fraction) = timing.split_once('.').expect("decimal point");
        assert_eq!(fraction.len(), 4);
    }
}
