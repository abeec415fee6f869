//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::Reporter;

/// linestat - batch analyzers for newline-delimited text files.
#[derive(Parser, Debug)]
#[command(name = "linestat")]
#[command(
    author,
    version,
    about,
    long_about = r#"linestat reads a text file line by line, validates each line on its own
and writes a report to the console and to a fixed-name result file.

Malformed lines never stop a run: they are listed under "Errors found:"
after the report.

Tools:
- stats:   descriptive statistics       -> StatisticsResults.txt
- convert: binary/hexadecimal rendering -> ConversionResults.txt
- words:   word frequency               -> WordCountResults.txt

Examples:
    linestat stats numbers.txt
    linestat convert numbers.txt --output-dir out
    linestat words book.txt -q
"#
)]
pub struct Cli {
    /// Directory where the result file is written.
    #[arg(
        long,
        global = true,
        env = "LINESTAT_OUTPUT_DIR",
        default_value = ".",
        value_name = "DIR",
        long_help = "Directory where the result file is written (defaults to the current\n\
directory). The file name itself is fixed per tool and is overwritten on each run."
    )]
    pub output_dir: PathBuf,

    /// Quiet mode (warnings and errors only).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Do not print the report on the console. Per-line warnings and fatal\n\
errors are still printed, and the result file is still written."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics such as line counts and the output path.\n\
RUST_LOG, when set, takes precedence over both --quiet and --verbose."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute descriptive statistics over a list of numbers.
    #[command(
        visible_alias = "compute-statistics",
        long_about = "Read one number per line and report COUNT, MEAN, MEDIAN, MODE, SD and\n\
VARIANCE (sample, n - 1). Blank lines are skipped; other lines that are not\n\
numbers are reported as errors.\n\n\
Example:\n\
  linestat stats numbers.txt\n"
    )]
    Stats {
        /// Input file, one number per line.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Convert integers to binary and hexadecimal.
    #[command(
        visible_alias = "convert-numbers",
        long_about = "Read one integer per line (whole floats such as 3.0 are accepted) and\n\
report each value with a 0-100 scaled position, its binary digits and its\n\
uppercase hexadecimal digits. Blank lines are reported as errors.\n\n\
Example:\n\
  linestat convert numbers.txt\n"
    )]
    Convert {
        /// Input file, one integer per line.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Count word frequencies.
    #[command(
        visible_alias = "word-count",
        long_about = "Split each line on whitespace and count every word exactly as written.\n\
Words are listed by descending count, ties in alphabetical order. Blank lines\n\
and lines that are not valid UTF-8 are reported as errors.\n\n\
Example:\n\
  linestat words book.txt\n"
    )]
    Words {
        /// Input text file.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let reporter = Reporter::new(cli.output_dir);
    tracing::debug!(output_dir = %reporter.output_dir().display(), "reporter ready");

    match cli.command {
        Commands::Stats { file } => crate::flows::stats::run_stats(&file, &reporter),
        Commands::Convert { file } => crate::flows::convert::run_convert(&file, &reporter),
        Commands::Words { file } => crate::flows::words::run_words(&file, &reporter),
    }
}
