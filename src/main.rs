//! linestat - Batch analyzers for newline-delimited text files
//!
//! linestat provides:
//! - Descriptive statistics over a list of numbers
//! - Binary/hexadecimal conversion with a 0-100 scaled position
//! - Word frequency counting
//!
//! Every tool validates lines one by one, reports malformed lines without
//! aborting, and writes its report to the console and a fixed-name file.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod core;
mod flows;

use crate::core::logging::{self, Verbosity};

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(Verbosity::from_flags(cli.quiet, cli.verbose)) {
        eprintln!("Error: {e}");
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
