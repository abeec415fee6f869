//! Fatal errors that terminate a run

use std::path::PathBuf;

use thiserror::Error;

/// An error that stops the whole run with exit code 1
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("system error while reading '{}': {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no valid {0} found in the file")]
    NoValidItems(&'static str),

    #[error("failed to write results to '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
