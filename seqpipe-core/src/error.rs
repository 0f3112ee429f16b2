//! Error types for sequence pipelines

use std::io;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pipeline operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing to an output sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A stage received an invalid argument, such as a negative count
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A user-supplied stage function failed
    #[error("Stage failure: {0}")]
    StageFailure(String),
}
