//! Error types for eager collection operations

use thiserror::Error;

/// Error type for eager collection operations
#[derive(Error, Debug)]
pub enum Error {
    /// Core pipeline error
    #[error("Core error: {0}")]
    Core(#[from] seqpipe_core::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for eager collection operations
pub type Result<T> = std::result::Result<T, Error>;
