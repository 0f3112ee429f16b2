//! Eager collection operations
//!
//! This crate is the eager counterpart to `seqpipe-core`: every operation
//! materializes its full result before returning, and multi-step processing
//! completes each step over the entire collection before starting the next.
//! It also provides [`EagerPipeline`], a stage-for-stage eager twin of the
//! lazy pipeline, useful for contrasting evaluation order.

mod error;

pub mod chunking;
pub mod combine;
pub mod conditions;
pub mod eager;
pub mod filtering;

pub use chunking::{chunked, chunked_by, flat_map, flatten, windowed, windowed_by};
pub use combine::{fold, reduce, running_fold, unzip, zip, zip_with, zip_with_next};
pub use conditions::{all, any, none};
pub use eager::EagerPipeline;
pub use error::{Error, Result};
pub use filtering::{distinct, distinct_by, partition};

// Re-export core types
pub use seqpipe_core::{Pipeline, Source};
