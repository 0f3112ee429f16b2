//! Core traits and abstractions for lazy sequence pipelines
//!
//! This crate provides a pull-based evaluation model for multi-step sequence
//! processing. Stages (filter, map, take, ...) are composed into a pipeline
//! without evaluating any element; a terminal operation then drives evaluation
//! one element at a time, pushing each element through the whole stage chain
//! before the next element is requested. Chains ending in a bounding stage
//! stop pulling from the source as soon as enough elements have been produced.

#![warn(missing_docs)]

pub mod error;
pub mod pipeline;
pub mod source;
pub mod stage;

// Re-export key types for convenience
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use source::{Generate, Items, Source};
pub use stage::{Filter, Map, Skip, Take, TryFilter, TryMap};
