//! An eager, stage-for-stage counterpart to the lazy pipeline
//!
//! Each builder call here evaluates its stage over the entire current
//! collection before returning, so a chain of calls runs breadth-first per
//! stage. The lazy pipeline in `seqpipe-core` produces the same materialized
//! results, but runs depth-first per element; the difference is observable in
//! the interleaving of stage side effects and in how many source elements a
//! bounded chain consumes.

use crate::error::{Error, Result};

/// An eagerly evaluated processing chain over an in-memory collection
pub struct EagerPipeline<T> {
    items: Vec<T>,
}

impl<T> EagerPipeline<T> {
    /// Create an eager pipeline over the given elements
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Create an eager pipeline over an in-memory collection
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Keep only elements satisfying the predicate.
    /// Runs over the whole collection before returning.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            items: self.items.into_iter().filter(|item| predicate(item)).collect(),
        }
    }

    /// Keep only elements that do not satisfy the predicate
    pub fn filter_not<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(move |item| !predicate(item))
    }

    /// Transform every element.
    /// Runs over the whole collection before returning.
    pub fn map<U, F>(self, f: F) -> EagerPipeline<U>
    where
        F: FnMut(T) -> U,
    {
        EagerPipeline {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Keep at most the first `count` elements.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `count` is negative.
    pub fn take(mut self, count: i64) -> Result<Self> {
        let count = usize::try_from(count).map_err(|_| {
            Error::InvalidArgument(format!("take expects a non-negative count, got {count}"))
        })?;
        self.items.truncate(count);
        Ok(self)
    }

    /// Discard the first `count` elements.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `count` is negative.
    pub fn skip(self, count: i64) -> Result<Self> {
        let count = usize::try_from(count).map_err(|_| {
            Error::InvalidArgument(format!("skip expects a non-negative count, got {count}"))
        })?;
        Ok(Self {
            items: self.items.into_iter().skip(count).collect(),
        })
    }

    /// Number of elements currently held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no elements are currently held
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The materialized result
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
