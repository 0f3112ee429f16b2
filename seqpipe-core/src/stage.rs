//! Pipeline stages
//!
//! Each stage wraps an upstream source and is itself a [`Source`], so stages
//! compose into a chain. Constructing a stage evaluates nothing; elements flow
//! only when a terminal operation pulls on the downstream end.

use crate::error::{Error, Result};
use crate::source::Source;

/// A stage that keeps only elements satisfying a predicate
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<S, P> Source for Filter<S, P>
where
    S: Source,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>> {
        loop {
            match self.inner.pull()? {
                Some(item) => {
                    if (self.predicate)(&item) {
                        return Ok(Some(item));
                    }
                }
                None => return Ok(None),
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }
}

/// A stage that keeps only elements for which a fallible predicate returns `Ok(true)`.
///
/// A predicate error propagates immediately and aborts the terminal operation.
pub struct TryFilter<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> TryFilter<S, P> {
    pub(crate) fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<S, P> Source for TryFilter<S, P>
where
    S: Source,
    P: FnMut(&S::Item) -> Result<bool>,
{
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>> {
        loop {
            match self.inner.pull()? {
                Some(item) => {
                    if (self.predicate)(&item)? {
                        return Ok(Some(item));
                    }
                }
                None => return Ok(None),
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }
}

/// A stage that transforms each element with a function
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, U> Source for Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Result<Option<U>> {
        match self.inner.pull()? {
            Some(item) => Ok(Some((self.f)(item))),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        self.inner.size_hint()
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }
}

/// A stage that transforms each element with a fallible function.
///
/// A mapping error propagates immediately and aborts the terminal operation;
/// no partial result is produced.
pub struct TryMap<S, F> {
    inner: S,
    f: F,
}

impl<S, F> TryMap<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, U> Source for TryMap<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> Result<U>,
{
    type Item = U;

    fn pull(&mut self) -> Result<Option<U>> {
        match self.inner.pull()? {
            Some(item) => (self.f)(item).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        self.inner.size_hint()
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }
}

/// A bounding stage that lets at most `limit` elements through.
///
/// Once the limit has been reached the stage answers `Ok(None)` without
/// pulling upstream, so no further source elements are requested.
pub struct Take<S> {
    inner: S,
    limit: usize,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(inner: S, count: i64) -> Result<Self> {
        let limit = usize::try_from(count).map_err(|_| {
            Error::InvalidArgument(format!("take expects a non-negative count, got {count}"))
        })?;
        Ok(Self {
            inner,
            limit,
            remaining: limit,
        })
    }
}

impl<S: Source> Source for Take<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let next = self.inner.pull()?;
        if next.is_some() {
            self.remaining -= 1;
        }
        Ok(next)
    }

    fn size_hint(&self) -> Option<usize> {
        // an unknown upstream count stays unknown; the bound alone is not a
        // usable hint, since consumers may pre-allocate from it
        self.inner
            .size_hint()
            .map(|upstream| usize::min(upstream, self.remaining))
    }

    fn reset(&mut self) -> Result<()> {
        self.remaining = self.limit;
        self.inner.reset()
    }
}

/// A stage that discards the first `count` elements
pub struct Skip<S> {
    inner: S,
    count: usize,
    skipped: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(inner: S, count: i64) -> Result<Self> {
        let count = usize::try_from(count).map_err(|_| {
            Error::InvalidArgument(format!("skip expects a non-negative count, got {count}"))
        })?;
        Ok(Self {
            inner,
            count,
            skipped: 0,
        })
    }
}

impl<S: Source> Source for Skip<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>> {
        while self.skipped < self.count {
            match self.inner.pull()? {
                Some(_) => self.skipped += 1,
                None => {
                    self.skipped = self.count;
                    return Ok(None);
                }
            }
        }
        self.inner.pull()
    }

    fn size_hint(&self) -> Option<usize> {
        self.inner
            .size_hint()
            .map(|upstream| upstream.saturating_sub(self.count - self.skipped))
    }

    fn reset(&mut self) -> Result<()> {
        self.skipped = 0;
        self.inner.reset()
    }
}
