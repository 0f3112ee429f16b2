//! Pipeline composition and terminal operations

use crate::error::Result;
use crate::source::{Generate, Items, Source};
use crate::stage::{Filter, Map, Skip, Take, TryFilter, TryMap};

/// A pipeline binds a chain of stages to a source.
///
/// Builder methods append a stage and return a new pipeline descriptor without
/// evaluating any element. Terminal operations ([`collect`](Self::collect),
/// [`first`](Self::first), [`for_each`](Self::for_each)) drive evaluation:
/// each source element is pushed through every stage in declaration order
/// before the next element is requested, and a chain ending in
/// [`take`](Self::take) stops pulling from the source as soon as enough
/// elements have been produced. A pipeline over an infinite generator with no
/// bounding stage never returns from a terminal operation; that is the
/// expected way to consume infinite sequences, only ever through a bound.
pub struct Pipeline<S> {
    source: S,
}

impl<T: Clone> Pipeline<Items<T>> {
    /// Create a pipeline over the given elements
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(items.into_iter().collect())
    }

    /// Create a pipeline over an in-memory collection
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            source: Items::new(items),
        }
    }
}

impl<T, F> Pipeline<Generate<T, F>>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    /// Create a pipeline over a generated source.
    ///
    /// Element 0 is `seed`; element i+1 is `next(&element_i)`. Generation
    /// stops the first time `next` returns `None`, and only then: predicates
    /// and maps never terminate a source.
    pub fn generate(seed: T, next: F) -> Self {
        Self {
            source: Generate::new(seed, next),
        }
    }
}

impl<S: Source> Pipeline<S> {
    /// Create a pipeline over a custom source
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    /// Append a stage keeping only elements that satisfy the predicate
    pub fn filter<P>(self, predicate: P) -> Pipeline<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Pipeline {
            source: Filter::new(self.source, predicate),
        }
    }

    /// Append a stage keeping only elements that do not satisfy the predicate
    pub fn filter_not<P>(
        self,
        mut predicate: P,
    ) -> Pipeline<Filter<S, impl FnMut(&S::Item) -> bool>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.filter(move |item| !predicate(item))
    }

    /// Append a stage keeping only elements for which the fallible predicate
    /// returns `Ok(true)`; a predicate error aborts the terminal operation
    pub fn try_filter<P>(self, predicate: P) -> Pipeline<TryFilter<S, P>>
    where
        P: FnMut(&S::Item) -> Result<bool>,
    {
        Pipeline {
            source: TryFilter::new(self.source, predicate),
        }
    }

    /// Append a stage transforming each element
    pub fn map<F, U>(self, f: F) -> Pipeline<Map<S, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        Pipeline {
            source: Map::new(self.source, f),
        }
    }

    /// Append a stage transforming each element with a fallible function;
    /// a mapping error aborts the terminal operation with no partial result
    pub fn try_map<F, U>(self, f: F) -> Pipeline<TryMap<S, F>>
    where
        F: FnMut(S::Item) -> Result<U>,
    {
        Pipeline {
            source: TryMap::new(self.source, f),
        }
    }

    /// Append a bounding stage letting at most `count` elements through.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `count` is negative.
    pub fn take(self, count: i64) -> Result<Pipeline<Take<S>>> {
        Ok(Pipeline {
            source: Take::new(self.source, count)?,
        })
    }

    /// Append a stage discarding the first `count` elements.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `count` is negative.
    pub fn skip(self, count: i64) -> Result<Pipeline<Skip<S>>> {
        Ok(Pipeline {
            source: Skip::new(self.source, count)?,
        })
    }

    /// Request the next fully transformed element.
    ///
    /// This is the single pull driving the whole stage chain for one element;
    /// terminal operations are loops over it.
    pub fn pull(&mut self) -> Result<Option<S::Item>> {
        self.source.pull()
    }

    /// Hint about the number of elements this pipeline may still produce
    pub fn size_hint(&self) -> Option<usize> {
        self.source.size_hint()
    }

    /// Rewind the whole chain so the pipeline can be evaluated again.
    ///
    /// Generator-backed pipelines restart generation from the seed.
    pub fn reset(&mut self) -> Result<()> {
        self.source.reset()
    }

    /// Terminal operation: materialize all produced elements, in order
    pub fn collect(&mut self) -> Result<Vec<S::Item>> {
        let mut items = match self.source.size_hint() {
            Some(hint) => Vec::with_capacity(hint),
            None => Vec::new(),
        };
        while let Some(item) = self.source.pull()? {
            items.push(item);
        }
        tracing::trace!(produced = items.len(), "pipeline materialized");
        Ok(items)
    }

    /// Terminal operation: the first produced element, if any.
    ///
    /// Pulls from the source only until one element passes the whole chain.
    pub fn first(&mut self) -> Result<Option<S::Item>> {
        self.source.pull()
    }

    /// Terminal operation: apply an action to each produced element, in order
    pub fn for_each<F>(&mut self, mut action: F) -> Result<()>
    where
        F: FnMut(S::Item),
    {
        while let Some(item) = self.source.pull()? {
            action(item);
        }
        Ok(())
    }

    /// Terminal operation: apply a fallible action to each produced element;
    /// an action error stops the iteration and propagates
    pub fn try_for_each<F>(&mut self, mut action: F) -> Result<()>
    where
        F: FnMut(S::Item) -> Result<()>,
    {
        while let Some(item) = self.source.pull()? {
            action(item)?;
        }
        Ok(())
    }
}
