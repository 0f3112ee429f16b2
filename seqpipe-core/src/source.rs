//! Source trait and implementations for sequence input

use crate::error::Result;

/// A source of elements for a pipeline.
///
/// Evaluation is pull-based: the consumer repeatedly requests the next element
/// and the source answers with `Ok(Some(element))` until it is exhausted, at
/// which point it answers `Ok(None)`. Exhaustion is sticky: once a source has
/// returned `Ok(None)` it keeps doing so until it is reset.
pub trait Source {
    /// The type of elements produced by this source
    type Item;

    /// Request the next element from this source.
    /// Returns `Ok(None)` when exhausted.
    fn pull(&mut self) -> Result<Option<Self::Item>>;

    /// Provides a hint about the number of remaining elements (if known)
    fn size_hint(&self) -> Option<usize> {
        None
    }

    /// Rewind the source so it produces its elements from the beginning again
    fn reset(&mut self) -> Result<()>;
}

/// A finite source over an in-memory ordered collection.
///
/// Elements are handed out by cloning so the source can be reset and replayed.
pub struct Items<T> {
    /// The backing elements, in order
    items: Vec<T>,

    /// Position of the next element to hand out
    index: usize,
}

impl<T> Items<T> {
    /// Create a new source over the given elements
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }
}

impl<T: Clone> Source for Items<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        let next = self.items.get(self.index).cloned();
        if next.is_some() {
            self.index += 1;
        }
        Ok(next)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len() - self.index)
    }

    fn reset(&mut self) -> Result<()> {
        self.index = 0;
        Ok(())
    }
}

/// Generation state for [`Generate`]
enum GenState<T> {
    /// The seed has not been handed out yet
    Fresh,

    /// Generation is underway; holds the most recently produced element
    Running(T),

    /// The generator function returned `None`
    Done,
}

/// A source that derives each element from the previous one.
///
/// Element 0 is the seed; element i+1 is `next(&element_i)`. The source is
/// exhausted the first time `next` returns `None`; nothing else terminates a
/// generated source. The source holds no buffer: resetting it
/// restarts generation from the seed.
pub struct Generate<T, F> {
    /// The first element
    seed: T,

    /// Produces the element following the given one, or `None` to stop
    next: F,

    /// Where generation currently stands
    state: GenState<T>,
}

impl<T, F> Generate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    /// Create a new generated source from a seed and a successor function
    pub fn new(seed: T, next: F) -> Self {
        Self {
            seed,
            next,
            state: GenState::Fresh,
        }
    }
}

impl<T, F> Source for Generate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        let last = match &self.state {
            GenState::Fresh => {
                let seed = self.seed.clone();
                self.state = GenState::Running(seed.clone());
                return Ok(Some(seed));
            }
            GenState::Done => return Ok(None),
            GenState::Running(last) => last.clone(),
        };

        match (self.next)(&last) {
            Some(value) => {
                self.state = GenState::Running(value.clone());
                Ok(Some(value))
            }
            None => {
                self.state = GenState::Done;
                Ok(None)
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.state = GenState::Fresh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_produces_elements_in_order_and_exhausts() {
        let mut source = Items::new(vec![1, 2, 3]);
        assert_eq!(source.size_hint(), Some(3));
        assert_eq!(source.pull().unwrap(), Some(1));
        assert_eq!(source.pull().unwrap(), Some(2));
        assert_eq!(source.size_hint(), Some(1));
        assert_eq!(source.pull().unwrap(), Some(3));
        assert_eq!(source.pull().unwrap(), None);
        assert_eq!(source.pull().unwrap(), None);
    }

    #[test]
    fn items_reset_replays_from_the_beginning() {
        let mut source = Items::new(vec!["a", "b"]);
        assert_eq!(source.pull().unwrap(), Some("a"));
        source.reset().unwrap();
        assert_eq!(source.pull().unwrap(), Some("a"));
    }

    #[test]
    fn generate_starts_with_the_seed() {
        let mut source = Generate::new(1, |n| Some(n + 2));
        assert_eq!(source.pull().unwrap(), Some(1));
        assert_eq!(source.pull().unwrap(), Some(3));
        assert_eq!(source.pull().unwrap(), Some(5));
    }

    #[test]
    fn generate_exhausts_when_next_returns_none() {
        let mut source = Generate::new(1, |n| if *n < 9 { Some(n + 2) } else { None });
        let mut produced = Vec::new();
        while let Some(value) = source.pull().unwrap() {
            produced.push(value);
        }
        assert_eq!(produced, vec![1, 3, 5, 7, 9]);
        // exhaustion is sticky
        assert_eq!(source.pull().unwrap(), None);
    }

    #[test]
    fn generate_reset_restarts_from_the_seed() {
        let mut source = Generate::new(10, |n| if *n > 0 { Some(n - 5) } else { None });
        assert_eq!(source.pull().unwrap(), Some(10));
        assert_eq!(source.pull().unwrap(), Some(5));
        source.reset().unwrap();
        assert_eq!(source.pull().unwrap(), Some(10));
    }
}
