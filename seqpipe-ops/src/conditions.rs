//! Predicate checks over whole collections

/// True if at least one element satisfies the predicate
pub fn any<T, P>(items: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(|item| predicate(item))
}

/// True if no element satisfies the predicate
pub fn none<T, P>(items: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !items.iter().any(|item| predicate(item))
}

/// True if every element satisfies the predicate.
///
/// An empty collection vacuously satisfies any predicate.
pub fn all<T, P>(items: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(|item| predicate(item))
}
