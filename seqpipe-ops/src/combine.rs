//! Combining collections: zipping, folding, and reducing

use crate::error::{Error, Result};

/// Pair up elements of two collections by index, truncating to the shorter one
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Pair up elements of two collections and transform each pair
pub fn zip_with<A, B, U, F>(a: &[A], b: &[B], mut f: F) -> Vec<U>
where
    F: FnMut(&A, &B) -> U,
{
    a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect()
}

/// Split a collection of pairs into a pair of collections
pub fn unzip<A: Clone, B: Clone>(pairs: &[(A, B)]) -> (Vec<A>, Vec<B>) {
    pairs.iter().cloned().unzip()
}

/// Combine each element with the next one in the same collection.
///
/// A collection with fewer than two elements produces an empty result.
pub fn zip_with_next<T, U, F>(items: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, &T) -> U,
{
    items.windows(2).map(|pair| f(&pair[0], &pair[1])).collect()
}

/// Accumulate a collection into a single value, starting from `init`
pub fn fold<T, A, F>(items: &[T], init: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(init, f)
}

/// Accumulate a collection into a single value, seeded with its first element.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] for an empty collection, which has no
/// first element to seed the accumulator with.
pub fn reduce<T, F>(items: &[T], f: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (first, rest) = items.split_first().ok_or_else(|| {
        Error::InvalidArgument("reduce expects a non-empty collection".to_string())
    })?;
    Ok(rest.iter().fold(first.clone(), f))
}

/// Like [`fold`], but also keep every intermediate accumulator value.
///
/// The result has one more element than the input; its first element is
/// `init` and its last is the final fold result.
pub fn running_fold<T, A, F>(items: &[T], init: A, mut f: F) -> Vec<A>
where
    A: Clone,
    F: FnMut(&A, &T) -> A,
{
    let mut acc = init;
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(acc.clone());
    for item in items {
        acc = f(&acc, item);
        out.push(acc.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_truncates_to_the_shorter_collection() {
        let names = ["ada", "bo", "cy"];
        let ages = [39, 38];
        assert_eq!(zip(&names, &ages), vec![("ada", 39), ("bo", 38)]);
    }

    #[test]
    fn zip_with_transforms_each_pair() {
        let names = ["ada", "bo"];
        let ages = [39, 38];
        let labelled = zip_with(&names, &ages, |name, age| format!("{name}:{age}"));
        assert_eq!(labelled, vec!["ada:39", "bo:38"]);
    }

    #[test]
    fn unzip_reverses_zip() {
        let names = ["ada", "bo"];
        let ages = [39, 38];
        let pairs = zip(&names, &ages);
        assert_eq!(unzip(&pairs), (names.to_vec(), ages.to_vec()));
    }

    #[test]
    fn zip_with_next_combines_adjacent_elements() {
        let ages = [39, 38, 34];
        assert_eq!(zip_with_next(&ages, |a, b| a - b), vec![1, 4]);
        assert_eq!(zip_with_next(&[7], |a, b| a + b), Vec::<i32>::new());
    }

    #[test]
    fn reduce_seeds_with_the_first_element() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert_eq!(reduce(&numbers, |acc, n| acc * n).unwrap(), 3_628_800);
    }

    #[test]
    fn reduce_rejects_an_empty_collection() {
        let err = reduce(&Vec::<i32>::new(), |acc, n| acc + n).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn fold_starts_from_the_given_accumulator() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert_eq!(fold(&numbers, 1, |acc, n| n - acc), 6);
        assert_eq!(fold(&Vec::<i64>::new(), 42, |acc, n| acc + n), 42);
    }

    #[test]
    fn running_fold_keeps_intermediate_values() {
        let steps = running_fold(&[1, 2, 3, 4], 0, |acc, n| acc + n);
        assert_eq!(steps, vec![0, 1, 3, 6, 10]);
    }
}
