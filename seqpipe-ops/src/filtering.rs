//! Filtering operations that produce new collections

use std::collections::HashSet;
use std::hash::Hash;

/// Split a collection into the elements that satisfy the predicate and the
/// elements that do not, preserving order within each half
pub fn partition<T, P>(items: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().cloned().partition(|item| predicate(item))
}

/// Keep only the first occurrence of each element, preserving order
pub fn distinct<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    distinct_by(items, Clone::clone)
}

/// Keep only the first element for each distinct key, preserving order.
///
/// The key function is used for comparison only; output elements keep their
/// original form.
pub fn distinct_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(key(item)) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_splits_by_predicate() {
        let numbers: Vec<i32> = (1..=10).collect();
        let (even, odd) = partition(&numbers, |n| n % 2 == 0);
        assert_eq!(even, vec![2, 4, 6, 8, 10]);
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn distinct_is_case_sensitive_and_order_preserving() {
        let fruits = ["Apple", "Banana", "Apple", "APPLE", "BANANA", "Durian"];
        assert_eq!(
            distinct(&fruits),
            vec!["Apple", "Banana", "APPLE", "BANANA", "Durian"]
        );
    }

    #[test]
    fn distinct_by_compares_keys_but_keeps_original_elements() {
        let fruits = ["Apple", "Banana", "Apple", "APPLE", "BANANA", "Durian"];
        assert_eq!(
            distinct_by(&fruits, |fruit| fruit.to_lowercase()),
            vec!["Apple", "Banana", "Durian"]
        );
    }

    #[test]
    fn empty_collections_stay_empty() {
        let (yes, no) = partition(&Vec::<i32>::new(), |_| true);
        assert!(yes.is_empty());
        assert!(no.is_empty());
        assert!(distinct(&Vec::<i32>::new()).is_empty());
    }
}
