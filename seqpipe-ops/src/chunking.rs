//! Splitting collections into chunks and sliding windows, and merging them back

use crate::error::{Error, Result};

/// Split a collection into consecutive chunks of `size` elements.
///
/// The last chunk may be shorter. A chunk size of zero is rejected.
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    // a chunked collection is a windowed one where the step equals the size
    // and partial windows are kept
    windowed(items, size, size, true)
}

/// Split a collection into chunks and transform each chunk.
///
/// The transform receives each chunk as a slice, so no intermediate chunk
/// list is materialized.
pub fn chunked_by<T, U, F>(items: &[T], size: usize, transform: F) -> Result<Vec<U>>
where
    F: FnMut(&[T]) -> U,
{
    windowed_by(items, size, size, true, transform)
}

/// Produce a sliding-window view of a collection.
///
/// `step` is the distance between the starts of consecutive windows; when
/// `partial` is true, shorter leftover windows at the end are kept.
pub fn windowed<T: Clone>(
    items: &[T],
    size: usize,
    step: usize,
    partial: bool,
) -> Result<Vec<Vec<T>>> {
    windowed_by(items, size, step, partial, <[T]>::to_vec)
}

/// Produce a sliding-window view and transform each window.
pub fn windowed_by<T, U, F>(
    items: &[T],
    size: usize,
    step: usize,
    partial: bool,
    mut transform: F,
) -> Result<Vec<U>>
where
    F: FnMut(&[T]) -> U,
{
    if size == 0 || step == 0 {
        return Err(Error::InvalidArgument(format!(
            "windowed expects positive size and step, got size {size} and step {step}"
        )));
    }

    let mut windows = Vec::new();
    let mut start = 0;
    while start < items.len() {
        let end = usize::min(start + size, items.len());
        if end - start < size && !partial {
            break;
        }
        windows.push(transform(&items[start..end]));
        start += step;
    }
    tracing::trace!(windows = windows.len(), size, step, "built windows");
    Ok(windows)
}

/// Merge a collection of collections into a single flat collection
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested
        .iter()
        .flat_map(|inner| inner.iter().cloned())
        .collect()
}

/// Map each element to a collection, then flatten the results
pub fn flat_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> Vec<U>,
{
    items.iter().flat_map(f).collect()
}
