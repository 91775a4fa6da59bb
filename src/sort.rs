//! Sorting and deduplication.
//!
//! Every function here is non-mutating: the input slice is copied and the
//! copy is sorted or deduplicated. The results are the canonical forms the
//! rest of the crate relies on:
//!
//! - [`sort`] yields a *sorted sequence* (non-decreasing under `Ord`).
//! - [`uniq`] yields a *deduplicated sorted sequence* (strictly increasing).
//! - [`sorted_uniq`] is the O(n) fast path of [`uniq`] for input that is
//!   already sorted.
//!
//! # Time Complexity
//!
//! | Function      | Cost       |
//! |---------------|------------|
//! | `sort`        | O(n log n) |
//! | `sort_by`     | O(n log n) |
//! | `uniq`        | O(n log n) |
//! | `sorted_uniq` | O(n)       |
//! | `is_sorted`   | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sort::{sort, sorted_uniq, uniq};
//!
//! let names = ["echo", "alpha", "echo", "bravo"];
//! assert_eq!(sort(&names), vec!["alpha", "bravo", "echo", "echo"]);
//! assert_eq!(uniq(&names), vec!["alpha", "bravo", "echo"]);
//! assert_eq!(sorted_uniq(&[1, 1, 2, 3, 3]), vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;

/// Returns a sorted copy of `elements`.
///
/// The sort is not stable: equal elements are treated as interchangeable.
///
/// # Examples
///
/// ```rust
/// use ordseq::sort::sort;
///
/// let original = vec![3, 1, 2];
/// assert_eq!(sort(&original), vec![1, 2, 3]);
/// assert_eq!(original, vec![3, 1, 2]);
/// ```
#[must_use]
pub fn sort<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    let mut sorted = elements.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Returns a copy of `elements` sorted with a caller-supplied comparator.
///
/// The result follows `compare`, not the natural order of `T`, so it cannot
/// be used where a sorted sequence is required.
///
/// # Examples
///
/// ```rust
/// use ordseq::sort::sort_by;
///
/// let descending = sort_by(&[1, 3, 2], |left, right| right.cmp(left));
/// assert_eq!(descending, vec![3, 2, 1]);
/// ```
#[must_use]
pub fn sort_by<T, F>(elements: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();
    sorted.sort_unstable_by(compare);
    sorted
}

/// Returns the sorted, deduplicated form of `elements`.
///
/// Equivalent to `sorted_uniq(&sort(elements))`, so the result never depends
/// on the order of the input.
///
/// # Examples
///
/// ```rust
/// use ordseq::sort::uniq;
///
/// assert_eq!(uniq(&["b", "a", "a", "b", "b"]), vec!["a", "b"]);
/// assert!(uniq::<i32>(&[]).is_empty());
/// ```
#[must_use]
pub fn uniq<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    let mut sorted = sort(elements);
    sorted.dedup();
    sorted
}

/// Alias of [`uniq`].
#[must_use]
pub fn distinct<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    uniq(elements)
}

/// Deduplicates an already sorted slice in a single pass.
///
/// An element is emitted only if it differs from the previously emitted one.
///
/// # Preconditions
///
/// `elements` must be non-decreasing. Unsorted input is not detected: it
/// yields a result that still contains duplicates (a logic error, not a
/// panic).
///
/// # Examples
///
/// ```rust
/// use ordseq::sort::sorted_uniq;
///
/// assert_eq!(sorted_uniq(&["a", "a", "b", "c", "c"]), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn sorted_uniq<T: PartialEq + Clone>(elements: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(elements.len());
    for element in elements {
        if result.last() != Some(element) {
            result.push(element.clone());
        }
    }
    result
}

/// Returns `true` if `elements` is non-decreasing.
///
/// # Examples
///
/// ```rust
/// use ordseq::sort::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2]));
/// assert!(!is_sorted(&[2, 1]));
/// ```
#[must_use]
pub fn is_sorted<T: Ord>(elements: &[T]) -> bool {
    first_unsorted_position(elements).is_none()
}

/// Index of the first element that is smaller than its predecessor.
pub(crate) fn first_unsorted_position<T: Ord>(elements: &[T]) -> Option<usize> {
    elements
        .windows(2)
        .position(|window| window[0] > window[1])
        .map(|position| position + 1)
}

/// Sorted, deduplicated references into `elements`.
///
/// The set-algebra engine merges over these so that neither input has to be
/// cloned before the merge.
pub(crate) fn normalized<T: Ord>(elements: &[T]) -> Vec<&T> {
    let mut references: Vec<&T> = elements.iter().collect();
    references.sort_unstable();
    references.dedup();
    references
}
