//! Element-wise transformations.
//!
//! Every callback receives `(index, &element)`; callers that only need the
//! element ignore the index with `_`. Callbacks run synchronously in
//! ascending index order.
//!
//! The `try_*` variants accept fallible callbacks. The first `Err` stops the
//! iteration immediately and is returned unchanged; no later element is
//! visited.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::transform::{filter, map, reduce};
//!
//! let words = ["car1", "car2", "bus1"];
//! let upper = map(&words, |_, word| word.to_uppercase());
//! assert_eq!(upper, vec!["CAR1", "CAR2", "BUS1"]);
//!
//! let cars = filter(&words, |_, word| word.starts_with("car"));
//! assert_eq!(cars, vec!["car1", "car2"]);
//!
//! let total = reduce(&[1, 2, 3], 0, |sum, _, value| sum + value);
//! assert_eq!(total, 6);
//! ```

use crate::search::sorted_contains;
use crate::sort::normalized;

/// Applies `function` to every element and collects the results.
#[must_use]
pub fn map<T, U, F>(elements: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Fallible [`map`].
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use ordseq::transform::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2", "x"], |_, text| text.parse::<i32>());
/// assert!(parsed.is_err());
/// ```
pub fn try_map<T, U, E, F>(elements: &[T], mut function: F) -> Result<Vec<U>, E>
where
    F: FnMut(usize, &T) -> Result<U, E>,
{
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Keeps the elements for which `predicate` returns `true`.
#[must_use]
pub fn filter<T, F>(elements: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    elements
        .iter()
        .enumerate()
        .filter(|(index, element)| predicate(*index, *element))
        .map(|(_, element)| element.clone())
        .collect()
}

/// Fallible [`filter`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_filter<T, E, F>(elements: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(usize, &T) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        if predicate(index, element)? {
            kept.push(element.clone());
        }
    }
    Ok(kept)
}

/// Removes the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```rust
/// use ordseq::transform::delete_if;
///
/// let buses = delete_if(&["car1", "car2", "bus1", "bus2"], |_, word| word.starts_with("car"));
/// assert_eq!(buses, vec!["bus1", "bus2"]);
/// ```
#[must_use]
pub fn delete_if<T, F>(elements: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    filter(elements, |index, element| !predicate(index, element))
}

/// Folds the elements into an accumulator, left to right.
#[must_use]
pub fn reduce<T, A, F>(elements: &[T], initial: A, mut accumulate: F) -> A
where
    F: FnMut(A, usize, &T) -> A,
{
    elements
        .iter()
        .enumerate()
        .fold(initial, |accumulator, (index, element)| {
            accumulate(accumulator, index, element)
        })
}

/// Fallible [`reduce`].
///
/// # Errors
///
/// Returns the first error produced by `accumulate`.
pub fn try_reduce<T, A, E, F>(elements: &[T], initial: A, mut accumulate: F) -> Result<A, E>
where
    F: FnMut(A, usize, &T) -> Result<A, E>,
{
    elements
        .iter()
        .enumerate()
        .try_fold(initial, |accumulator, (index, element)| {
            accumulate(accumulator, index, element)
        })
}

/// Calls `function` for every element.
pub fn each<T, F>(elements: &[T], mut function: F)
where
    F: FnMut(usize, &T),
{
    for (index, element) in elements.iter().enumerate() {
        function(index, element);
    }
}

/// Fallible [`each`].
///
/// # Errors
///
/// Returns the first error produced by `function`.
pub fn try_each<T, E, F>(elements: &[T], mut function: F) -> Result<(), E>
where
    F: FnMut(usize, &T) -> Result<(), E>,
{
    for (index, element) in elements.iter().enumerate() {
        function(index, element)?;
    }
    Ok(())
}

/// Removes every element of `elements` that occurs anywhere in `removed`.
///
/// Unlike [`difference`](crate::set::difference), the surviving elements
/// keep their original order and duplicates.
///
/// # Complexity
///
/// O((n + m) log m)
///
/// # Examples
///
/// ```rust
/// use ordseq::transform::subtract;
///
/// assert_eq!(subtract(&["tom", "bob", "tom"], &["jack", "bob"]), vec!["tom", "tom"]);
/// ```
#[must_use]
pub fn subtract<T: Ord + Clone>(elements: &[T], removed: &[T]) -> Vec<T> {
    let removed = normalized(removed);
    elements
        .iter()
        .filter(|element| !sorted_contains(&removed, element))
        .cloned()
        .collect()
}

/// Returns `elements` followed by `appended`.
#[must_use]
pub fn add<T: Clone>(elements: &[T], appended: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(elements.len() + appended.len());
    result.extend_from_slice(elements);
    result.extend_from_slice(appended);
    result
}
