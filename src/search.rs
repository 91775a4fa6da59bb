//! Linear and binary search, plus positional accessors.
//!
//! Not-found is reported as `None` rather than a sentinel index.
//!
//! The binary variants ([`sorted_index`], [`sorted_contains`]) require the
//! slice to be sorted in ascending order. Duplicates are tolerated. If the
//! slice is not sorted the result is unspecified (possibly a false `None`),
//! but the search never indexes out of bounds.
//!
//! Targets may be given in a borrowed form, so a `Vec<String>` can be
//! searched with a `&str`.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::search::{index, sorted_index};
//!
//! let letters = ["a", "b", "c", "d"];
//! assert_eq!(index(&letters, &"c"), Some(2));
//! assert_eq!(sorted_index(&letters, &"c"), Some(2));
//! assert_eq!(sorted_index(&letters, &"!"), None);
//! ```

use std::borrow::Borrow;

/// Returns the position of the first element equal to `target`.
///
/// # Complexity
///
/// O(n)
#[must_use]
pub fn index<T, Q>(elements: &[T], target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    elements
        .iter()
        .position(|element| <T as Borrow<Q>>::borrow(element) == target)
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::contains;
///
/// let names = vec!["tom".to_string(), "bob".to_string()];
/// assert!(contains(&names, "bob"));
/// assert!(!contains(&names, "jack"));
/// ```
#[must_use]
pub fn contains<T, Q>(elements: &[T], target: &Q) -> bool
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    index(elements, target).is_some()
}

/// Binary search for `target` in a sorted slice.
///
/// Finds the leftmost position whose element is not less than `target` and
/// returns it if that element equals `target`. A target greater than every
/// element lands one past the end and is reported as `None` without being
/// dereferenced.
///
/// # Complexity
///
/// O(log n)
#[must_use]
pub fn sorted_index<T, Q>(elements: &[T], target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let position =
        elements.partition_point(|element| <T as Borrow<Q>>::borrow(element) < target);
    elements
        .get(position)
        .filter(|element| <T as Borrow<Q>>::borrow(*element) == target)
        .map(|_| position)
}

/// Binary-search membership test for a sorted slice.
#[must_use]
pub fn sorted_contains<T, Q>(elements: &[T], target: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    sorted_index(elements, target).is_some()
}

/// Returns the first element, or `None` for an empty slice.
#[must_use]
pub fn first<T>(elements: &[T]) -> Option<&T> {
    elements.first()
}

/// Returns the last element, or `None` for an empty slice.
#[must_use]
pub fn last<T>(elements: &[T]) -> Option<&T> {
    elements.last()
}

/// Returns `true` if the slice has at least one element.
#[must_use]
pub const fn any<T>(elements: &[T]) -> bool {
    !elements.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn alphabet() -> Vec<String> {
        ('a'..='z').map(String::from).collect()
    }

    #[rstest]
    fn sorted_index_matches_linear_index_for_every_letter() {
        let letters = alphabet();
        for (position, letter) in letters.iter().enumerate() {
            assert_eq!(index(&letters, letter.as_str()), Some(position));
            assert_eq!(sorted_index(&letters, letter.as_str()), Some(position));
        }
    }

    #[rstest]
    #[case::empty_string("")]
    #[case::below_range("!")]
    #[case::above_range("{")]
    #[case::between("bb")]
    fn missing_targets_are_not_found(#[case] target: &str) {
        let letters = alphabet();
        assert_eq!(index(&letters, target), None);
        assert_eq!(sorted_index(&letters, target), None);
        assert!(!contains(&letters, target));
        assert!(!sorted_contains(&letters, target));
    }

    #[rstest]
    fn sorted_index_on_empty_slice_is_none() {
        let empty: [i32; 0] = [];
        assert_eq!(sorted_index(&empty, &1), None);
    }

    #[rstest]
    fn sorted_index_tolerates_duplicates() {
        let elements = [1, 2, 2, 2, 3];
        let position = sorted_index(&elements, &2);
        assert_eq!(position.map(|position| elements[position]), Some(2));
    }

    #[rstest]
    fn index_returns_first_match() {
        assert_eq!(index(&[7, 8, 7], &7), Some(0));
    }

    #[rstest]
    fn accessors_on_empty_slice() {
        let empty: [&str; 0] = [];
        assert_eq!(first(&empty), None);
        assert_eq!(last(&empty), None);
        assert!(!any(&empty));
    }

    #[rstest]
    fn accessors_on_non_empty_slice() {
        let elements = ["x", "y", "z"];
        assert_eq!(first(&elements), Some(&"x"));
        assert_eq!(last(&elements), Some(&"z"));
        assert!(any(&elements));
    }
}
