//! Fluent wrappers over ordered sequences.
//!
//! This module provides two immutable wrappers that chain the free functions
//! of [`sort`](crate::sort), [`search`](crate::search), [`set`](crate::set)
//! and [`transform`](crate::transform):
//!
//! - [`Sequence`]: any ordered sequence, possibly *absent*.
//! - [`SortedSequence`]: a sequence known to be non-decreasing.
//!
//! # Absent vs Empty
//!
//! A `Sequence` is either absent or a (possibly empty) list of elements. The
//! two are observably different and the distinction survives `sort`, `uniq`,
//! `map`, `reduce` and `each`:
//!
//! ```rust
//! use ordseq::sequence::Sequence;
//!
//! let absent: Sequence<i32> = Sequence::absent();
//! assert!(absent.sort().is_absent());
//! assert!(!Sequence::<i32>::new(vec![]).sort().is_absent());
//! ```
//!
//! Set operations, `filter` and `subtract` always produce a present sequence.
//!
//! # Sortedness
//!
//! Sortedness is tracked by type. Only `sort`, `uniq`, the set operations and
//! the validating [`TryFrom`] produce a [`SortedSequence`]; its `contains` and
//! `index` use binary search. Every other transformation returns a plain
//! `Sequence`, so a stale "sorted" claim cannot survive a `map` or `add`.
//!
//! ```rust
//! use ordseq::sequence::Sequence;
//!
//! let names = Sequence::from(vec!["echo", "alpha", "bravo", "delta", "charlie", "Charlie"]);
//! let result = names
//!     .sort()
//!     .map(|_, name| name.to_uppercase())
//!     .subtract(&["ALPHA".to_string()])
//!     .uniq();
//! assert_eq!(result.into_vec(), vec!["BRAVO", "CHARLIE", "DELTA", "ECHO"]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::SequenceError;
use crate::{search, set, sort, transform};

/// An immutable ordered sequence that may be absent.
///
/// # Examples
///
/// ```rust
/// use ordseq::sequence::Sequence;
///
/// let sequence = Sequence::from(vec![3, 1, 2, 3]);
/// assert_eq!(sequence.uniq().into_vec(), vec![1, 2, 3]);
/// assert_eq!(sequence.index(&2), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elements: Option<Vec<T>>,
}

impl<T> Sequence<T> {
    /// Creates a present sequence holding `elements`.
    #[inline]
    #[must_use]
    pub const fn new(elements: Vec<T>) -> Self {
        Self {
            elements: Some(elements),
        }
    }

    /// Creates the absent sequence.
    #[inline]
    #[must_use]
    pub const fn absent() -> Self {
        Self { elements: None }
    }

    /// Creates a present, empty sequence.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns `true` for the absent sequence.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.elements.is_none()
    }

    /// Number of elements; zero when absent.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` when there are no elements, including when absent.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The elements as a slice; empty when absent.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_deref().unwrap_or(&[])
    }

    /// The elements, or `None` when absent.
    #[inline]
    #[must_use]
    pub fn as_option(&self) -> Option<&[T]> {
        self.elements.as_deref()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Consumes the sequence, returning its elements; empty when absent.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements.unwrap_or_default()
    }

    /// Consumes the sequence, returning `None` when absent.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<Vec<T>> {
        self.elements
    }

    /// Applies `function` to the present elements, keeping absence.
    fn map_present<U>(&self, function: impl FnOnce(&[T]) -> Vec<U>) -> Sequence<U> {
        Sequence {
            elements: self.as_option().map(function),
        }
    }

    /// Applies `function` to every `(index, element)`. Absent stays absent.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        self.map_present(|elements| transform::map(elements, function))
    }

    /// Fallible [`map`](Self::map). Absent stays absent.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_map<U, E, F>(&self, function: F) -> Result<Sequence<U>, E>
    where
        F: FnMut(usize, &T) -> Result<U, E>,
    {
        self.as_option()
            .map(|elements| transform::try_map(elements, function))
            .transpose()
            .map(Sequence::from)
    }

    /// Folds `(index, element)` pairs into an accumulator.
    ///
    /// An absent sequence yields `initial` untouched.
    #[must_use]
    pub fn reduce<A, F>(&self, initial: A, accumulate: F) -> A
    where
        F: FnMut(A, usize, &T) -> A,
    {
        transform::reduce(self.as_slice(), initial, accumulate)
    }

    /// Fallible [`reduce`](Self::reduce).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `accumulate`.
    pub fn try_reduce<A, E, F>(&self, initial: A, accumulate: F) -> Result<A, E>
    where
        F: FnMut(A, usize, &T) -> Result<A, E>,
    {
        transform::try_reduce(self.as_slice(), initial, accumulate)
    }

    /// Calls `function` for every `(index, element)`; nothing for absent.
    pub fn each<F>(&self, function: F)
    where
        F: FnMut(usize, &T),
    {
        transform::each(self.as_slice(), function);
    }

    /// Fallible [`each`](Self::each).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_each<E, F>(&self, function: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>,
    {
        transform::try_each(self.as_slice(), function)
    }

    /// The first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        search::first(self.as_slice())
    }

    /// The last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        search::last(self.as_slice())
    }

    /// Returns `true` if the sequence has at least one element.
    #[must_use]
    pub fn any(&self) -> bool {
        search::any(self.as_slice())
    }

    /// Linear search for the first element equal to `target`.
    #[must_use]
    pub fn index<Q>(&self, target: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        search::index(self.as_slice(), target)
    }

    /// Linear membership test.
    #[must_use]
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        search::contains(self.as_slice(), target)
    }
}

impl<T: Clone> Sequence<T> {
    /// Keeps the elements matching `predicate`. The result is always present.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(usize, &T) -> bool,
    {
        Self::new(transform::filter(self.as_slice(), predicate))
    }

    /// Fallible [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    pub fn try_filter<E, F>(&self, predicate: F) -> Result<Self, E>
    where
        F: FnMut(usize, &T) -> Result<bool, E>,
    {
        transform::try_filter(self.as_slice(), predicate).map(Self::new)
    }

    /// Drops the elements matching `predicate`. The result is always present.
    #[must_use]
    pub fn delete_if<F>(&self, predicate: F) -> Self
    where
        F: FnMut(usize, &T) -> bool,
    {
        Self::new(transform::delete_if(self.as_slice(), predicate))
    }

    /// Appends `appended`.
    ///
    /// Appending nothing to an absent sequence leaves it absent.
    #[must_use]
    pub fn add(&self, appended: impl AsRef<[T]>) -> Self {
        let appended = appended.as_ref();
        if self.is_absent() && appended.is_empty() {
            return Self::absent();
        }
        Self::new(transform::add(self.as_slice(), appended))
    }

    /// Copies and sorts with a caller comparator. Absent stays absent.
    ///
    /// The result is a plain `Sequence` because it does not follow the
    /// natural order of `T`.
    #[must_use]
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.map_present(|elements| sort::sort_by(elements, compare))
    }
}

impl<T: Ord + Clone> Sequence<T> {
    /// Sorted copy. Absent stays absent.
    #[must_use]
    pub fn sort(&self) -> SortedSequence<T> {
        SortedSequence::from_sorted(self.map_present(sort::sort))
    }

    /// Sorted, deduplicated copy. Absent stays absent.
    #[must_use]
    pub fn uniq(&self) -> SortedSequence<T> {
        SortedSequence::from_sorted(self.map_present(sort::uniq))
    }

    /// Removes every element occurring in `removed`, keeping order and
    /// duplicates of the rest. The result is always present.
    #[must_use]
    pub fn subtract(&self, removed: impl AsRef<[T]>) -> Self {
        Self::new(transform::subtract(self.as_slice(), removed.as_ref()))
    }

    /// Sorted, deduplicated union. Always present.
    #[must_use]
    pub fn union(&self, other: impl AsRef<[T]>) -> SortedSequence<T> {
        SortedSequence::from_sorted(Self::new(set::union(self.as_slice(), other.as_ref())))
    }

    /// Sorted, deduplicated intersection. Always present.
    #[must_use]
    pub fn intersect(&self, other: impl AsRef<[T]>) -> SortedSequence<T> {
        SortedSequence::from_sorted(Self::new(set::intersect(
            self.as_slice(),
            other.as_ref(),
        )))
    }

    /// Sorted, deduplicated values of `self` missing from `other`. Always
    /// present.
    #[must_use]
    pub fn difference(&self, other: impl AsRef<[T]>) -> SortedSequence<T> {
        SortedSequence::from_sorted(Self::new(set::difference(
            self.as_slice(),
            other.as_ref(),
        )))
    }

    /// Sorted, deduplicated values in exactly one of the operands. Always
    /// present.
    #[must_use]
    pub fn symmetric_difference(&self, other: impl AsRef<[T]>) -> SortedSequence<T> {
        SortedSequence::from_sorted(Self::new(set::symmetric_difference(
            self.as_slice(),
            other.as_ref(),
        )))
    }
}

impl<T> Default for Sequence<T> {
    /// The default sequence is absent.
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> From<Option<Vec<T>>> for Sequence<T> {
    #[inline]
    fn from(elements: Option<Vec<T>>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self::new(elements.to_vec())
    }
}

impl<T> From<Sequence<T>> for Option<Vec<T>> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(elements) = self.as_option() else {
            return write!(formatter, "nil");
        };
        write!(formatter, "[")?;
        let mut first = true;
        for element in elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// An immutable sequence whose elements are non-decreasing.
///
/// Obtain one from [`Sequence::sort`], [`Sequence::uniq`], a set operation,
/// or by validating existing data with [`TryFrom`]. Searches use binary
/// search, and [`uniq`](Self::uniq) takes the linear fast path.
///
/// # Examples
///
/// ```rust
/// use ordseq::sequence::SortedSequence;
///
/// let sorted = SortedSequence::try_from(vec![1, 1, 4, 9]).unwrap();
/// assert_eq!(sorted.index(&4), Some(2));
/// assert_eq!(sorted.uniq().into_vec(), vec![1, 4, 9]);
///
/// assert!(SortedSequence::try_from(vec![2, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedSequence<T> {
    inner: Sequence<T>,
}

impl<T> SortedSequence<T> {
    /// Wraps a sequence that is already sorted.
    ///
    /// Callers inside the crate guarantee the invariant; debug builds check
    /// it.
    fn from_sorted(inner: Sequence<T>) -> Self
    where
        T: Ord,
    {
        debug_assert!(
            sort::is_sorted(inner.as_slice()),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self { inner }
    }

    /// Returns `true` for the absent sequence.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.inner.is_absent()
    }

    /// Number of elements; zero when absent.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when there are no elements, including when absent.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The elements as a slice; empty when absent.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// The elements, or `None` when absent.
    #[inline]
    #[must_use]
    pub fn as_option(&self) -> Option<&[T]> {
        self.inner.as_option()
    }

    /// Iterates over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Consumes the sequence, returning its elements; empty when absent.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }

    /// Consumes the sequence, returning `None` when absent.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<Vec<T>> {
        self.inner.into_option()
    }

    /// Forgets the sortedness guarantee.
    #[inline]
    #[must_use]
    pub fn into_sequence(self) -> Sequence<T> {
        self.inner
    }

    /// The smallest element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// The largest element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Returns `true` if the sequence has at least one element.
    #[must_use]
    pub fn any(&self) -> bool {
        self.inner.any()
    }

    /// Binary search for `target`.
    ///
    /// With duplicates, the position of the leftmost match is returned.
    #[must_use]
    pub fn index<Q>(&self, target: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::sorted_index(self.as_slice(), target)
    }

    /// Binary-search membership test.
    #[must_use]
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::sorted_contains(self.as_slice(), target)
    }

    /// Applies `function` to every `(index, element)`. The result is no
    /// longer known to be sorted. Absent stays absent.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        self.inner.map(function)
    }

    /// Fallible [`map`](Self::map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_map<U, E, F>(&self, function: F) -> Result<Sequence<U>, E>
    where
        F: FnMut(usize, &T) -> Result<U, E>,
    {
        self.inner.try_map(function)
    }

    /// Folds `(index, element)` pairs in ascending order.
    #[must_use]
    pub fn reduce<A, F>(&self, initial: A, accumulate: F) -> A
    where
        F: FnMut(A, usize, &T) -> A,
    {
        self.inner.reduce(initial, accumulate)
    }

    /// Calls `function` for every `(index, element)` in ascending order.
    pub fn each<F>(&self, function: F)
    where
        F: FnMut(usize, &T),
    {
        self.inner.each(function);
    }
}

impl<T: Clone> SortedSequence<T> {
    /// Keeps the elements matching `predicate`, as a plain `Sequence`.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Sequence<T>
    where
        F: FnMut(usize, &T) -> bool,
    {
        self.inner.filter(predicate)
    }

    /// Drops the elements matching `predicate`, as a plain `Sequence`.
    #[must_use]
    pub fn delete_if<F>(&self, predicate: F) -> Sequence<T>
    where
        F: FnMut(usize, &T) -> bool,
    {
        self.inner.delete_if(predicate)
    }

    /// Appends `appended`, as a plain `Sequence`.
    #[must_use]
    pub fn add(&self, appended: impl AsRef<[T]>) -> Sequence<T> {
        self.inner.add(appended)
    }
}

impl<T: Ord + Clone> SortedSequence<T> {
    /// Deduplicates in one linear pass. Absent stays absent.
    #[must_use]
    pub fn uniq(&self) -> Self {
        Self::from_sorted(self.inner.map_present(sort::sorted_uniq))
    }

    /// Removes every element occurring in `removed`, as a plain `Sequence`.
    #[must_use]
    pub fn subtract(&self, removed: impl AsRef<[T]>) -> Sequence<T> {
        self.inner.subtract(removed)
    }

    /// Sorted, deduplicated union. Always present.
    #[must_use]
    pub fn union(&self, other: impl AsRef<[T]>) -> Self {
        self.inner.union(other)
    }

    /// Sorted, deduplicated intersection. Always present.
    #[must_use]
    pub fn intersect(&self, other: impl AsRef<[T]>) -> Self {
        self.inner.intersect(other)
    }

    /// Sorted, deduplicated values of `self` missing from `other`. Always
    /// present.
    #[must_use]
    pub fn difference(&self, other: impl AsRef<[T]>) -> Self {
        self.inner.difference(other)
    }

    /// Sorted, deduplicated values in exactly one operand. Always present.
    #[must_use]
    pub fn symmetric_difference(&self, other: impl AsRef<[T]>) -> Self {
        self.inner.symmetric_difference(other)
    }
}

impl<T: Ord> TryFrom<Sequence<T>> for SortedSequence<T> {
    type Error = SequenceError;

    /// Validates that `sequence` is non-decreasing. An absent sequence is
    /// accepted and stays absent.
    fn try_from(sequence: Sequence<T>) -> Result<Self, Self::Error> {
        match sort::first_unsorted_position(sequence.as_slice()) {
            None => Ok(Self { inner: sequence }),
            Some(position) => {
                tracing::debug!(position, "rejected unsorted sequence");
                Err(SequenceError::Unsorted { position })
            }
        }
    }
}

impl<T: Ord> TryFrom<Vec<T>> for SortedSequence<T> {
    type Error = SequenceError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from(Sequence::new(elements))
    }
}

impl<T> From<SortedSequence<T>> for Sequence<T> {
    #[inline]
    fn from(sorted: SortedSequence<T>) -> Self {
        sorted.inner
    }
}

impl<T> AsRef<[T]> for SortedSequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> IntoIterator for SortedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

/// Message for the debug check in `SortedSequence::from_sorted`.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "SortedSequence requires non-decreasing elements";

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);
static_assertions::assert_impl_all!(SortedSequence<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.as_option() {
            Some(elements) => serializer.serialize_some(elements),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<Vec<T>> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.inner, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSequence<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let sequence = <Sequence<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(sequence).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
