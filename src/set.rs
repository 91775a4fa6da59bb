//! Set algebra over ordered sequences by sorted merge.
//!
//! Every operation in this module is driven by one primitive, [`compare`]:
//!
//! 1. both operands are normalized (sorted and deduplicated, by reference,
//!    so the inputs are neither cloned nor mutated);
//! 2. a dual-cursor merge walks the two normalized operands once, classifying
//!    each distinct value as [`Membership::LeftOnly`], [`Membership::Both`]
//!    or [`Membership::RightOnly`];
//! 3. a [`MergeVisitor`] receives each classification in ascending order.
//!
//! [`union`], [`intersect`], [`difference`] and [`symmetric_difference`] are
//! visitors that keep some of the classifications. Their results are always
//! sorted, deduplicated and materialized (an empty input yields an empty
//! vector).
//!
//! # Time Complexity
//!
//! O(n log n + m log m) for normalization, O(n + m) for the merge itself.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::set::{difference, intersect, union};
//!
//! let left = ["a", "b", "c", "d", "e"];
//! let right = ["d", "b", "x"];
//!
//! assert_eq!(union(&left, &right), vec!["a", "b", "c", "d", "e", "x"]);
//! assert_eq!(intersect(&left, &right), vec!["b", "d"]);
//! assert_eq!(difference(&left, &right), vec!["a", "c", "e"]);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::sort::normalized;

/// Where a value of a merge was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// Only in the left operand.
    LeftOnly,
    /// In both operands.
    Both,
    /// Only in the right operand.
    RightOnly,
}

/// Receives the classifications produced by [`compare`].
///
/// Every method defaults to a no-op, so a visitor only implements the
/// classifications it cares about.
///
/// # Examples
///
/// ```rust
/// use ordseq::set::{compare, MergeVisitor};
///
/// #[derive(Default)]
/// struct Shared(usize);
///
/// impl<T> MergeVisitor<T> for Shared {
///     fn both(&mut self, _element: &T) {
///         self.0 += 1;
///     }
/// }
///
/// let mut shared = Shared::default();
/// compare(&[1, 2, 3, 3], &[3, 2, 9], &mut shared);
/// assert_eq!(shared.0, 2);
/// ```
pub trait MergeVisitor<T: ?Sized> {
    /// Called for a value present only in the left operand.
    fn left_only(&mut self, _element: &T) {}

    /// Called for a value present in both operands.
    fn both(&mut self, _element: &T) {}

    /// Called for a value present only in the right operand.
    fn right_only(&mut self, _element: &T) {}

    /// Dispatches a classified value to the matching method.
    fn visit(&mut self, membership: Membership, element: &T) {
        match membership {
            Membership::LeftOnly => self.left_only(element),
            Membership::Both => self.both(element),
            Membership::RightOnly => self.right_only(element),
        }
    }
}

/// A callback slot of [`MergeCallbacks`].
pub trait ElementCallback<T: ?Sized> {
    /// Invokes the callback.
    fn call(&mut self, element: &T);
}

/// The callback used for every slot that was not set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl<T: ?Sized> ElementCallback<T> for Noop {
    #[inline]
    fn call(&mut self, _element: &T) {}
}

impl<T: ?Sized, F: FnMut(&T)> ElementCallback<T> for F {
    #[inline]
    fn call(&mut self, element: &T) {
        self(element);
    }
}

/// A [`MergeVisitor`] assembled from closures.
///
/// Slots that are not set keep the [`Noop`] callback.
///
/// # Examples
///
/// ```rust
/// use ordseq::set::{compare, MergeCallbacks};
///
/// let mut removed: Vec<String> = Vec::new();
/// let mut added: Vec<String> = Vec::new();
/// compare(
///     &["a", "b", "c"],
///     &["b", "c", "d"],
///     &mut MergeCallbacks::new()
///         .on_left_only(|element: &&str| removed.push(element.to_string()))
///         .on_right_only(|element: &&str| added.push(element.to_string())),
/// );
/// assert_eq!(removed, vec!["a"]);
/// assert_eq!(added, vec!["d"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeCallbacks<L = Noop, E = Noop, R = Noop> {
    left_only: L,
    equal: E,
    right_only: R,
}

impl MergeCallbacks {
    /// Creates callbacks where every slot is a no-op.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left_only: Noop,
            equal: Noop,
            right_only: Noop,
        }
    }
}

impl<L, E, R> MergeCallbacks<L, E, R> {
    /// Sets the callback for values only in the left operand.
    #[must_use]
    pub fn on_left_only<F>(self, callback: F) -> MergeCallbacks<F, E, R> {
        MergeCallbacks {
            left_only: callback,
            equal: self.equal,
            right_only: self.right_only,
        }
    }

    /// Sets the callback for values in both operands.
    #[must_use]
    pub fn on_equal<F>(self, callback: F) -> MergeCallbacks<L, F, R> {
        MergeCallbacks {
            left_only: self.left_only,
            equal: callback,
            right_only: self.right_only,
        }
    }

    /// Sets the callback for values only in the right operand.
    #[must_use]
    pub fn on_right_only<F>(self, callback: F) -> MergeCallbacks<L, E, F> {
        MergeCallbacks {
            left_only: self.left_only,
            equal: self.equal,
            right_only: callback,
        }
    }
}

impl<T, L, E, R> MergeVisitor<T> for MergeCallbacks<L, E, R>
where
    T: ?Sized,
    L: ElementCallback<T>,
    E: ElementCallback<T>,
    R: ElementCallback<T>,
{
    fn left_only(&mut self, element: &T) {
        self.left_only.call(element);
    }

    fn both(&mut self, element: &T) {
        self.equal.call(element);
    }

    fn right_only(&mut self, element: &T) {
        self.right_only.call(element);
    }
}

/// Dual-cursor merge over two sorted, deduplicated slices.
///
/// Yields every distinct value of both slices in ascending order together
/// with its [`Membership`]. Created by [`sorted_merge`].
#[derive(Debug, Clone)]
pub struct SortedMerge<'a, T> {
    left: &'a [T],
    right: &'a [T],
}

/// Merges two slices that are already sorted and deduplicated.
///
/// This skips the normalization step of [`compare`].
///
/// # Preconditions
///
/// Both slices must be strictly increasing. Otherwise the classification is
/// unspecified (a logic error, not a panic).
///
/// # Examples
///
/// ```rust
/// use ordseq::set::{sorted_merge, Membership};
///
/// let merged: Vec<_> = sorted_merge(&[1, 3], &[2, 3]).collect();
/// assert_eq!(
///     merged,
///     vec![
///         (Membership::LeftOnly, &1),
///         (Membership::RightOnly, &2),
///         (Membership::Both, &3),
///     ]
/// );
/// ```
#[must_use]
pub const fn sorted_merge<'a, T: Ord>(left: &'a [T], right: &'a [T]) -> SortedMerge<'a, T> {
    SortedMerge { left, right }
}

impl<'a, T: Ord> Iterator for SortedMerge<'a, T> {
    type Item = (Membership, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.split_first(), self.right.split_first()) {
            (Some((left_head, left_tail)), Some((right_head, right_tail))) => {
                match left_head.cmp(right_head) {
                    Ordering::Less => {
                        self.left = left_tail;
                        Some((Membership::LeftOnly, left_head))
                    }
                    Ordering::Greater => {
                        self.right = right_tail;
                        Some((Membership::RightOnly, right_head))
                    }
                    Ordering::Equal => {
                        self.left = left_tail;
                        self.right = right_tail;
                        Some((Membership::Both, left_head))
                    }
                }
            }
            (Some((left_head, left_tail)), None) => {
                self.left = left_tail;
                Some((Membership::LeftOnly, left_head))
            }
            (None, Some((right_head, right_tail))) => {
                self.right = right_tail;
                Some((Membership::RightOnly, right_head))
            }
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left, right) = (self.left.len(), self.right.len());
        (left.max(right), Some(left + right))
    }
}

impl<T: Ord> FusedIterator for SortedMerge<'_, T> {}

/// Classifies every distinct value of `left` and `right` and reports it to
/// `visitor` in ascending order.
///
/// Both operands are normalized first, so their order and duplicates do not
/// matter.
///
/// # Examples
///
/// ```rust
/// use ordseq::set::{compare, MergeCallbacks};
///
/// let mut common = Vec::new();
/// compare(
///     &[5, 1, 3, 1],
///     &[3, 5, 7],
///     &mut MergeCallbacks::new().on_equal(|element: &i32| common.push(*element)),
/// );
/// assert_eq!(common, vec![3, 5]);
/// ```
pub fn compare<T, V>(left: &[T], right: &[T], visitor: &mut V)
where
    T: Ord,
    V: MergeVisitor<T> + ?Sized,
{
    let left = normalized(left);
    let right = normalized(right);
    tracing::trace!(
        left_len = left.len(),
        right_len = right.len(),
        "merging normalized operands"
    );
    for (membership, element) in sorted_merge(&left, &right) {
        visitor.visit(membership, *element);
    }
}

/// Collects clones of the classifications it was asked to keep.
struct Retain<T> {
    left_only: bool,
    both: bool,
    right_only: bool,
    elements: Vec<T>,
}

impl<T> Retain<T> {
    const fn new(left_only: bool, both: bool, right_only: bool) -> Self {
        Self {
            left_only,
            both,
            right_only,
            elements: Vec::new(),
        }
    }
}

impl<T: Clone> MergeVisitor<T> for Retain<T> {
    fn visit(&mut self, membership: Membership, element: &T) {
        let keep = match membership {
            Membership::LeftOnly => self.left_only,
            Membership::Both => self.both,
            Membership::RightOnly => self.right_only,
        };
        if keep {
            self.elements.push(element.clone());
        }
    }
}

fn retain<T: Ord + Clone>(left: &[T], right: &[T], mut retain: Retain<T>) -> Vec<T> {
    compare(left, right, &mut retain);
    retain.elements
}

/// Returns the sorted, deduplicated values that are in `left` or `right`.
#[must_use]
pub fn union<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    retain(left, right, Retain::new(true, true, true))
}

/// Returns the sorted, deduplicated values that are in both `left` and
/// `right`.
#[must_use]
pub fn intersect<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    retain(left, right, Retain::new(false, true, false))
}

/// Returns the sorted, deduplicated values of `left` that are not in
/// `right`.
///
/// This is not symmetric; see [`symmetric_difference`].
#[must_use]
pub fn difference<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    retain(left, right, Retain::new(true, false, false))
}

/// Returns the sorted, deduplicated values that are in exactly one operand.
///
/// # Examples
///
/// ```rust
/// use ordseq::set::symmetric_difference;
///
/// assert_eq!(symmetric_difference(&[1, 2, 3], &[2, 3, 4]), vec![1, 4]);
/// ```
#[must_use]
pub fn symmetric_difference<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    retain(left, right, Retain::new(true, false, true))
}
