//! Error types for ordered sequences.
//!
//! Searching for a missing element or subtracting everything away are normal
//! outcomes and are reported through `Option` and empty vectors. The only
//! recoverable failure is claiming sortedness for data that is not sorted.

use thiserror::Error;

/// Errors that can occur when building ordered sequences.
///
/// # Examples
///
/// ```rust
/// use ordseq::error::SequenceError;
/// use ordseq::sequence::SortedSequence;
///
/// let result = SortedSequence::try_from(vec![1, 3, 2]);
/// assert_eq!(result.unwrap_err(), SequenceError::Unsorted { position: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The element at `position` is smaller than the element before it.
    #[error("sequence is not sorted: element at position {position} is out of order")]
    Unsorted {
        /// Index of the first element that breaks the non-decreasing order.
        position: usize,
    },
}

impl SequenceError {
    /// Returns the offending position for ordering errors.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Unsorted { position } => position,
        }
    }
}
