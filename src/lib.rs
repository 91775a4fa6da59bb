//! # ordseq
//!
//! Sorting, deduplication, sorted-merge set algebra and search over ordered
//! sequences, with a fluent wrapper for collection pipelines.
//!
//! ## Overview
//!
//! - **Sort/Dedup**: [`sort`](sort::sort), [`uniq`](sort::uniq) and the
//!   linear [`sorted_uniq`](sort::sorted_uniq) fast path
//! - **Search**: linear [`index`](search::index) and binary
//!   [`sorted_index`](search::sorted_index)
//! - **Set Algebra**: [`union`](set::union), [`intersect`](set::intersect) and
//!   [`difference`](set::difference), all driven by one sorted-merge
//!   primitive, [`compare`](set::compare)
//! - **Transforms**: [`map`](transform::map), [`filter`](transform::filter),
//!   [`reduce`](transform::reduce), [`each`](transform::each) with
//!   `(index, element)` callbacks
//! - **Fluent Wrapper**: [`Sequence`](sequence::Sequence) and
//!   [`SortedSequence`](sequence::SortedSequence), which track sortedness in
//!   the type and keep absent sequences distinct from empty ones
//!
//! All operations are pure: inputs are never mutated and every result is a
//! newly allocated value.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the fluent wrappers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let tags = Sequence::from(vec!["rust", "go", "rust", "c"]);
//! let sorted = tags.uniq();
//! assert_eq!(sorted.as_slice(), &["c", "go", "rust"]);
//! assert!(sorted.contains(&"go"));
//!
//! assert_eq!(union(&["b", "a"], &["c", "a"]), vec!["a", "b", "c"]);
//! assert_eq!(difference(&["a", "b", "c"], &["b"]), vec!["a", "c"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the wrappers and the free functions.
///
/// # Usage
///
/// ```rust
/// use ordseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::search::{contains, first, index, last, sorted_contains, sorted_index};
    pub use crate::sequence::{Sequence, SortedSequence};
    pub use crate::set::{
        compare, difference, intersect, sorted_merge, symmetric_difference, union,
        MergeCallbacks, MergeVisitor, Membership,
    };
    pub use crate::sort::{distinct, is_sorted, sort, sort_by, sorted_uniq, uniq};
    pub use crate::transform::{
        add, delete_if, each, filter, map, reduce, subtract, try_each, try_filter, try_map,
        try_reduce,
    };
}

pub mod error;
pub mod extract;
pub mod search;
pub mod sequence;
pub mod set;
pub mod sort;
pub mod transform;
