//! Extraction and conversion helpers.
//!
//! [`keys`] and [`values`] work with any map whose shared reference iterates
//! over `(&K, &V)` pairs, such as `HashMap` and `BTreeMap`. The result follows
//! the map's own iteration order, which is unspecified for hash maps; sort it
//! when a stable order is needed.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use ordseq::extract::{keys, values};
//! use ordseq::sort::sort;
//!
//! let ages = HashMap::from([("alice", 31), ("bob", 27)]);
//! assert_eq!(sort(&keys(&ages)), vec!["alice", "bob"]);
//! assert_eq!(sort(&values(&ages)), vec![27, 31]);
//! ```

/// Returns clones of the keys of `map`.
#[must_use]
pub fn keys<'a, M, K, V>(map: &'a M) -> Vec<K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: 'a,
{
    map.into_iter().map(|(key, _)| key.clone()).collect()
}

/// Returns clones of the values of `map`.
#[must_use]
pub fn values<'a, M, K, V>(map: &'a M) -> Vec<V>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: Clone + 'a,
{
    map.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Converts any string-like elements into owned `String`s.
///
/// # Examples
///
/// ```rust
/// use ordseq::extract::to_strings;
///
/// struct Tag(&'static str);
///
/// impl AsRef<str> for Tag {
///     fn as_ref(&self) -> &str {
///         self.0
///     }
/// }
///
/// assert_eq!(to_strings([Tag("A"), Tag("B")]), vec!["A", "B"]);
/// ```
#[must_use]
pub fn to_strings<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_owned())
        .collect()
}
