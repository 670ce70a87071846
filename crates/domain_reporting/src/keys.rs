//! Composite grouping keys for breakdown rows
//!
//! A single generic key type covers every breakdown family: each family
//! documents its component order and builds keys from the relevant item
//! fields. Keys exist only in memory, as map keys during aggregation and as
//! the sort key of emitted rows - they are never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of dimension values identifying one breakdown row
///
/// Equality is structural and ordering is lexicographic over the component
/// strings, so any two aggregation runs over the same input multiset emit
/// rows in the same order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubtotalKey(Vec<String>);

impl SubtotalKey {
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(components.into_iter().map(Into::into).collect())
    }

    pub fn components(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubtotalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}
