// ============================================================================
// immutable-collection - Property Keys
// Names of the slots a collection owns
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// The key of one slot on a collection.
///
/// Variant order matches own-key order: integer indices first (ascending),
/// then `length`, then the iteration capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKey {
    /// Element slot at a zero-based index
    Index(usize),
    /// The `length` slot
    Length,
    /// The iteration capability
    Iterator,
}

impl PropertyKey {
    /// The element index, if this is an element key.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Length | Self::Iterator => None,
        }
    }
}

impl From<usize> for PropertyKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Length => f.write_str("length"),
            Self::Iterator => f.write_str("@@iterator"),
        }
    }
}
