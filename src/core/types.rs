// ============================================================================
// immutable-collection - Type Definitions
// The indexable input protocol and the shared storage handle
// ============================================================================

use std::collections::VecDeque;

// =============================================================================
// SHARED STORAGE
// =============================================================================
//
// A sealed collection never mutates its slots, so clones can share one
// allocation. Single-threaded builds use Rc; the `sync` feature swaps in Arc
// so collections of Send + Sync elements can cross threads.
// =============================================================================

#[cfg(not(feature = "sync"))]
pub(crate) type Shared<T> = std::rc::Rc<[T]>;

#[cfg(feature = "sync")]
pub(crate) type Shared<T> = std::sync::Arc<[T]>;

// =============================================================================
// INDEXABLE
// =============================================================================

/// A read-only, finite, integer-indexed input.
///
/// This is the "array-like" protocol the collection factory consumes: a
/// length, plus access to every index below it. Implementations that report
/// a length they cannot back with elements are rejected by the factory.
///
/// # Example
///
/// ```
/// use immutable_collection::{create_immutable_collection, Indexable};
///
/// /// The first `n` square numbers, materialized on demand.
/// struct Squares(Vec<u64>);
///
/// impl Indexable for Squares {
///     type Item = u64;
///
///     fn length(&self) -> usize {
///         self.0.len()
///     }
///
///     fn at(&self, index: usize) -> Option<&u64> {
///         self.0.get(index)
///     }
/// }
///
/// let squares = Squares((1..=4).map(|n| n * n).collect());
/// let frozen = create_immutable_collection(&squares).unwrap();
/// assert_eq!(&*frozen, &[1, 4, 9, 16]);
/// ```
pub trait Indexable {
    /// Element type held at each index
    type Item;

    /// Number of indices the input claims to hold
    fn length(&self) -> usize;

    /// Element at `index`, or `None` if the input cannot produce it
    fn at(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> Indexable for [T] {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    type Item = T;

    fn length(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Indexable for Vec<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Indexable for VecDeque<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_and_vecs_report_their_length() {
        let v = vec![1, 2, 3];
        assert_eq!(v.length(), 3);
        assert_eq!(v.as_slice().length(), 3);
        assert_eq!([0u8; 5].length(), 5);
    }

    #[test]
    fn at_is_none_past_the_end() {
        let v = vec!["a", "b"];
        assert_eq!(v.at(1), Some(&"b"));
        assert_eq!(v.at(2), None);
    }

    #[test]
    fn deque_indexes_from_logical_front() {
        let mut d = VecDeque::new();
        d.push_back(2);
        d.push_front(1);
        assert_eq!(d.length(), 2);
        assert_eq!(d.at(0), Some(&1));
        assert_eq!(d.at(1), Some(&2));
    }
}
