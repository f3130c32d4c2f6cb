// ============================================================================
// immutable-collection - Iteration
//
// The iteration capability is a factory of cursors, not a cursor: every
// invocation hands out fresh traversal state, so independent traversals can
// never observe each other's position. Cursors read back through the
// collection's own sealed slots, never through the original input.
// ============================================================================

use std::fmt;
use std::iter::FusedIterator;

use crate::collections::immutable::ImmutableCollection;

// =============================================================================
// ITERATION CAPABILITY
// =============================================================================

/// The non-enumerable iteration slot of a collection.
///
/// # Example
///
/// ```
/// use immutable_collection::immutable;
///
/// let c = immutable![1, 2, 3];
/// let capability = c.iterator();
///
/// let mut first = capability.invoke();
/// let mut second = capability.invoke();
///
/// assert_eq!(first.next(), Some(&1));
/// assert_eq!(first.next(), Some(&2));
/// // The second traversal starts from index 0 regardless
/// assert_eq!(second.next(), Some(&1));
/// ```
pub struct IterCapability<'a, T> {
    collection: &'a ImmutableCollection<T>,
}

impl<'a, T> IterCapability<'a, T> {
    pub(crate) fn new(collection: &'a ImmutableCollection<T>) -> Self {
        Self { collection }
    }

    /// Start a new traversal from index 0.
    pub fn invoke(&self) -> Iter<'a, T> {
        Iter {
            collection: self.collection,
            front: 0,
            back: self.collection.len(),
        }
    }
}

impl<T> Clone for IterCapability<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IterCapability<'_, T> {}

impl<T> fmt::Debug for IterCapability<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCapability")
            .field("len", &self.collection.len())
            .finish()
    }
}

impl<T> PartialEq for IterCapability<'_, T> {
    /// Two capabilities are equal when they traverse the same sealed storage.
    fn eq(&self, other: &Self) -> bool {
        ImmutableCollection::ptr_eq(self.collection, other.collection)
    }
}

// =============================================================================
// BORROWING CURSOR
// =============================================================================

/// Ascending traversal over a collection's slots.
pub struct Iter<'a, T> {
    collection: &'a ImmutableCollection<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.collection.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.collection.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&&self.collection.as_slice()[self.front..self.back])
            .finish()
    }
}

// =============================================================================
// OWNING CURSOR
// =============================================================================

/// Owning traversal; yields clones because the slots are shared and sealed.
pub struct IntoIter<T> {
    collection: ImmutableCollection<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(collection: ImmutableCollection<T>) -> Self {
        let back = collection.len();
        Self {
            collection,
            front: 0,
            back,
        }
    }
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.collection.get(self.front).cloned();
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.collection.get(self.back).cloned()
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&&self.collection.as_slice()[self.front..self.back])
            .finish()
    }
}
