// ============================================================================
// immutable-collection - ImmutableCollection
//
// A sealed, array-like container. The slot set (indices, `length`, and the
// iteration capability) is fixed the moment the factory returns: there is no
// mutable window, no IndexMut, no DerefMut. Elements are held as given, so
// anything with its own interior mutability stays mutable through its own
// handle; only the binding from index to value is frozen.
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Index};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collections::iter::{IntoIter, Iter, IterCapability};
use crate::core::constants::MAX_LENGTH;
use crate::core::error::CollectionError;
use crate::core::types::{Indexable, Shared};

// =============================================================================
// IMMUTABLE COLLECTION
// =============================================================================

/// A read-only, integer-indexed collection whose shape never changes.
///
/// Cloning is cheap: clones share the same sealed storage.
///
/// # Example
///
/// ```
/// use immutable_collection::create_immutable_collection;
///
/// let letters = create_immutable_collection(&['a', 'b', 'c']).unwrap();
///
/// assert_eq!(letters.len(), 3);
/// assert_eq!(letters[0], 'a');
/// assert_eq!(letters[2], 'c');
///
/// // Every call to iter() starts a fresh traversal
/// assert_eq!(letters.iter().collect::<String>(), "abc");
/// assert_eq!(letters.iter().collect::<String>(), "abc");
/// ```
///
/// Slots cannot be written through the collection:
///
/// ```compile_fail
/// use immutable_collection::immutable;
///
/// let mut letters = immutable!['a', 'b', 'c'];
/// letters[0] = 'z';
/// ```
pub struct ImmutableCollection<T> {
    /// Sealed element slots; the slice length is the `length` slot
    slots: Shared<T>,
}

impl<T> ImmutableCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::seal(Vec::new())
    }

    /// Seal an owned sequence. Every construction path ends here.
    pub(crate) fn seal(values: Vec<T>) -> Self {
        Self {
            slots: Shared::from(values),
        }
    }

    // =========================================================================
    // LENGTH
    // =========================================================================

    /// Number of element slots, fixed at construction.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the collection has no element slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // =========================================================================
    // GET
    // =========================================================================

    /// The element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// The element slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// True if both handles share the same sealed storage.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Shared::ptr_eq(&this.slots, &other.slots)
    }

    // =========================================================================
    // ITERATION
    // =========================================================================

    /// The iteration capability: a handle that starts a new traversal each
    /// time it is invoked.
    pub fn iterator(&self) -> IterCapability<'_, T> {
        IterCapability::new(self)
    }

    /// A fresh, independent traversal over the element slots in ascending
    /// index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iterator().invoke()
    }

    // =========================================================================
    // MAP
    // =========================================================================

    /// Build a new collection from `f(element, index)` for every slot.
    ///
    /// Infallible: a sealed collection is always well-formed input.
    pub fn map<U, F>(&self, mut f: F) -> ImmutableCollection<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        let mapped = self
            .iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect();
        ImmutableCollection::seal(mapped)
    }
}

// =============================================================================
// FACTORY
// =============================================================================

/// Snapshot the reported length of an indexable input, rejecting lengths no
/// collection may hold.
pub(crate) fn checked_length<I>(items: &I) -> Result<usize, CollectionError>
where
    I: Indexable + ?Sized,
{
    let length = items.length();
    if length > MAX_LENGTH {
        return Err(CollectionError::LengthOutOfRange {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(length)
}

/// Build a sealed collection from any indexable input.
///
/// The length is read once; later changes to `items` are never reflected.
/// Elements are cloned into their slots, so `Rc`-like elements keep their
/// identity.
///
/// # Errors
///
/// - [`CollectionError::LengthOutOfRange`] if the input reports more than
///   [`MAX_LENGTH`] elements.
/// - [`CollectionError::MissingIndex`] if the input cannot produce an element
///   below its reported length.
///
/// No collection is produced on error.
///
/// # Example
///
/// ```
/// use immutable_collection::create_immutable_collection;
///
/// let mut source = vec![1, 2, 3];
/// let frozen = create_immutable_collection(&source).unwrap();
///
/// source.push(4);
/// source[0] = 100;
///
/// assert_eq!(frozen, [1, 2, 3]);
/// ```
pub fn create_immutable_collection<I>(
    items: &I,
) -> Result<ImmutableCollection<I::Item>, CollectionError>
where
    I: Indexable + ?Sized,
    I::Item: Clone,
{
    let length = checked_length(items)?;
    let values = (0..length)
        .map(|index| {
            items
                .at(index)
                .cloned()
                .ok_or(CollectionError::MissingIndex { index, length })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ImmutableCollection::seal(values))
}

// =============================================================================
// TRAIT IMPLS
// =============================================================================

impl<T> Default for ImmutableCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ImmutableCollection<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Shared::clone(&self.slots),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deref for ImmutableCollection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.slots
    }
}

impl<T> AsRef<[T]> for ImmutableCollection<T> {
    fn as_ref(&self) -> &[T] {
        &self.slots
    }
}

impl<T> Index<usize> for ImmutableCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T: PartialEq> PartialEq for ImmutableCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots[..] == other.slots[..]
    }
}

impl<T: Eq> Eq for ImmutableCollection<T> {}

impl<T: PartialEq> PartialEq<[T]> for ImmutableCollection<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.slots[..] == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ImmutableCollection<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.slots[..] == other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ImmutableCollection<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.slots[..] == other[..]
    }
}

impl<T: Hash> Hash for ImmutableCollection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots[..].hash(state);
    }
}

impl<T> Indexable for ImmutableCollection<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<T> From<Vec<T>> for ImmutableCollection<T> {
    fn from(values: Vec<T>) -> Self {
        Self::seal(values)
    }
}

impl<T, const N: usize> From<[T; N]> for ImmutableCollection<T> {
    fn from(values: [T; N]) -> Self {
        Self::seal(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for ImmutableCollection<T> {
    fn from(values: &[T]) -> Self {
        Self::seal(values.to_vec())
    }
}

impl<T> FromIterator<T> for ImmutableCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::seal(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ImmutableCollection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for ImmutableCollection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

// =============================================================================
// SERDE
// =============================================================================
//
// Only the enumerable slots are serialized, so a collection round-trips as a
// plain sequence and `length` / the iteration capability never appear.
// =============================================================================

impl<T: Serialize> Serialize for ImmutableCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmutableCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::seal)
    }
}

// =============================================================================
// TESTS
// =============================================================================
