// ============================================================================
// immutable-collection - Slot Reflection
//
// The object-level view of a collection: which keys it owns, how each slot
// is described, and what happens when someone tries to change one. Every
// mutation attempt is rejected and leaves the collection untouched; callers
// that want silent semantics simply discard the Result.
// ============================================================================

use std::fmt;

use crate::collections::immutable::ImmutableCollection;
use crate::collections::iter::IterCapability;
use crate::core::constants::ENUMERABLE;
use crate::core::error::CollectionError;
use crate::primitives::descriptor::{build_immutable_slot, SlotSpec};
use crate::primitives::key::PropertyKey;

// =============================================================================
// SLOT VALUE
// =============================================================================

/// What a slot holds, as seen through reflection.
pub enum SlotValue<'a, T> {
    /// An element slot
    Element(&'a T),
    /// The `length` slot
    Length(usize),
    /// The iteration capability
    Iterator(IterCapability<'a, T>),
}

impl<T> Clone for SlotValue<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotValue<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for SlotValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(value) => f.debug_tuple("Element").field(value).finish(),
            Self::Length(length) => f.debug_tuple("Length").field(length).finish(),
            Self::Iterator(capability) => f.debug_tuple("Iterator").field(capability).finish(),
        }
    }
}

impl<T: PartialEq> PartialEq for SlotValue<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => a == b,
            (Self::Length(a), Self::Length(b)) => a == b,
            (Self::Iterator(a), Self::Iterator(b)) => a == b,
            _ => false,
        }
    }
}

// =============================================================================
// REFLECTION
// =============================================================================

impl<T> ImmutableCollection<T> {
    /// Every own key: indices ascending, then `length`, then the iteration
    /// capability.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let mut keys: Vec<PropertyKey> = self.own_enumerable_keys().collect();
        keys.push(PropertyKey::Length);
        keys.push(PropertyKey::Iterator);
        keys
    }

    /// The keys visible to enumeration: exactly the element indices, ascending.
    ///
    /// ```
    /// use immutable_collection::{immutable, PropertyKey};
    ///
    /// let c = immutable!["x", "y"];
    /// let keys: Vec<_> = c.own_enumerable_keys().collect();
    /// assert_eq!(keys, vec![PropertyKey::Index(0), PropertyKey::Index(1)]);
    /// ```
    pub fn own_enumerable_keys(&self) -> impl Iterator<Item = PropertyKey> + use<T> {
        (0..self.len()).map(PropertyKey::Index)
    }

    /// Does the collection own a slot under `key`?
    pub fn has_own(&self, key: PropertyKey) -> bool {
        match key {
            PropertyKey::Index(index) => index < self.len(),
            PropertyKey::Length | PropertyKey::Iterator => true,
        }
    }

    /// Describe the slot under `key`, or `None` if there is no such slot.
    pub fn get_own_slot(&self, key: PropertyKey) -> Option<SlotSpec<SlotValue<'_, T>>> {
        match key {
            PropertyKey::Index(index) => self
                .get(index)
                .map(|value| build_immutable_slot(SlotValue::Element(value), true)),
            PropertyKey::Length => Some(build_immutable_slot(SlotValue::Length(self.len()), false)),
            PropertyKey::Iterator => Some(build_immutable_slot(
                SlotValue::Iterator(self.iterator()),
                false,
            )),
        }
    }

    /// Always true: no slot can be added, removed, reconfigured or reassigned.
    pub fn is_frozen(&self) -> bool {
        true
    }

    /// Always true: no slot can be added, removed or reconfigured.
    pub fn is_sealed(&self) -> bool {
        true
    }

    /// Always false: the slot set is closed.
    pub fn is_extensible(&self) -> bool {
        false
    }

    // =========================================================================
    // REJECTED MUTATIONS
    // =========================================================================

    /// Attempt to assign `value` to the slot under `key`.
    ///
    /// Existing slots are read-only and missing slots cannot be added, so
    /// this always fails and the collection is unchanged.
    ///
    /// ```
    /// use immutable_collection::{immutable, CollectionError, PropertyKey};
    ///
    /// let c = immutable![1, 2, 3];
    /// assert_eq!(
    ///     c.assign(PropertyKey::Index(0), 10),
    ///     Err(CollectionError::NotWritable { key: PropertyKey::Index(0) })
    /// );
    /// assert_eq!(c[0], 1);
    /// ```
    pub fn assign(&self, key: PropertyKey, _value: T) -> Result<(), CollectionError> {
        if self.has_own(key) {
            Err(CollectionError::NotWritable { key })
        } else {
            Err(CollectionError::NotExtensible { key })
        }
    }

    /// Attempt to delete the slot under `key`.
    ///
    /// Deleting a key the collection does not own trivially succeeds;
    /// deleting an owned slot fails because no slot is configurable.
    pub fn delete(&self, key: PropertyKey) -> Result<(), CollectionError> {
        if self.has_own(key) {
            Err(CollectionError::NotConfigurable { key })
        } else {
            Ok(())
        }
    }
}

impl<T: PartialEq> ImmutableCollection<T> {
    /// Attempt to (re)define the element slot under `key`.
    ///
    /// Succeeds without effect only when `spec` is identical to the slot
    /// already there (same value, enumerable, not writable, not
    /// configurable). Anything else is rejected.
    pub fn define_slot(
        &self,
        key: PropertyKey,
        spec: SlotSpec<T>,
    ) -> Result<(), CollectionError> {
        match key {
            PropertyKey::Index(index) => match self.get(index) {
                Some(current) if spec.flags() == ENUMERABLE && spec.value() == current => Ok(()),
                Some(_) => Err(CollectionError::NotConfigurable { key }),
                None => Err(CollectionError::NotExtensible { key }),
            },
            PropertyKey::Length | PropertyKey::Iterator => {
                Err(CollectionError::NotConfigurable { key })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::WRITABLE;

    fn abc() -> ImmutableCollection<char> {
        ImmutableCollection::from(vec!['a', 'b', 'c'])
    }

    #[test]
    fn own_keys_order() {
        assert_eq!(
            abc().own_keys(),
            vec![
                PropertyKey::Index(0),
                PropertyKey::Index(1),
                PropertyKey::Index(2),
                PropertyKey::Length,
                PropertyKey::Iterator,
            ]
        );
    }

    #[test]
    fn enumerable_keys_exclude_metadata() {
        let c = abc();
        let keys: Vec<_> = c.own_enumerable_keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&PropertyKey::Length));
        assert!(!keys.contains(&PropertyKey::Iterator));

        let empty: ImmutableCollection<char> = ImmutableCollection::new();
        assert_eq!(empty.own_enumerable_keys().count(), 0);
        assert_eq!(empty.own_keys(), vec![PropertyKey::Length, PropertyKey::Iterator]);
    }

    #[test]
    fn element_slots_are_enumerable_and_locked() {
        let c = abc();
        let slot = c.get_own_slot(PropertyKey::Index(1)).unwrap();
        assert_eq!(*slot.value(), SlotValue::Element(&'b'));
        assert!(slot.is_enumerable());
        assert!(!slot.is_writable());
        assert!(!slot.is_configurable());
        assert!(c.get_own_slot(PropertyKey::Index(3)).is_none());
    }

    #[test]
    fn metadata_slots_are_hidden_and_locked() {
        let c = abc();

        let length = c.get_own_slot(PropertyKey::Length).unwrap();
        assert_eq!(*length.value(), SlotValue::Length(3));
        assert!(!length.is_enumerable());
        assert!(!length.is_writable());

        let iterator = c.get_own_slot(PropertyKey::Iterator).unwrap();
        assert!(!iterator.is_enumerable());
        assert!(!iterator.is_configurable());
        match iterator.into_value() {
            SlotValue::Iterator(capability) => {
                assert_eq!(capability.invoke().collect::<String>(), "abc");
            }
            other => panic!("expected iteration capability, got {other:?}"),
        }
    }

    #[test]
    fn assign_never_changes_slots() {
        let c = abc();
        assert!(matches!(c.assign(PropertyKey::Index(0), 'z'), Err(CollectionError::NotWritable { .. })));
        assert!(matches!(
            c.assign(PropertyKey::Length, 'z'),
            Err(CollectionError::NotWritable { .. })
        ));
        assert_eq!(
            c.assign(PropertyKey::Index(3), 'd'),
            Err(CollectionError::NotExtensible {
                key: PropertyKey::Index(3)
            })
        );
        assert_eq!(c, ['a', 'b', 'c']);
        assert_eq!(c.own_keys().len(), 5);
    }

    #[test]
    fn delete_rejects_owned_and_ignores_missing() {
        let c = abc();
        assert_eq!(
            c.delete(PropertyKey::Index(2)),
            Err(CollectionError::NotConfigurable {
                key: PropertyKey::Index(2)
            })
        );
        assert!(c.delete(PropertyKey::Iterator).is_err());
        assert_eq!(c.delete(PropertyKey::Index(10)), Ok(()));
        assert_eq!(c.len(), 3);
        assert!(c.has_own(PropertyKey::Index(2)));
    }

    #[test]
    fn define_identical_slot_is_a_no_op() {
        let c = abc();
        assert_eq!(c.define_slot(PropertyKey::Index(0), build_immutable_slot('a', true)), Ok(()));
    }

    #[test]
    fn define_different_slot_is_rejected() {
        let c = abc();
        assert!(c.define_slot(PropertyKey::Index(0), build_immutable_slot('z', true)).is_err());
        assert!(c.define_slot(PropertyKey::Index(0), build_immutable_slot('a', false)).is_err());
        assert!(c
            .define_slot(PropertyKey::Index(0), SlotSpec::with_flags('a', ENUMERABLE | WRITABLE))
            .is_err());
        assert_eq!(
            c.define_slot(PropertyKey::Index(5), build_immutable_slot('f', true)),
            Err(CollectionError::NotExtensible {
                key: PropertyKey::Index(5)
            })
        );
        assert!(c
            .define_slot(PropertyKey::Length, SlotSpec::immutable('a'))
            .is_err());
        assert_eq!(c, ['a', 'b', 'c']);
    }

    #[test]
    fn seal_state() {
        let c = abc();
        assert!(c.is_frozen());
        assert!(c.is_sealed());
        assert!(!c.is_extensible());
    }
}
