// ============================================================================
// immutable-collection - Sealed, Read-Only Array-Like Collections
// ============================================================================
//
// Build a collection once from any indexable input; from then on its slots,
// its length and its iteration capability are fixed. Elements are held
// shallowly: the binding from index to value is frozen, the values are not.
// ============================================================================

#[macro_use]
mod macros;

pub mod collections;
pub mod core;
pub mod primitives;

// Re-export core items at crate root for ergonomic access
pub use crate::core::constants;
pub use crate::core::error::CollectionError;
pub use crate::core::types::Indexable;

// Re-export primitives at crate root
pub use crate::primitives::descriptor::{build_immutable_slot, SlotSpec};
pub use crate::primitives::key::PropertyKey;

// Re-export collections
pub use crate::collections::{
    create_immutable_collection, map, try_map, ImmutableCollection, IntoIter, Iter,
    IterCapability, SlotValue,
};

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Concrete scenarios
    // =========================================================================

    #[test]
    fn scenario_letters() {
        let c = create_immutable_collection(&['a', 'b', 'c']).unwrap();

        assert_eq!(c.len(), 3);
        assert_eq!(c[0], 'a');
        assert_eq!(c[2], 'c');
        assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn scenario_scaled_map() {
        let c = map(&[1, 2, 3], |x, i| x * 10 + i as i32).unwrap();

        assert_eq!(c.len(), 3);
        assert_eq!(c, [10, 21, 32]);
    }

    #[test]
    fn scenario_empty_map() {
        let empty: [i32; 0] = [];
        let c = map(&empty, |x, _| x.to_string()).unwrap();

        assert_eq!(c.len(), 0);
    }

    // =========================================================================
    // Shape
    // =========================================================================

    #[test]
    fn slot_descriptors_follow_builder() {
        let c = immutable![5, 6];

        for key in c.own_keys() {
            let slot = c.get_own_slot(key).unwrap();
            assert!(!slot.is_writable());
            assert!(!slot.is_configurable());
            assert_eq!(slot.is_enumerable(), key.as_index().is_some());
        }
    }

    #[test]
    fn mutation_attempts_leave_shape_unchanged() {
        let c = immutable![1, 2, 3];
        let keys_before = c.own_keys();

        let _ = c.assign(PropertyKey::Index(1), 99);
        let _ = c.assign(PropertyKey::Index(c.len()), 4);
        let _ = c.delete(PropertyKey::Index(0));
        let _ = c.delete(PropertyKey::Length);

        assert_eq!(c.own_keys(), keys_before);
        assert_eq!(c, [1, 2, 3]);
    }

    #[test]
    fn length_slot_matches_element_count() {
        let c: ImmutableCollection<u8> = (0..10).collect();
        let length = c.get_own_slot(PropertyKey::Length).unwrap();

        assert_eq!(*length.value(), SlotValue::Length(10));
        assert_eq!(c.own_enumerable_keys().count(), 10);
    }
}
