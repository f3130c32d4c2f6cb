// ============================================================================
// immutable-collection - Slot Descriptors
//
// A SlotSpec states what a slot holds and which operations it permits.
// Every slot a collection owns is described by build_immutable_slot: never
// writable, never configurable, enumerable only when asked.
// ============================================================================

use crate::core::constants::*;

// =============================================================================
// SLOT SPEC
// =============================================================================

/// Specification of one slot: its value plus attribute flags.
///
/// # Example
///
/// ```
/// use immutable_collection::build_immutable_slot;
///
/// let spec = build_immutable_slot("a", true);
/// assert_eq!(*spec.value(), "a");
/// assert!(!spec.is_writable());
/// assert!(!spec.is_configurable());
/// assert!(spec.is_enumerable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotSpec<T> {
    value: T,
    flags: u8,
}

impl<T> SlotSpec<T> {
    /// Create a spec with explicit attribute flags.
    ///
    /// Bits outside [`ATTRIBUTE_MASK`] are dropped.
    pub fn with_flags(value: T, flags: u8) -> Self {
        Self {
            value,
            flags: flags & ATTRIBUTE_MASK,
        }
    }

    /// Non-writable, non-configurable, non-enumerable slot.
    pub fn immutable(value: T) -> Self {
        build_immutable_slot(value, false)
    }

    /// The value the slot holds.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the spec, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The raw attribute bits.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn is_writable(&self) -> bool {
        self.flags & WRITABLE != 0
    }

    pub fn is_enumerable(&self) -> bool {
        self.flags & ENUMERABLE != 0
    }

    pub fn is_configurable(&self) -> bool {
        self.flags & CONFIGURABLE != 0
    }

    /// Same attributes, different value.
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> SlotSpec<U> {
        SlotSpec {
            value: f(self.value),
            flags: self.flags,
        }
    }

    /// Borrow the value, keeping the attributes.
    pub fn borrowed(&self) -> SlotSpec<&T> {
        SlotSpec {
            value: &self.value,
            flags: self.flags,
        }
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Describe a slot that can never be reassigned, redefined or deleted.
///
/// `enumerable` controls whether the slot shows up when enumerating own
/// enumerable keys. Element slots pass `true`; `length` and the iteration
/// capability pass `false`.
pub fn build_immutable_slot<T>(value: T, enumerable: bool) -> SlotSpec<T> {
    let flags = if enumerable { ENUMERABLE } else { 0 };
    SlotSpec { value, flags }
}
