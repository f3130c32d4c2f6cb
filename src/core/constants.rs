// ============================================================================
// immutable-collection - Constants
// Slot attribute flags and construction limits
// ============================================================================

// =============================================================================
// SLOT ATTRIBUTE FLAGS
// =============================================================================

/// Slot value may be reassigned
pub const WRITABLE: u8 = 1 << 0;

/// Slot is visible to own-enumerable-key enumeration
pub const ENUMERABLE: u8 = 1 << 1;

/// Slot may be redefined, reconfigured or deleted
pub const CONFIGURABLE: u8 = 1 << 2;

/// Mask of every attribute bit
pub const ATTRIBUTE_MASK: u8 = WRITABLE | ENUMERABLE | CONFIGURABLE;

// =============================================================================
// LIMITS
// =============================================================================

/// Largest length an indexable input may report (the host array-length ceiling).
pub const MAX_LENGTH: usize = u32::MAX as usize;
