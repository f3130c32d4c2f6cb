// ============================================================================
// immutable-collection - Primitives Module
// Slot descriptors and the keys they are registered under
// ============================================================================

pub mod descriptor;
pub mod key;

// Re-export for convenience
pub use descriptor::{build_immutable_slot, SlotSpec};
pub use key::PropertyKey;
