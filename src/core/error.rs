// ============================================================================
// immutable-collection - Errors
// ============================================================================

use crate::primitives::key::PropertyKey;

/// Errors raised while building a collection or when a caller tries to
/// change one after it has been sealed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// The input reported a length past [`MAX_LENGTH`](crate::constants::MAX_LENGTH).
    #[error("invalid argument: length {length} exceeds maximum of {max}")]
    LengthOutOfRange { length: usize, max: usize },

    /// The input reported `length` but could not produce `items[index]`.
    #[error("invalid argument: index {index} is missing from input of length {length}")]
    MissingIndex { index: usize, length: usize },

    /// Assignment to a read-only slot.
    #[error("cannot assign to read-only slot {key}")]
    NotWritable { key: PropertyKey },

    /// A new slot was requested on a sealed collection.
    #[error("cannot add slot {key}: collection is not extensible")]
    NotExtensible { key: PropertyKey },

    /// Redefinition or deletion of a non-configurable slot.
    #[error("cannot redefine or delete non-configurable slot {key}")]
    NotConfigurable { key: PropertyKey },
}

impl CollectionError {
    /// True for errors caused by a malformed input (the `InvalidArgument` kind).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::LengthOutOfRange { .. } | Self::MissingIndex { .. }
        )
    }

    /// True for rejected mutations of a sealed collection.
    pub fn is_seal_violation(&self) -> bool {
        matches!(
            self,
            Self::NotWritable { .. } | Self::NotExtensible { .. } | Self::NotConfigurable { .. }
        )
    }
}
