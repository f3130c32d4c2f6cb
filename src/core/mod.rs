// ============================================================================
// immutable-collection - Core Module
// Constants, errors and the indexable input protocol
// ============================================================================

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use error::CollectionError;
pub use types::Indexable;
