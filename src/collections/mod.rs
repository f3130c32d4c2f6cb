// ============================================================================
// immutable-collection - Collections
// The sealed collection, its iterators, slot reflection and the map operation
// ============================================================================
//
// Construction always funnels through one sealing step:
//
// 1. create_immutable_collection: snapshot any Indexable input (clones)
// 2. map / try_map: transform an Indexable input eagerly, then seal
// 3. From / FromIterator / immutable!: seal an owned sequence directly
// ============================================================================

mod immutable;
mod iter;
mod reflect;
mod transform;

pub use immutable::{create_immutable_collection, ImmutableCollection};
pub use iter::{IntoIter, Iter, IterCapability};
pub use reflect::SlotValue;
pub use transform::{map, try_map};
