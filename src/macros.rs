// ============================================================================
// immutable-collection - Macros
// ============================================================================

/// Build a sealed collection with `vec!`-style syntax.
///
/// # Usage
///
/// ```rust
/// use immutable_collection::{immutable, ImmutableCollection};
///
/// let letters = immutable!['a', 'b', 'c'];
/// assert_eq!(letters.len(), 3);
///
/// let zeros = immutable![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let empty: ImmutableCollection<i32> = immutable![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! immutable {
    // Case 1: Empty
    () => {
        $crate::ImmutableCollection::new()
    };
    // Case 2: Repeated element
    ($elem:expr; $n:expr) => {
        $crate::ImmutableCollection::from(::std::vec![$elem; $n])
    };
    // Case 3: Listed elements
    ($($x:expr),+ $(,)?) => {
        $crate::ImmutableCollection::from(::std::vec![$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::ImmutableCollection;

    #[test]
    fn listed_elements() {
        let c = immutable![1, 2, 3,];
        assert_eq!(c, [1, 2, 3]);
    }

    #[test]
    fn repeated_element() {
        let c = immutable!["x"; 2];
        assert_eq!(c, ["x", "x"]);
    }

    #[test]
    fn empty() {
        let c: ImmutableCollection<String> = immutable![];
        assert_eq!(c.len(), 0);
    }
}
