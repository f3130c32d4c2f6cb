// ============================================================================
// immutable-collection - Map Operation
//
// Transform every element of an indexable input, eagerly and in ascending
// index order, then seal the results. The transform runs to completion (or
// fails) before any collection exists, so partial results are never
// observable.
// ============================================================================

use crate::collections::immutable::{checked_length, ImmutableCollection};
use crate::core::error::CollectionError;
use crate::core::types::Indexable;

/// Map an indexable input into a new sealed collection.
///
/// `transform` receives each element with its zero-based index. The output
/// has the same length as the input and slot `i` holds
/// `transform(&items[i], i)`.
///
/// # Errors
///
/// Fails with an `InvalidArgument`-kind [`CollectionError`] when `items` is
/// malformed (see [`create_immutable_collection`]). A panicking `transform`
/// unwinds through `map` without producing a collection.
///
/// [`create_immutable_collection`]: crate::create_immutable_collection
///
/// # Example
///
/// ```
/// use immutable_collection::map;
///
/// let scaled = map(&[1, 2, 3], |x, i| x * 10 + i as i32).unwrap();
/// assert_eq!(scaled, [10, 21, 32]);
/// ```
pub fn map<I, U, F>(items: &I, mut transform: F) -> Result<ImmutableCollection<U>, CollectionError>
where
    I: Indexable + ?Sized,
    F: FnMut(&I::Item, usize) -> U,
{
    try_map(items, |item, index| {
        Ok::<_, CollectionError>(transform(item, index))
    })
}

/// Map an indexable input with a fallible transform.
///
/// The first error returned by `transform` is handed back unchanged; later
/// indices are not visited and no collection is built. Malformed input is
/// reported through `E`'s `From<CollectionError>` conversion.
///
/// # Example
///
/// ```
/// use immutable_collection::{try_map, CollectionError};
///
/// #[derive(Debug, PartialEq)]
/// enum ParseError {
///     Bad(String),
///     Input(CollectionError),
/// }
///
/// impl From<CollectionError> for ParseError {
///     fn from(err: CollectionError) -> Self {
///         ParseError::Input(err)
///     }
/// }
///
/// let parse = |s: &&str, _: usize| s.parse::<u8>().map_err(|_| ParseError::Bad(s.to_string()));
///
/// let ok = try_map(&["1", "2"], parse).unwrap();
/// assert_eq!(ok, [1, 2]);
///
/// let err = try_map(&["1", "x", "3"], parse).unwrap_err();
/// assert_eq!(err, ParseError::Bad("x".to_string()));
/// ```
pub fn try_map<I, U, E, F>(items: &I, mut transform: F) -> Result<ImmutableCollection<U>, E>
where
    I: Indexable + ?Sized,
    F: FnMut(&I::Item, usize) -> Result<U, E>,
    E: From<CollectionError>,
{
    let length = checked_length(items)?;
    let mut mapped = Vec::new();
    for index in 0..length {
        let item = items
            .at(index)
            .ok_or(CollectionError::MissingIndex { index, length })?;
        mapped.push(transform(item, index)?);
    }
    Ok(ImmutableCollection::seal(mapped))
}
