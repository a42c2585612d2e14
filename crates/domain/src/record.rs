//! The persisted-record abstraction shared by every service.

use std::fmt;
use std::hash::Hash;

/// A persisted entity with a store-assigned numeric identifier.
///
/// `id()` is `None` only for a record that has never been saved. Stores call
/// [`Record::with_id`] exactly once, on the first save; nothing else changes
/// the identifier afterwards.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    /// Typed identifier of this record kind.
    type Id: Copy
        + Eq
        + Hash
        + fmt::Debug
        + fmt::Display
        + From<i64>
        + Into<i64>
        + Send
        + Sync
        + 'static;

    /// Human-readable record kind, used in error messages and logs.
    const KIND: &'static str;

    fn id(&self) -> Option<Self::Id>;

    /// Return this record carrying the given identifier.
    #[must_use]
    fn with_id(self, id: Self::Id) -> Self;
}
