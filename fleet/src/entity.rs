//! The entity abstraction shared by the users and bikes screens.
//!
//! DESIGN
//! ======
//! Both admin screens are the same pattern over a different record type:
//! bulk-load a collection, filter it in memory, patch single documents back.
//! The [`Entity`] trait captures exactly what that pattern needs — a natural
//! key, the soft-delete flag, and a substring match over the record's
//! searchable fields — so [`crate::Roster`] can stay generic.

/// Error rejecting a malformed document at the remote-read boundary.
///
/// The backing store is schemaless; rather than letting missing or
/// out-of-range fields propagate as defaults, decoding fails loudly and the
/// caller decides whether to skip the document or surface the error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    /// The document could not be decoded into the expected record shape.
    #[error("malformed document: {0}")]
    Malformed(String),
    /// The natural key field is present but empty.
    #[error("empty natural key")]
    EmptyKey,
    /// A bike rating outside `[0, 5]` or non-finite.
    #[error("rating {0} outside 0..=5")]
    RatingOutOfRange(f64),
}

/// A record managed by a list-search-mutate screen.
pub trait Entity: Clone {
    /// Name of the remote collection this entity lives in.
    const COLLECTION: &'static str;

    /// The natural key identifying this entity within its collection.
    fn key(&self) -> &str;

    /// Whether the entity has been soft-deleted.
    fn is_deleted(&self) -> bool;

    /// Set the soft-delete flag in place.
    fn set_deleted(&mut self, deleted: bool);

    /// Case-insensitive substring match over the entity's searchable fields.
    ///
    /// `needle` must already be lowercased; [`crate::Roster::search`] does
    /// this once per query instead of once per row.
    fn matches(&self, needle: &str) -> bool;
}

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
