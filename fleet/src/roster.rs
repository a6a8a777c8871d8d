//! De-duplicated entity collection with soft-delete-aware search.
//!
//! DESIGN
//! ======
//! The remote store is the source of truth, but round-tripping on every
//! keystroke is wasteful, so screens bulk-load a collection once and filter
//! the snapshot in memory. A [`Roster`] is that snapshot: insertion-ordered,
//! de-duplicated by natural key, and patched locally only after a confirmed
//! remote write.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::entity::Entity;

/// An in-memory snapshot of one remote collection.
#[derive(Clone, Debug)]
pub struct Roster<T> {
    items: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Roster<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entities held, deleted ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the whole snapshot with a fresh bulk-load result.
    ///
    /// Duplicate natural keys collapse to the last occurrence, keeping the
    /// first occurrence's position.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        for item in items {
            self.upsert(item);
        }
    }

    /// Insert a new entity or replace the existing one with the same key.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Look up one entity by natural key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Mark the entity with `key` as soft-deleted.
    ///
    /// Idempotent; returns `false` when the key is unknown.
    pub fn patch_deleted(&mut self, key: &str) -> bool {
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => {
                item.set_deleted(true);
                true
            }
            None => false,
        }
    }

    /// All non-deleted entities in insertion order.
    #[must_use]
    pub fn visible(&self) -> Vec<T> {
        self.items.iter().filter(|item| !item.is_deleted()).cloned().collect()
    }

    /// Non-deleted entities whose searchable fields contain `term`
    /// case-insensitively. An empty or whitespace-only term returns the full
    /// non-deleted set.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<T> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.visible();
        }
        let needle = trimmed.to_lowercase();
        self.items
            .iter()
            .filter(|item| !item.is_deleted() && item.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Full snapshot including deleted entities (chart and summary inputs).
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }
}
