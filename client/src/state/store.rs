//! The per-session entity store.
//!
//! DESIGN
//! ======
//! Each admin panel bulk-loads its collection once, then reads and patches
//! the shared snapshot held here. The store is created by the root component
//! and passed down via context as a reactive signal: every write publishes,
//! every subscribed view re-renders. Only two things write to it — the
//! initial bulk fetch and mutation handlers mirroring a confirmed remote
//! write.
//!
//! Loads carry a generation token so a stale in-flight fetch that resolves
//! after a newer one started is discarded instead of clobbering the store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use fleet::{Bike, Entity, Roster, User};

/// Lifecycle of one collection's bulk load.
///
/// `Failed` renders as a visible error panel with a retry action — a failed
/// load must never leave a perpetual spinner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet.
    #[default]
    Idle,
    /// Bulk fetch in flight.
    Loading,
    /// Snapshot populated.
    Loaded,
    /// Bulk fetch failed with a user-visible message.
    Failed(String),
}

/// One collection's snapshot plus its load lifecycle.
#[derive(Clone, Debug)]
pub struct CollectionState<T> {
    pub roster: Roster<T>,
    pub load: LoadState,
    seq: u64,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            roster: Roster::default(),
            load: LoadState::default(),
            seq: 0,
        }
    }
}

impl<T: Entity> CollectionState<T> {
    /// Begin (or retry) a bulk load, invalidating any in-flight fetch.
    /// Returns the token the finishing fetch must present.
    pub fn begin_load(&mut self) -> u64 {
        self.seq += 1;
        self.load = LoadState::Loading;
        self.seq
    }

    /// Apply a finished bulk load. Returns `false` when the token is stale
    /// (a newer load started) and the result was discarded.
    pub fn finish_load(&mut self, token: u64, result: Result<Vec<T>, String>) -> bool {
        if token != self.seq {
            return false;
        }
        match result {
            Ok(items) => {
                self.roster.replace_all(items);
                self.load = LoadState::Loaded;
            }
            Err(message) => self.load = LoadState::Failed(message),
        }
        true
    }

    /// Whether a load should be kicked off on mount.
    #[must_use]
    pub fn needs_load(&self) -> bool {
        self.load == LoadState::Idle
    }
}

/// The whole per-session cache: one snapshot per collection.
#[derive(Clone, Debug, Default)]
pub struct StoreState {
    pub users: CollectionState<User>,
    pub bikes: CollectionState<Bike>,
}

// Reactive load helpers. Fetches run on the client only; on the server the
// panels render their loading state and hydration takes over.

use leptos::prelude::*;

/// Bulk-load the users collection into the store.
pub fn load_users(store: RwSignal<StoreState>) {
    let token = store.try_update(|s| s.users.begin_load()).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_users().await.map_err(|e| e.to_string());
            store.update(|s| {
                s.users.finish_load(token, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Bulk-load the bikes collection into the store.
pub fn load_bikes(store: RwSignal<StoreState>) {
    let token = store.try_update(|s| s.bikes.begin_load()).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_bikes().await.map_err(|e| e.to_string());
            store.update(|s| {
                s.bikes.finish_load(token, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
