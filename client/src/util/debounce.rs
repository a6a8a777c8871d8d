//! Cancellable debounce timer for search input.
//!
//! DESIGN
//! ======
//! Filtering on every keystroke is wasteful, so the search box waits for
//! input quiescence before publishing. Rather than juggling opaque timer
//! handles, each keystroke arms a new generation token; when a sleep
//! completes it only publishes if its token is still the latest. Stale
//! timers fall through silently.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Input quiescence window before a search term takes effect.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Generation counter deciding which of several pending timers may fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Invalidate all pending timers and return the token for a new one.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether the timer holding `token` is still the latest one armed.
    #[must_use]
    pub fn is_current(self, token: u64) -> bool {
        self.generation == token
    }
}
