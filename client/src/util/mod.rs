//! Utility helpers shared across client UI modules.
//!
//! Browser/environment concerns (timers, media queries, localStorage) are
//! isolated here so page and component logic stays testable.

pub mod dark_mode;
pub mod debounce;
pub mod viewport;
