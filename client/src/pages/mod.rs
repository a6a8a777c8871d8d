//! Page modules for route-level screens.
//!
//! Each page owns route-scoped orchestration (auth redirects, store resets)
//! and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
