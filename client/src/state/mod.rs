//! Shared client state provided through Leptos context.
//!
//! `auth` tracks the current session identity; `store` is the per-session
//! entity cache both admin panels read from and patch after confirmed
//! remote writes.

pub mod auth;
pub mod store;
