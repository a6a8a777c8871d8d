//! Networking: REST client for the auth and document-collection APIs.
//!
//! `api` handles the HTTP calls; `types` defines the session DTOs shared
//! with the server. Entity documents decode through `fleet` at this
//! boundary so malformed documents never reach the store.

pub mod api;
pub mod types;
