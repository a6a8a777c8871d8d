//! Shared domain model and list-search-mutate logic for the bike-rental
//! admin application.
//!
//! This crate owns the typed entity records (`User`, `Bike`), the
//! de-duplicated [`Roster`] collection with soft-delete-aware search, and the
//! pure view math (rating histogram, pagination, dashboard summary) used by
//! both the client and the server. It has no I/O: documents come in as
//! `serde_json::Value`, validation happens at that boundary, and everything
//! else is plain data.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`entity`] | The [`Entity`] trait and read-boundary [`DocumentError`] |
//! | [`user`] | `User` record keyed by email |
//! | [`bike`] | `Bike` record keyed by registration ID |
//! | [`roster`] | De-duplicated entity collection with search and patching |
//! | [`rating`] | Fixed five-bucket rating histogram |
//! | [`paging`] | 1-based pagination math for the mobile card list |
//! | [`summary`] | Dashboard aggregate counts |

pub mod bike;
pub mod entity;
pub mod paging;
pub mod rating;
pub mod roster;
pub mod summary;
pub mod user;

pub use bike::Bike;
pub use entity::{DocumentError, Entity};
pub use rating::RatingHistogram;
pub use roster::Roster;
pub use summary::Summary;
pub use user::User;
