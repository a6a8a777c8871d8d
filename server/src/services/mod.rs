//! Service layer: auth, sessions, and the document store.
//!
//! Services own the SQL and the error taxonomy; route handlers translate
//! service errors into HTTP statuses.

pub mod auth;
pub mod document;
pub mod session;
