//! DTOs for the client/server boundary.

use serde::{Deserialize, Serialize};

pub use fleet::{Bike, User};

/// The authenticated identity as returned by `/api/auth/me` and login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Natural key of the user document.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Locally cached role flag; the server re-checks on every mutation.
    pub is_manager: bool,
}
