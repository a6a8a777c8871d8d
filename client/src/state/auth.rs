#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// Whether the signed-in user (if any) may use the admin mutation
    /// surface.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_manager)
    }

    /// Whether `email` belongs to the signed-in user. Used to keep admins
    /// from soft-deleting their own account from the users table.
    #[must_use]
    pub fn is_self(&self, email: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.email == email)
    }
}
