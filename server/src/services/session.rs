//! Cookie-session management.
//!
//! HTTP auth uses long-lived random tokens stored server-side with an
//! expiry; validation joins the session row against the live user document
//! so a soft-deleted user's existing sessions stop resolving immediately.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use rand::Rng;
use sqlx::PgPool;

use crate::services::auth::bytes_to_hex;

/// Identity attached to a validated session.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Natural key of the user document.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role flag cached by the client after login.
    pub is_manager: bool,
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given account, returning the token.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_session(pool: &PgPool, email: &str) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, email) VALUES ($1, $2)")
        .bind(&token)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
///
/// Resolves through the `users` collection so deleted users are rejected
/// even while their session row still exists.
///
/// # Errors
///
/// Returns a database error if the lookup fails.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query_scalar::<_, serde_json::Value>(
        r"SELECT d.data
          FROM sessions s
          JOIN documents d ON d.collection = 'users' AND d.key = s.email
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.and_then(|doc| session_user_from_document(&doc)))
}

/// Delete a session by token.
///
/// # Errors
///
/// Returns a database error if the delete fails.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Decode a live session identity from a user document; `None` for
/// malformed or soft-deleted documents.
#[must_use]
pub fn session_user_from_document(doc: &serde_json::Value) -> Option<SessionUser> {
    let user = fleet::User::from_document(doc).ok()?;
    if user.is_deleted {
        return None;
    }
    Some(SessionUser {
        email: user.email,
        name: user.name,
        is_manager: user.is_manager,
    })
}
