//! Email/password credential service.
//!
//! Passwords are stored as salted SHA-256 digests next to a per-account
//! random salt. Login verifies the credential pair first, then requires a
//! live (non-soft-deleted) user document in the `users` collection, so an
//! account whose document was removed by an admin can no longer sign in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use fleet::Entity as _;
use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};

use crate::services::document;
use crate::services::session::SessionUser;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account already exists for this email")]
    EmailTaken,
    #[error("email not found")]
    UserNotFound,
    #[error("user does not exist anymore")]
    UserDeleted,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl From<document::DocumentError> for AuthError {
    fn from(err: document::DocumentError) -> Self {
        match err {
            document::DocumentError::Database(e) => Self::Db(e),
            _ => Self::UserNotFound,
        }
    }
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Generate a random 16-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Salted password digest.
#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Create credentials for a new account.
///
/// # Errors
///
/// Returns `EmailTaken` when credentials already exist, `InvalidEmail` for a
/// malformed address, or a database error.
pub async fn create_credentials(pool: &PgPool, email: &str, password: &str) -> Result<String, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    let salt = generate_salt();
    let hash = hash_password(&salt, password);

    let result = sqlx::query(
        "INSERT INTO credentials (email, password_hash, salt) VALUES ($1, $2, $3)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(&normalized)
    .bind(hash)
    .bind(salt)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AuthError::EmailTaken);
    }
    Ok(normalized)
}

/// Verify an email/password pair against stored credentials.
///
/// # Errors
///
/// Returns `InvalidCredentials` for unknown emails and wrong passwords alike.
pub async fn verify_credentials(pool: &PgPool, email: &str, password: &str) -> Result<String, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;

    let row = sqlx::query("SELECT password_hash, salt FROM credentials WHERE email = $1")
        .bind(&normalized)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let stored: String = row.get("password_hash");
    let salt: String = row.get("salt");
    if hash_password(&salt, password) != stored {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(normalized)
}

/// Resolve the session identity behind a verified email.
///
/// The user document is the source of truth for name and role; a missing
/// document or a soft-deleted one blocks the login.
pub async fn resolve_session_user(pool: &PgPool, email: &str) -> Result<SessionUser, AuthError> {
    let doc = document::get_document(pool, fleet::User::COLLECTION, email)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let user = fleet::User::from_document(&doc).map_err(|_| AuthError::UserNotFound)?;
    if user.is_deleted {
        return Err(AuthError::UserDeleted);
    }
    Ok(SessionUser {
        email: user.email,
        name: user.name,
        is_manager: user.is_manager,
    })
}

/// Verify a login end to end: credentials, then a live user document.
///
/// # Errors
///
/// `InvalidCredentials`, `UserNotFound`, `UserDeleted`, or a database error.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<SessionUser, AuthError> {
    let normalized = verify_credentials(pool, email, password).await?;
    resolve_session_user(pool, &normalized).await
}

/// Seed the bootstrap manager account from `ADMIN_EMAIL`/`ADMIN_PASSWORD`.
///
/// Returns the seeded email, or `None` when the variables are unset.
///
/// # Errors
///
/// Returns a database error if either upsert fails.
pub async fn seed_admin(pool: &PgPool) -> Result<Option<String>, AuthError> {
    let (Ok(email), Ok(password)) = (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) else {
        return Ok(None);
    };
    let Some(normalized) = normalize_email(&email) else {
        return Err(AuthError::InvalidEmail);
    };

    match create_credentials(pool, &normalized, &password).await {
        Ok(_) | Err(AuthError::EmailTaken) => {}
        Err(e) => return Err(e),
    }

    let doc = serde_json::json!({
        "email": normalized,
        "name": "Administrator",
        "age": 40,
        "isManager": true,
        "isDeleted": false,
    });
    document::put_document(pool, "users", &normalized, &doc)
        .await
        .map_err(|e| match e {
            document::DocumentError::Database(db) => AuthError::Db(db),
            _ => AuthError::InvalidEmail,
        })?;

    Ok(Some(normalized))
}
