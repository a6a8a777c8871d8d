//! REST API helpers for the auth and document-collection endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::ServerSide` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a success value or a typed [`ApiError`]; callers
//! surface failures as visible error states instead of hanging a spinner.
//! Collection reads decode documents through `fleet` here, skipping (and
//! logging) malformed ones so undefined fields never propagate into the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use fleet::{Bike, User};

use super::types::SessionUser;

/// Failure of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Server-provided error message.
    #[error("{0}")]
    Message(String),
    /// The request never completed (network, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-OK status without a parseable error body.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called from server-side rendering where no session exists.
    #[error("not available on server")]
    ServerSide,
}

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(collection: &str) -> String {
    format!("/api/collections/{collection}")
}

#[cfg(any(test, feature = "hydrate"))]
fn document_endpoint(collection: &str, key: &str) -> String {
    format!("/api/collections/{collection}/{key}")
}

/// Decode user documents, returning the valid records and the number of
/// malformed documents skipped.
#[must_use]
pub fn decode_users(docs: &[serde_json::Value]) -> (Vec<User>, usize) {
    let mut users = Vec::with_capacity(docs.len());
    let mut skipped = 0_usize;
    for doc in docs {
        match User::from_document(doc) {
            Ok(user) => users.push(user),
            Err(_) => skipped += 1,
        }
    }
    (users, skipped)
}

/// Decode bike documents, returning the valid records and the number of
/// malformed documents skipped.
#[must_use]
pub fn decode_bikes(docs: &[serde_json::Value]) -> (Vec<Bike>, usize) {
    let mut bikes = Vec::with_capacity(docs.len());
    let mut skipped = 0_usize;
    for doc in docs {
        match Bike::from_document(doc) {
            Ok(bike) => bikes.push(bike),
            Err(_) => skipped += 1,
        }
    }
    (bikes, skipped)
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the server's error message from a non-OK response, falling back
/// to the bare status code.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::Message(body.error),
        Err(_) => ApiError::Status(status),
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's message for rejected logins ("email not found",
/// "user does not exist anymore", bad credentials) or a transport error.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<SessionUser>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::ServerSide)
    }
}

/// Register credentials for a new account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the server's message (e.g. the email is already registered) or a
/// transport error.
pub async fn signup(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::ServerSide)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

// =============================================================================
// COLLECTIONS
// =============================================================================

#[cfg(feature = "hydrate")]
async fn fetch_collection(collection: &str) -> Result<Vec<serde_json::Value>, ApiError> {
    let resp = gloo_net::http::Request::get(&collection_endpoint(collection))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<Vec<serde_json::Value>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Bulk-read and decode the users collection.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or response decoding fails.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let docs = fetch_collection("users").await?;
        let (users, skipped) = decode_users(&docs);
        if skipped > 0 {
            log::warn!("skipped {skipped} malformed user document(s)");
        }
        Ok(users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::ServerSide)
    }
}

/// Bulk-read and decode the bikes collection.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or response decoding fails.
pub async fn fetch_bikes() -> Result<Vec<Bike>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let docs = fetch_collection("bikes").await?;
        let (bikes, skipped) = decode_bikes(&docs);
        if skipped > 0 {
            log::warn!("skipped {skipped} malformed bike document(s)");
        }
        Ok(bikes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::ServerSide)
    }
}

#[cfg(feature = "hydrate")]
async fn put_document(
    collection: &str,
    key: &str,
    doc: &serde_json::Value,
) -> Result<serde_json::Value, ApiError> {
    let resp = gloo_net::http::Request::put(&document_endpoint(collection, key))
        .json(doc)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create or replace one user document, returning the stored record for the
/// local-store upsert.
///
/// # Errors
///
/// Returns an [`ApiError`] when the write is rejected or fails.
pub async fn save_user(user: &User) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let doc = serde_json::to_value(user).map_err(|e| ApiError::Decode(e.to_string()))?;
        let stored = put_document("users", &user.email, &doc).await?;
        User::from_document(&stored).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        Err(ApiError::ServerSide)
    }
}

/// Create or replace one bike document, returning the stored record for the
/// local-store upsert.
///
/// # Errors
///
/// Returns an [`ApiError`] when the write is rejected or fails.
pub async fn save_bike(bike: &Bike) -> Result<Bike, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let doc = serde_json::to_value(bike).map_err(|e| ApiError::Decode(e.to_string()))?;
        let stored = put_document("bikes", &bike.registration_id, &doc).await?;
        Bike::from_document(&stored).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bike;
        Err(ApiError::ServerSide)
    }
}

/// Soft-delete one document via a single-field `PATCH` keyed by the
/// entity's natural key.
///
/// # Errors
///
/// Returns an [`ApiError`] when the patch is rejected or fails.
pub async fn soft_delete(collection: &str, key: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let patch = serde_json::json!({ "isDeleted": true });
        let resp = gloo_net::http::Request::patch(&document_endpoint(collection, key))
            .json(&patch)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (collection, key);
        Err(ApiError::ServerSide)
    }
}
