//! Document-collection routes.
//!
//! Reads require any authenticated session; writes require the manager
//! role, matching the admin-only mutation surface of the UI.

#[cfg(test)]
#[path = "collections_test.rs"]
mod tests;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::routes::auth::AuthUser;
use crate::services::document::{self, DocumentError};
use crate::state::AppState;

pub(crate) fn document_error_to_status(err: &DocumentError) -> StatusCode {
    match err {
        DocumentError::UnknownCollection(_) | DocumentError::NotFound { .. } => StatusCode::NOT_FOUND,
        DocumentError::KeyMismatch(_) | DocumentError::NotAnObject => StatusCode::BAD_REQUEST,
        DocumentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn to_status(err: &DocumentError) -> StatusCode {
    if let DocumentError::Database(e) = err {
        tracing::error!(error = %e, "document store error");
    }
    document_error_to_status(err)
}

fn require_manager(auth: &AuthUser) -> Result<(), StatusCode> {
    if auth.user.is_manager {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

/// `GET /api/collections/{collection}` — bulk-read all documents.
pub async fn list_collection(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(collection): Path<String>,
) -> Result<Json<Vec<serde_json::Value>>, StatusCode> {
    let docs = document::list_documents(&state.pool, &collection)
        .await
        .map_err(|e| to_status(&e))?;
    Ok(Json(docs))
}

/// `GET /api/collections/{collection}/{key}` — read one document.
pub async fn get_document(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((collection, key)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let doc = document::get_document(&state.pool, &collection, &key)
        .await
        .map_err(|e| to_status(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(doc))
}

/// `PUT /api/collections/{collection}/{key}` — create or replace one
/// document. Manager only.
pub async fn put_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((collection, key)): Path<(String, String)>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    require_manager(&auth)?;
    document::put_document(&state.pool, &collection, &key, &body)
        .await
        .map_err(|e| to_status(&e))?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// `PATCH /api/collections/{collection}/{key}` — merge a partial field set
/// into one document, returning the merged result. Manager only.
pub async fn patch_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((collection, key)): Path<(String, String)>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    require_manager(&auth)?;
    let merged = document::patch_document(&state.pool, &collection, &key, &body)
        .await
        .map_err(|e| to_status(&e))?;
    Ok(Json(merged))
}
