//! Document-collection store over a Postgres JSONB table.
//!
//! ARCHITECTURE
//! ============
//! The client sees a managed document database with a narrow contract:
//! bulk-read a named collection, read one document by key, create/replace a
//! document, or merge a partial field set into one. All of that maps onto a
//! single `documents(collection, key, data)` table; writes are
//! last-writer-wins with no conflict detection, matching the consistency
//! model the UI was built against.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use sqlx::PgPool;

use fleet::{Bike, Entity as _, User};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
    #[error("document not found: {collection}/{key}")]
    NotFound { collection: String, key: String },
    #[error("document key field does not match path key {0}")]
    KeyMismatch(String),
    #[error("document body must be a JSON object")]
    NotAnObject,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Collections the API will serve. Everything else is a 404.
pub const COLLECTIONS: [&str; 2] = [User::COLLECTION, Bike::COLLECTION];

#[must_use]
pub fn is_known_collection(collection: &str) -> bool {
    COLLECTIONS.contains(&collection)
}

/// The document field that must equal the path key for a given collection.
#[must_use]
pub fn key_field(collection: &str) -> Option<&'static str> {
    match collection {
        "users" => Some("email"),
        "bikes" => Some("registrationId"),
        _ => None,
    }
}

fn ensure_collection(collection: &str) -> Result<(), DocumentError> {
    if is_known_collection(collection) {
        Ok(())
    } else {
        Err(DocumentError::UnknownCollection(collection.to_owned()))
    }
}

/// Check that a full document body carries its own natural key and that it
/// matches the path key.
pub fn validate_document_key(
    collection: &str,
    key: &str,
    doc: &serde_json::Value,
) -> Result<(), DocumentError> {
    let Some(map) = doc.as_object() else {
        return Err(DocumentError::NotAnObject);
    };
    let field = key_field(collection).ok_or_else(|| DocumentError::UnknownCollection(collection.to_owned()))?;
    match map.get(field).and_then(serde_json::Value::as_str) {
        Some(value) if value == key => Ok(()),
        _ => Err(DocumentError::KeyMismatch(key.to_owned())),
    }
}

/// Bulk-read every document in a collection.
///
/// # Errors
///
/// Returns an error for unknown collections or database failures.
pub async fn list_documents(pool: &PgPool, collection: &str) -> Result<Vec<serde_json::Value>, DocumentError> {
    ensure_collection(collection)?;
    let rows = sqlx::query_scalar::<_, serde_json::Value>(
        "SELECT data FROM documents WHERE collection = $1 ORDER BY updated_at ASC, key ASC",
    )
    .bind(collection)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Read one document by key.
///
/// # Errors
///
/// Returns an error for unknown collections or database failures; a missing
/// key is `Ok(None)`.
pub async fn get_document(
    pool: &PgPool,
    collection: &str,
    key: &str,
) -> Result<Option<serde_json::Value>, DocumentError> {
    ensure_collection(collection)?;
    let row = sqlx::query_scalar::<_, serde_json::Value>(
        "SELECT data FROM documents WHERE collection = $1 AND key = $2",
    )
    .bind(collection)
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create or replace one document.
///
/// # Errors
///
/// Returns an error when the collection is unknown, the body does not carry
/// the matching natural key, or the write fails.
pub async fn put_document(
    pool: &PgPool,
    collection: &str,
    key: &str,
    doc: &serde_json::Value,
) -> Result<(), DocumentError> {
    ensure_collection(collection)?;
    validate_document_key(collection, key, doc)?;
    sqlx::query(
        "INSERT INTO documents (collection, key, data) VALUES ($1, $2, $3)
         ON CONFLICT (collection, key) DO UPDATE SET data = EXCLUDED.data, updated_at = now()",
    )
    .bind(collection)
    .bind(key)
    .bind(doc)
    .execute(pool)
    .await?;
    Ok(())
}

/// Merge a partial field set into one existing document, returning the
/// merged result.
///
/// # Errors
///
/// Returns `NotFound` when the key is absent; unknown-collection and
/// database errors as usual.
pub async fn patch_document(
    pool: &PgPool,
    collection: &str,
    key: &str,
    patch: &serde_json::Value,
) -> Result<serde_json::Value, DocumentError> {
    ensure_collection(collection)?;
    if !patch.is_object() {
        return Err(DocumentError::NotAnObject);
    }
    let row = sqlx::query_scalar::<_, serde_json::Value>(
        "UPDATE documents SET data = data || $3, updated_at = now()
         WHERE collection = $1 AND key = $2
         RETURNING data",
    )
    .bind(collection)
    .bind(key)
    .bind(patch)
    .fetch_optional(pool)
    .await?;

    row.ok_or_else(|| DocumentError::NotFound {
        collection: collection.to_owned(),
        key: key.to_owned(),
    })
}
