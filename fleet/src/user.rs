//! User record keyed by email.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::entity::{DocumentError, Entity, contains_ci};

/// A rental-system user as stored in the `users` collection.
///
/// Field names mirror the stored document schema (camelCase on the wire).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Natural key; stored lowercase.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Whether this user has the manager role.
    pub is_manager: bool,
    /// Soft-delete flag; deleted users stay in the collection.
    #[serde(default)]
    pub is_deleted: bool,
}

impl User {
    /// Decode and validate one document from the remote collection.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the document does not decode into the
    /// expected shape or the email key is empty.
    pub fn from_document(doc: &serde_json::Value) -> Result<Self, DocumentError> {
        let user: Self =
            serde_json::from_value(doc.clone()).map_err(|e| DocumentError::Malformed(e.to_string()))?;
        if user.email.trim().is_empty() {
            return Err(DocumentError::EmptyKey);
        }
        Ok(user)
    }

    /// Display label for the role column.
    #[must_use]
    pub fn role_label(&self) -> &'static str {
        if self.is_manager { "Manager" } else { "User" }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn key(&self) -> &str {
        &self.email
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle) || contains_ci(&self.email, needle)
    }
}
