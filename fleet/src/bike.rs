//! Bike record keyed by registration ID.

#[cfg(test)]
#[path = "bike_test.rs"]
mod bike_test;

use serde::{Deserialize, Serialize};

use crate::entity::{DocumentError, Entity, contains_ci};

/// Lowest rating a bike can carry.
pub const RATING_MIN: f64 = 0.0;
/// Highest rating a bike can carry.
pub const RATING_MAX: f64 = 5.0;

/// A rentable bike as stored in the `bikes` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bike {
    /// Natural key.
    pub registration_id: String,
    /// Frame color.
    pub color: String,
    /// Model name.
    pub model: String,
    /// Pickup location.
    pub location: String,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Soft-delete flag; deleted bikes stay in the collection.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Bike {
    /// Decode and validate one document from the remote collection.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the document does not decode, the
    /// registration ID is empty, or the rating is non-finite or outside
    /// `[0, 5]`.
    pub fn from_document(doc: &serde_json::Value) -> Result<Self, DocumentError> {
        let bike: Self =
            serde_json::from_value(doc.clone()).map_err(|e| DocumentError::Malformed(e.to_string()))?;
        if bike.registration_id.trim().is_empty() {
            return Err(DocumentError::EmptyKey);
        }
        if !bike.rating.is_finite() || bike.rating < RATING_MIN || bike.rating > RATING_MAX {
            return Err(DocumentError::RatingOutOfRange(bike.rating));
        }
        Ok(bike)
    }
}

impl Entity for Bike {
    const COLLECTION: &'static str = "bikes";

    fn key(&self) -> &str {
        &self.registration_id
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.registration_id, needle)
            || contains_ci(&self.model, needle)
            || contains_ci(&self.color, needle)
            || contains_ci(&self.location, needle)
    }
}
