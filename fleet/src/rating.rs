//! Fixed five-bucket rating histogram for the bikes chart.
//!
//! Buckets are half-open on the low side — `[0,1) [1,2) [2,3) [3,4)` — with
//! the final bucket `[4,5]` closed on both ends so a five-star bike still
//! lands somewhere. Deleted bikes and non-finite ratings are excluded.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

use crate::bike::Bike;

/// Number of rating buckets.
pub const BUCKET_COUNT: usize = 5;

/// Display labels, index-aligned with [`RatingHistogram::counts`].
pub const BUCKET_LABELS: [&str; BUCKET_COUNT] = ["0-1", "1-2", "2-3", "3-4", "4-5"];

/// Bucket index for a rating, or `None` when the rating is non-finite or
/// outside `[0, 5]`.
#[must_use]
pub fn bucket_index(rating: f64) -> Option<usize> {
    if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
        return None;
    }
    if rating >= 4.0 {
        return Some(BUCKET_COUNT - 1);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = rating.floor() as usize;
    Some(index)
}

/// Per-bucket counts over the non-deleted bikes of a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingHistogram {
    pub counts: [usize; BUCKET_COUNT],
}

impl RatingHistogram {
    /// Count non-deleted bikes into buckets.
    #[must_use]
    pub fn from_bikes(bikes: &[Bike]) -> Self {
        let mut counts = [0_usize; BUCKET_COUNT];
        for bike in bikes.iter().filter(|b| !b.is_deleted) {
            if let Some(index) = bucket_index(bike.rating) {
                counts[index] += 1;
            }
        }
        Self { counts }
    }

    /// Largest bucket count; `0` for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Total counted bikes across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Non-deleted bikes falling into one bucket, for the chart's drill-down
/// dialog.
#[must_use]
pub fn bikes_in_bucket(bikes: &[Bike], bucket: usize) -> Vec<Bike> {
    bikes
        .iter()
        .filter(|b| !b.is_deleted && bucket_index(b.rating) == Some(bucket))
        .cloned()
        .collect()
}
