//! Dashboard aggregate counts over the two rosters.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::bike::Bike;
use crate::roster::Roster;
use crate::user::User;

/// Headline numbers for the admin dashboard cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Non-deleted users.
    pub total_users: usize,
    /// Non-deleted bikes.
    pub total_bikes: usize,
    /// Non-deleted users with the manager role.
    pub managers: usize,
    /// Mean rating over non-deleted bikes; `None` when there are none.
    pub average_rating: Option<f64>,
}

/// Compute the dashboard summary from the current snapshots.
#[must_use]
pub fn summarize(users: &Roster<User>, bikes: &Roster<Bike>) -> Summary {
    let visible_users = users.visible();
    let visible_bikes = bikes.visible();

    let managers = visible_users.iter().filter(|u| u.is_manager).count();
    #[allow(clippy::cast_precision_loss)]
    let average_rating = if visible_bikes.is_empty() {
        None
    } else {
        Some(visible_bikes.iter().map(|b| b.rating).sum::<f64>() / visible_bikes.len() as f64)
    };

    Summary {
        total_users: visible_users.len(),
        total_bikes: visible_bikes.len(),
        managers,
        average_rating,
    }
}
