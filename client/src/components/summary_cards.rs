//! Headline stat cards for the dashboard.

#[cfg(test)]
#[path = "summary_cards_test.rs"]
mod summary_cards_test;

use leptos::prelude::*;

use crate::state::store::StoreState;

/// Display form of an average rating; `-` until any bike exists.
pub(crate) fn format_average(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_owned(), |r| format!("{r:.2}"))
}

#[component]
pub fn SummaryCards() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let summary = Memo::new(move |_| {
        store.with(|s| fleet::summary::summarize(&s.users.roster, &s.bikes.roster))
    });

    view! {
        <div class="summary-cards">
            <div class="summary-card">
                <span class="summary-card__label">"Total Users"</span>
                <span class="summary-card__value">{move || summary.get().total_users}</span>
            </div>
            <div class="summary-card">
                <span class="summary-card__label">"Total Bikes"</span>
                <span class="summary-card__value">{move || summary.get().total_bikes}</span>
            </div>
            <div class="summary-card">
                <span class="summary-card__label">"Avg. Bike Rating"</span>
                <span class="summary-card__value">{move || format_average(summary.get().average_rating)}</span>
            </div>
            <div class="summary-card">
                <span class="summary-card__label">"Managers"</span>
                <span class="summary-card__value">{move || summary.get().managers}</span>
            </div>
        </div>
    }
}
