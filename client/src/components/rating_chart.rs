//! Bikes-by-rating bar chart with a drill-down dialog.
//!
//! Recomputed from the store on every bike change. Clicking a bar opens a
//! dialog listing the non-deleted bikes in that bucket.

#[cfg(test)]
#[path = "rating_chart_test.rs"]
mod rating_chart_test;

use leptos::prelude::*;

use fleet::rating::{BUCKET_COUNT, BUCKET_LABELS, RatingHistogram, bikes_in_bucket};

use crate::state::store::StoreState;

/// Bar fill per bucket, red through green.
const BAR_COLORS: [&str; BUCKET_COUNT] = ["#e53935", "#fb8c00", "#fdd835", "#8bc34a", "#388e3c"];

const CHART_WIDTH: usize = 340;
const CHART_HEIGHT: usize = 180;
const BAR_AREA_HEIGHT: usize = 130;
const BAR_WIDTH: usize = 48;
const BAR_GAP: usize = 18;

/// Pixel height of one bar given its count and the largest bucket count.
pub(crate) fn bar_height(count: usize, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    count * BAR_AREA_HEIGHT / max_count
}

#[component]
pub fn RatingChart() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let selected = RwSignal::new(None::<usize>);

    let histogram = Memo::new(move |_| {
        store.with(|s| RatingHistogram::from_bikes(s.bikes.roster.all()))
    });

    let bars = move || {
        let histogram = histogram.get();
        let max = histogram.max_count();
        (0..BUCKET_COUNT)
            .map(|i| {
                let count = histogram.counts[i];
                let height = bar_height(count, max);
                let x = 10 + i * (BAR_WIDTH + BAR_GAP);
                let y = 20 + (BAR_AREA_HEIGHT - height);
                view! {
                    <g on:click=move |_| selected.set(Some(i)) class="rating-chart__bar">
                        <rect
                            x=x.to_string()
                            y=y.to_string()
                            width=BAR_WIDTH.to_string()
                            height=height.to_string()
                            rx="4"
                            fill=BAR_COLORS[i]
                        />
                        <text
                            class="rating-chart__count"
                            x=(x + BAR_WIDTH / 2).to_string()
                            y=(y.saturating_sub(6)).to_string()
                            text-anchor="middle"
                        >
                            {count.to_string()}
                        </text>
                        <text
                            class="rating-chart__label"
                            x=(x + BAR_WIDTH / 2).to_string()
                            y=(20 + BAR_AREA_HEIGHT + 18).to_string()
                            text-anchor="middle"
                        >
                            {BUCKET_LABELS[i]}
                        </text>
                    </g>
                }
            })
            .collect::<Vec<_>>()
    };

    let selected_bikes = move || {
        selected
            .get()
            .map(|bucket| store.with(|s| bikes_in_bucket(s.bikes.roster.all(), bucket)))
            .unwrap_or_default()
    };

    view! {
        <div class="rating-chart">
            <h3 class="rating-chart__title">"Bikes by Rating Range"</h3>
            <svg
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                class="rating-chart__svg"
                role="img"
                aria-label="Bikes by rating range"
            >
                {bars}
            </svg>

            <Show when=move || selected.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                    <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Bikes with selected rating"</h2>
                        {move || {
                            let bikes = selected_bikes();
                            if bikes.is_empty() {
                                view! { <p class="dialog__text">"No bikes found for this rating."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Registration Id"</th>
                                                <th>"Color"</th>
                                                <th>"Model"</th>
                                                <th>"Location"</th>
                                                <th>"Rating"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {bikes
                                                .into_iter()
                                                .map(|b| view! {
                                                    <tr>
                                                        <td>{b.registration_id.clone()}</td>
                                                        <td>{b.color.clone()}</td>
                                                        <td>{b.model.clone()}</td>
                                                        <td>{b.location.clone()}</td>
                                                        <td>{format!("{:.1}", b.rating)}</td>
                                                    </tr>
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }
                        }}
                        <div class="dialog__actions">
                            <button class="btn btn--primary" on:click=move |_| selected.set(None)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
