//! Debounced search box shared by both admin panels.
//!
//! `value` tracks every keystroke for the input element; `debounced` only
//! updates after the quiescence window, and that is the signal the filter
//! reads. Each keystroke arms a fresh generation token so earlier pending
//! timers fall through without publishing.

use leptos::prelude::*;

use crate::util::debounce::{DebounceGate, SEARCH_DEBOUNCE_MS};

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    debounced: RwSignal<String>,
    placeholder: &'static str,
) -> impl IntoView {
    let gate = RwSignal::new(DebounceGate::default());

    let on_input = move |ev| {
        let next = event_target_value(&ev);
        value.set(next.clone());
        let token = gate.try_update(DebounceGate::arm).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
                if gate.get_untracked().is_current(token) {
                    debounced.set(next);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            debounced.set(next);
        }
    };

    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=on_input
        />
    }
}
