//! Create/edit bike dialog.
//!
//! The registration ID is the natural key, so it is frozen when editing.
//! Mirrors the user form: confirmed writes upsert the stored document into
//! the shared store, failures surface inline.

#[cfg(test)]
#[path = "bike_form_test.rs"]
mod bike_form_test;

use leptos::prelude::*;

use fleet::Bike;
use fleet::bike::{RATING_MAX, RATING_MIN};

use crate::state::store::StoreState;

/// Validate the form fields, returning
/// `(registration_id, model, color, location, rating)`.
pub(crate) fn validate_bike_form(
    registration_id: &str,
    model: &str,
    color: &str,
    location: &str,
    rating: &str,
) -> Result<(String, String, String, String, f64), &'static str> {
    let registration_id = registration_id.trim();
    if registration_id.is_empty() {
        return Err("Registration ID is required.");
    }
    let model = model.trim();
    if model.is_empty() {
        return Err("Model is required.");
    }
    let color = color.trim();
    if color.is_empty() {
        return Err("Color is required.");
    }
    let location = location.trim();
    if location.is_empty() {
        return Err("Location is required.");
    }
    let rating: f64 = rating.trim().parse().map_err(|_| "Enter a rating between 0 and 5.")?;
    if !rating.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err("Enter a rating between 0 and 5.");
    }
    Ok((
        registration_id.to_owned(),
        model.to_owned(),
        color.to_owned(),
        location.to_owned(),
        rating,
    ))
}

#[component]
pub fn BikeFormDialog(existing: Option<Bike>, on_close: Callback<()>) -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();

    let is_update = existing.is_some();
    let initial_deleted = existing.as_ref().is_some_and(|b| b.is_deleted);
    let registration_id =
        RwSignal::new(existing.as_ref().map(|b| b.registration_id.clone()).unwrap_or_default());
    let model = RwSignal::new(existing.as_ref().map(|b| b.model.clone()).unwrap_or_default());
    let color = RwSignal::new(existing.as_ref().map(|b| b.color.clone()).unwrap_or_default());
    let location = RwSignal::new(existing.as_ref().map(|b| b.location.clone()).unwrap_or_default());
    let rating = RwSignal::new(existing.as_ref().map(|b| b.rating.to_string()).unwrap_or_default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = validate_bike_form(
            &registration_id.get_untracked(),
            &model.get_untracked(),
            &color.get_untracked(),
            &location.get_untracked(),
            &rating.get_untracked(),
        );
        let (id_value, model_value, color_value, location_value, rating_value) = match fields {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };

        error.set(String::new());
        busy.set(true);
        let bike = Bike {
            registration_id: id_value,
            model: model_value,
            color: color_value,
            location: location_value,
            rating: rating_value,
            is_deleted: initial_deleted,
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::save_bike(&bike).await {
                    Ok(stored) => {
                        store.update(|s| s.bikes.roster.upsert(stored));
                        busy.set(false);
                        on_close.run(());
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bike, store);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_update { "Update Bike" } else { "Create New Bike" }}</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Registration ID"
                        <input
                            class="dialog__input"
                            type="text"
                            disabled=is_update
                            prop:value=move || registration_id.get()
                            on:input=move |ev| registration_id.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Model"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || model.get()
                            on:input=move |ev| model.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Color"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || color.get()
                            on:input=move |ev| color.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Location"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Rating"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            max="5"
                            step="0.1"
                            prop:value=move || rating.get()
                            on:input=move |ev| rating.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || !error.get().is_empty()>
                        <p class="dialog__error">{move || error.get()}</p>
                    </Show>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
