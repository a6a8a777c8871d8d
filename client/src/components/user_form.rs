//! Create/edit user dialog.
//!
//! The email is the natural key, so it is frozen when editing. On a
//! confirmed remote write the stored document is upserted into the shared
//! store; a failed write surfaces inline and leaves the store untouched.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;

use fleet::User;

use crate::state::store::StoreState;

/// Validate the form fields, returning `(name, email, age)` ready for the
/// document write.
pub(crate) fn validate_user_form(
    name: &str,
    email: &str,
    age: &str,
) -> Result<(String, String, u32), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    let email = email.trim().to_ascii_lowercase();
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err("Enter a valid email address.");
    }
    let age: u32 = age.trim().parse().map_err(|_| "Enter a valid age.")?;
    if age == 0 || age > 120 {
        return Err("Enter a valid age.");
    }
    Ok((name.to_owned(), email, age))
}

#[component]
pub fn UserFormDialog(existing: Option<User>, on_close: Callback<()>) -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();

    let is_update = existing.is_some();
    let initial_deleted = existing.as_ref().is_some_and(|u| u.is_deleted);
    let name = RwSignal::new(existing.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(existing.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let age = RwSignal::new(existing.as_ref().map(|u| u.age.to_string()).unwrap_or_default());
    let is_manager = RwSignal::new(existing.as_ref().is_some_and(|u| u.is_manager));
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = validate_user_form(
            &name.get_untracked(),
            &email.get_untracked(),
            &age.get_untracked(),
        );
        let (name_value, email_value, age_value) = match fields {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };

        error.set(String::new());
        busy.set(true);
        let user = User {
            email: email_value,
            name: name_value,
            age: age_value,
            is_manager: is_manager.get_untracked(),
            is_deleted: initial_deleted,
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::save_user(&user).await {
                    Ok(stored) => {
                        store.update(|s| s.users.roster.upsert(stored));
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
            let _ = (user, store);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_update { "Update User" } else { "Create New User" }}</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            disabled=is_update
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Age"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            max="120"
                            prop:value=move || age.get()
                            on:input=move |ev| age.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || is_manager.get()
                            on:change=move |ev| is_manager.set(event_target_checked(&ev))
                        />
                        "Manager"
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
