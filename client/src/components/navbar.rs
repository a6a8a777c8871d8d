//! Top navigation bar: title, current user, dark-mode toggle, logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::dark_mode;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dark = RwSignal::new(false);

    // Apply the persisted theme once on mount.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        dark.set(enabled);
    });

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(dark.get_untracked());
        dark.set(next);
    };

    let on_logout = move |_| {
        auth.set(AuthState { user: None, loading: false });
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    let user_name = move || {
        auth.get()
            .user
            .map_or_else(String::new, |u| u.name)
    };

    view! {
        <nav class="navbar">
            <span class="navbar__title">"Bike Rental Admin"</span>
            <div class="navbar__actions">
                <span class="navbar__user">{user_name}</span>
                <button
                    class="btn navbar__toggle"
                    on:click=on_toggle_dark
                    title="Toggle dark mode"
                >
                    {move || if dark.get() { "Light" } else { "Dark" }}
                </button>
                <Show when=move || auth.get().user.is_some()>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
