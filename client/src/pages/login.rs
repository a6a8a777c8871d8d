//! Login page with email + password auth and a signup form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::store::StoreState;

/// Basic pre-flight check before a credentials request goes out.
pub(crate) fn validate_credentials_form(email: &str, password: &str) -> Option<&'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Some("Enter both email and password.");
    }
    None
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<RwSignal<StoreState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let remember = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signup_mode = RwSignal::new(false);

    // Landing on the login screen drops any cached session data.
    Effect::new(move || {
        store.set(StoreState::default());
    });

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        info.set(String::new());
        if let Some(message) = validate_credentials_form(&email.get_untracked(), &password.get_untracked()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        auth.set(AuthState { user: Some(user), loading: false });
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
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
            let _ = auth;
            busy.set(false);
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        info.set(String::new());
        if let Some(message) = validate_credentials_form(&email.get_untracked(), &password.get_untracked()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&email_value, &password_value).await {
                    Ok(()) => {
                        info.set("Account created. You can sign in now.".to_owned());
                        signup_mode.set(false);
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__welcome">
                <h1>"Welcome to Bike Rental"</h1>
                <p>
                    "Rent your favorite bike and start your journey with us. Fast, easy, and reliable."
                </p>
            </div>
            <div class="login-card">
                <h2 class="login-card__title">
                    {move || if signup_mode.get() { "SIGN UP" } else { "USER LOGIN" }}
                </h2>

                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>

                <form
                    class="login-form"
                    on:submit=move |ev| {
                        if signup_mode.get_untracked() { on_signup(ev) } else { on_login(ev) }
                    }
                >
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-input-row">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="btn btn--small"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>

                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember"
                    </label>

                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Working..."
                            } else if signup_mode.get() {
                                "SIGN UP"
                            } else {
                                "LOGIN"
                            }
                        }}
                    </button>
                </form>

                <p class="login-card__switch">
                    {move || if signup_mode.get() { "Already have an account? " } else { "Don't have an account? " }}
                    <button
                        type="button"
                        class="login-card__switch-link"
                        on:click=move |_| {
                            signup_mode.update(|v| *v = !*v);
                            error.set(String::new());
                            info.set(String::new());
                        }
                    >
                        {move || if signup_mode.get() { "Sign in" } else { "Sign up" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
