//! Admin dashboard: summary cards, rating chart, and the two management
//! panels. Redirects to `/login` when unauthenticated.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::bikes_panel::BikesPanel;
use crate::components::navbar::Navbar;
use crate::components::rating_chart::RatingChart;
use crate::components::summary_cards::SummaryCards;
use crate::components::users_panel::UsersPanel;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login once the session check has settled.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="dashboard-page">
            <Navbar/>

            <Show when=move || auth.get().user.is_some()>
                <Show
                    when=move || auth.get().is_manager()
                    fallback=|| view! {
                        <p class="dashboard-page__notice">
                            "Your account does not have manager access."
                        </p>
                    }
                >
                    <header class="dashboard-page__banner">
                        <h1>"Welcome to the Admin Dashboard"</h1>
                        <p>"Manage users, bikes, and view analytics at a glance."</p>
                    </header>

                    <SummaryCards/>
                    <RatingChart/>

                    <div class="dashboard-page__panels">
                        <UsersPanel/>
                        <BikesPanel/>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
