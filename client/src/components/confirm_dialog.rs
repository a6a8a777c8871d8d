//! Yes/cancel confirmation dialog for destructive actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: &'static str,
    information: &'static str,
    on_yes: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__text">{information}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_yes.run(())>
                        "Yes"
                    </button>
                </div>
            </div>
        </div>
    }
}
