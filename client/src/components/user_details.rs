//! Read-only user detail dialog.

use leptos::prelude::*;

use fleet::User;

use crate::components::attribute::AttributeRow;

#[component]
pub fn UserDetailsDialog(user: User, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"User Details"</h2>
                <AttributeRow label="Name" value=user.name.clone()/>
                <AttributeRow label="Email" value=user.email.clone()/>
                <AttributeRow label="Age" value=user.age.to_string()/>
                <AttributeRow label="Role" value=user.role_label().to_owned()/>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
