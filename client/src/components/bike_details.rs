//! Read-only bike detail dialog.

use leptos::prelude::*;

use fleet::Bike;

use crate::components::attribute::AttributeRow;

#[component]
pub fn BikeDetailsDialog(bike: Bike, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Bike Details"</h2>
                <AttributeRow label="Registration Id" value=bike.registration_id.clone()/>
                <AttributeRow label="Model" value=bike.model.clone()/>
                <AttributeRow label="Color" value=bike.color.clone()/>
                <AttributeRow label="Location" value=bike.location.clone()/>
                <AttributeRow label="Rating" value=format!("{:.1}", bike.rating)/>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
