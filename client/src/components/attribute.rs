//! Label/value row used by the read-only detail dialogs.

use leptos::prelude::*;

#[component]
pub fn AttributeRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="dialog__detail-row">
            <span class="dialog__detail-label">{label}</span>
            <span class="dialog__detail-value">{value}</span>
        </div>
    }
}
