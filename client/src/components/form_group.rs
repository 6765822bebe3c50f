//! Label + control wrapper with an optional required marker.

use leptos::prelude::*;

#[component]
pub fn FormGroup(
    #[prop(into)] label: String,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-group__label">
                {label}
                {required.then(|| view! { <span class="form-group__required">"*"</span> })}
            </label>
            {children()}
        </div>
    }
}
