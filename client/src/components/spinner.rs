//! Loading affordance with optional caption.

use leptos::prelude::*;

#[cfg(test)]
#[path = "spinner_test.rs"]
mod spinner_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

fn spinner_class(size: SpinnerSize) -> &'static str {
    match size {
        SpinnerSize::Small => "spinner__ring spinner__ring--sm",
        SpinnerSize::Medium => "spinner__ring spinner__ring--md",
        SpinnerSize::Large => "spinner__ring spinner__ring--lg",
    }
}

#[component]
pub fn Spinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] text: String,
) -> impl IntoView {
    view! {
        <div class="spinner">
            <div class=spinner_class(size) aria-hidden="true"></div>
            {(!text.is_empty()).then(|| view! { <span class="spinner__text">{text}</span> })}
        </div>
    }
}
