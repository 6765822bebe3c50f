//! Header badge showing whether a book is ready.

use leptos::prelude::*;

use crate::state::book::BookStatus;

#[component]
pub fn StatusIndicator(status: Signal<BookStatus>) -> impl IntoView {
    view! {
        <div class=move || format!("status-indicator {}", status.get().class_modifier())>
            <Show
                when=move || status.get() == BookStatus::Processing
                fallback=|| view! { <span class="status-indicator__dot" aria-hidden="true"></span> }
            >
                <span class="status-indicator__spinner" aria-hidden="true"></span>
            </Show>
            <span class="status-indicator__label">{move || status.get().label()}</span>
        </div>
    }
}
