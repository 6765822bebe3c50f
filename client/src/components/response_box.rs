//! Dismissible kind-tagged banner.
//!
//! DESIGN
//! ======
//! The owner keeps the `Banner`; this component only tracks visibility for
//! the fade. Any new non-empty message makes it visible again. Dismissal hides
//! it at once and asks the owner to clear after `DISMISS_FADE_MS`.

use leptos::prelude::*;

use crate::state::banner::Banner;
#[cfg(feature = "hydrate")]
use crate::state::banner::DISMISS_FADE_MS;

#[cfg(test)]
#[path = "response_box_test.rs"]
mod response_box_test;

/// Banner slice of a panel's form that only notifies when the banner changes.
///
/// Keystrokes in other fields must not re-run the visibility effect, or a
/// banner dismissed during its fade would show again.
pub fn banner_signal<T>(
    form: RwSignal<T>,
    pick: impl Fn(&T) -> Option<Banner> + Send + Sync + 'static,
) -> Signal<Option<Banner>>
where
    T: Send + Sync + 'static,
{
    Memo::new(move |_| form.with(&pick)).into()
}

#[component]
pub fn ResponseBox(banner: Signal<Option<Banner>>, on_close: Callback<()>) -> impl IntoView {
    let visible = RwSignal::new(false);

    Effect::new(move || {
        if banner.with(|b| b.as_ref().is_some_and(Banner::is_displayable)) {
            visible.set(true);
        }
    });

    let on_dismiss = move |_: leptos::ev::MouseEvent| {
        visible.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_FADE_MS)).await;
            on_close.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        on_close.run(());
    };

    move || {
        banner.get().filter(Banner::is_displayable).map(|b| {
            view! {
                <div class="response-box" class=("response-box--visible", move || visible.get())>
                    <div class=format!("response-box__body {}", b.kind.class_modifier())>
                        <span class="response-box__icon">{b.kind.icon()}</span>
                        <p class="response-box__message">{b.message}</p>
                        <button
                            class="response-box__close"
                            on:click=on_dismiss
                            title="Dismiss"
                            aria-label="Dismiss"
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
