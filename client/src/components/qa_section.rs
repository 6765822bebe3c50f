//! Free-text Q&A about the uploaded book.

use leptos::prelude::*;

use crate::components::form_group::FormGroup;
use crate::components::response_box::{ResponseBox, banner_signal};
use crate::components::spinner::{Spinner, SpinnerSize};
use crate::state::banner::Banner;
use crate::state::qa::{QaForm, is_submit_shortcut, question_placeholder};

#[component]
pub fn QaSection(has_book: Signal<bool>, #[prop(into)] user_id: String) -> impl IntoView {
    let form = RwSignal::new(QaForm::default());
    let user_id = StoredValue::new(user_id);

    let ask = move || {
        if form.with_untracked(|f| f.loading) {
            return;
        }
        if let Err(message) = form.with_untracked(|f| f.validate(has_book.get_untracked())) {
            form.update(|f| f.banner = Some(Banner::error(message)));
            return;
        }
        form.update(QaForm::begin_ask);

        let question = form.with_untracked(|f| f.question.clone());
        let user_id = user_id.get_value();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::ask_question(&user_id, &question).await;
            if let Err(e) = &result {
                leptos::logging::warn!("question failed: {e}");
            }
            form.update(|f| f.finish_ask(result));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_shortcut(&ev.key(), ev.ctrl_key()) {
            ev.prevent_default();
            ask();
        }
    };

    let loading = move || form.with(|f| f.loading);
    let banner = banner_signal(form, |f| f.banner.clone());
    let on_banner_close = Callback::new(move |()| form.update(|f| f.banner = None));

    view! {
        <section class="panel">
            <header class="panel__header">
                <span class="panel__icon" aria-hidden="true">"?"</span>
                <h2 class="panel__title">"Q&A About Your Book"</h2>
                <Show when=move || !has_book.get()>
                    <span class="panel__pill">"Book required"</span>
                </Show>
            </header>

            <div class="panel__body">
                <FormGroup label="Your Question" required=true>
                    <textarea
                        class="panel__input panel__input--textarea"
                        rows="4"
                        placeholder=move || question_placeholder(has_book.get())
                        prop:value=move || form.with(|f| f.question.clone())
                        on:input=move |ev| form.update(|f| f.question = event_target_value(&ev))
                        on:keydown=on_keydown
                        disabled=move || loading() || !has_book.get()
                    ></textarea>
                    <p class="panel__hint">"Tip: Press Ctrl + Enter to submit quickly"</p>
                </FormGroup>

                <button
                    class="btn btn--primary panel__submit"
                    on:click=move |_| ask()
                    disabled=move || !form.with(|f| f.can_ask(has_book.get()))
                >
                    <Show when=loading fallback=|| view! { <span>"Ask Question"</span> }>
                        <Spinner size=SpinnerSize::Small text="Processing question..."/>
                    </Show>
                </button>

                <ResponseBox banner=banner on_close=on_banner_close/>

                {move || {
                    form.with(|f| f.visible_answer().map(str::to_owned))
                        .map(|answer| {
                            view! {
                                <div class="panel__results">
                                    <h3 class="panel__subtitle">"Answer"</h3>
                                    <div class="panel__answer">
                                        <p class="panel__answer-text">{answer}</p>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}
