//! Exercise generation panel with save.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads book readiness from the root; both generate actions share one
//! request path and differ only in `use_book_context`. Save reports through
//! its own banner.

use leptos::prelude::*;

use crate::components::exercise_card::ExerciseCard;
use crate::components::form_group::FormGroup;
use crate::components::response_box::{ResponseBox, banner_signal};
use crate::components::spinner::{Spinner, SpinnerSize};
use crate::net::types::{Exercise, ExerciseType};
use crate::state::banner::Banner;
use crate::state::generation::{GenerationForm, QUESTION_COUNTS, parse_question_count};

#[cfg(test)]
#[path = "exercise_generation_test.rs"]
mod exercise_generation_test;

/// Generated list as its own memo. Cards hold uncontrolled inputs, so they are
/// rebuilt only when the list itself changes, not on metadata edits.
fn generated_list(form: RwSignal<GenerationForm>) -> Memo<Option<Vec<Exercise>>> {
    Memo::new(move |_| form.with(|f| f.exercises.clone()))
}

#[component]
pub fn ExerciseGeneration(has_book: Signal<bool>, #[prop(into)] user_id: String) -> impl IntoView {
    let form = RwSignal::new(GenerationForm::default());
    let user_id = StoredValue::new(user_id);

    let generate = move |use_book_context: bool| {
        if form.with_untracked(|f| f.loading) {
            return;
        }
        if let Err(message) = form.with_untracked(|f| f.validate_generate(use_book_context, has_book.get_untracked())) {
            form.update(|f| f.banner = Some(Banner::error(message)));
            return;
        }
        form.update(GenerationForm::begin_generate);

        let (topic, exercise_type, num_questions) =
            form.with_untracked(|f| (f.topic.clone(), f.exercise_type, f.num_questions));
        let user_id = user_id.get_value();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::generate_exercises(
                &topic,
                exercise_type,
                num_questions,
                use_book_context,
                &user_id,
            )
            .await;
            if let Err(e) = &result {
                leptos::logging::warn!("exercise generation failed: {e}");
            }
            form.update(|f| f.finish_generate(result));
        });
    };

    let on_save = move |_: leptos::ev::MouseEvent| {
        if !form.with_untracked(GenerationForm::can_save) {
            return;
        }
        form.update(GenerationForm::begin_save);
        let snapshot = form.get_untracked();
        leptos::task::spawn_local(async move {
            let exercises = snapshot.exercises.unwrap_or_default();
            let result = crate::net::api::save_exercise(
                snapshot.exercise_type,
                &exercises,
                &snapshot.grade,
                &snapshot.subject,
                &snapshot.topic,
                &snapshot.sub_topic,
            )
            .await;
            if let Err(e) = &result {
                leptos::logging::warn!("saving exercises failed: {e}");
            }
            form.update(|f| f.finish_save(result));
        });
    };

    let loading_memo = Memo::new(move |_| form.with(|f| f.loading));
    let loading = move || loading_memo.get();
    let exercises = generated_list(form);
    let generate_disabled = move || !form.with(GenerationForm::can_generate);

    let banner = banner_signal(form, |f| f.banner.clone());
    let on_banner_close = Callback::new(move |()| form.update(|f| f.banner = None));
    let save_banner = banner_signal(form, |f| f.save_banner.clone());
    let on_save_banner_close = Callback::new(move |()| form.update(|f| f.save_banner = None));

    view! {
        <section class="panel">
            <header class="panel__header">
                <span class="panel__icon" aria-hidden="true">"✎"</span>
                <h2 class="panel__title">"Generate an Exercise"</h2>
            </header>

            <div class="panel__body">
                <div class="panel__grid">
                    <FormGroup label="Topic" required=true>
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Enter topic"
                            prop:value=move || form.with(|f| f.topic.clone())
                            on:input=move |ev| form.update(|f| f.topic = event_target_value(&ev))
                            disabled=loading
                        />
                    </FormGroup>

                    <FormGroup label="Exercise Type">
                        <select
                            class="panel__input"
                            prop:value=move || form.with(|f| f.exercise_type.label())
                            on:change=move |ev| {
                                if let Some(ty) = ExerciseType::from_label(&event_target_value(&ev)) {
                                    form.update(|f| f.exercise_type = ty);
                                }
                            }
                            disabled=loading
                        >
                            {ExerciseType::ALL
                                .into_iter()
                                .map(|ty| view! { <option value=ty.label()>{ty.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </FormGroup>

                    <FormGroup label="Number of Questions">
                        <select
                            class="panel__input"
                            prop:value=move || form.with(|f| f.num_questions.to_string())
                            on:change=move |ev| {
                                if let Some(count) = parse_question_count(&event_target_value(&ev)) {
                                    form.update(|f| f.num_questions = count);
                                }
                            }
                            disabled=loading
                        >
                            {QUESTION_COUNTS
                                .into_iter()
                                .map(|count| view! { <option value=count.to_string()>{count}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </FormGroup>

                    <FormGroup label="Grade" required=true>
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Enter grade"
                            prop:value=move || form.with(|f| f.grade.clone())
                            on:input=move |ev| form.update(|f| f.grade = event_target_value(&ev))
                            disabled=loading
                        />
                    </FormGroup>

                    <FormGroup label="Subject" required=true>
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Enter subject"
                            prop:value=move || form.with(|f| f.subject.clone())
                            on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                            disabled=loading
                        />
                    </FormGroup>

                    <FormGroup label="Sub Topic">
                        <input
                            class="panel__input"
                            type="text"
                            placeholder="Enter sub topic (optional)"
                            prop:value=move || form.with(|f| f.sub_topic.clone())
                            on:input=move |ev| form.update(|f| f.sub_topic = event_target_value(&ev))
                            disabled=loading
                        />
                    </FormGroup>
                </div>

                <div class="panel__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| generate(true)
                        disabled=generate_disabled
                    >
                        "Generate with Book Context"
                        <Show when=move || !has_book.get()>
                            <span class="btn__hint">"(Upload book first)"</span>
                        </Show>
                    </button>
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| generate(false)
                        disabled=generate_disabled
                    >
                        "Generate without Book"
                    </button>
                </div>

                <Show when=loading>
                    <div class="panel__loading">
                        <Spinner size=SpinnerSize::Large text="Generating exercises..."/>
                    </div>
                </Show>

                <ResponseBox banner=banner on_close=on_banner_close/>

                <Show when=move || !loading() && exercises.with(Option::is_some)>
                    <div class="panel__results">
                        <h3 class="panel__subtitle">"Generated Exercises"</h3>
                        <div class="panel__scroll">
                            {move || {
                                exercises
                                    .get()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, exercise)| view! { <ExerciseCard exercise=exercise index=index/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <button class="btn btn--success panel__submit" on:click=on_save>
                            "Save Exercises"
                        </button>
                        <ResponseBox banner=save_banner on_close=on_save_banner_close/>
                    </div>
                </Show>
            </div>
        </section>
    }
}
