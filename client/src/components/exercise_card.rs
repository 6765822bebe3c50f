//! Rendering of one generated exercise item.
//!
//! Dispatch goes through `ExerciseTemplate` so every kind tag maps to exactly
//! one layout, with unknown tags falling through to a free-text answer box.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{Exercise, ExerciseKind};

#[cfg(test)]
#[path = "exercise_card_test.rs"]
mod exercise_card_test;

/// Layout used for an exercise item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseTemplate {
    MultipleChoice,
    TrueFalse,
    FillInTheBlanks,
    /// Short-answer and long-question items show the prompt only.
    PromptOnly,
    /// Free-form text returned in place of a list.
    Preformatted,
    FreeText,
}

pub fn template_for(kind: &ExerciseKind) -> ExerciseTemplate {
    match kind {
        ExerciseKind::MultipleChoice => ExerciseTemplate::MultipleChoice,
        ExerciseKind::TrueFalse => ExerciseTemplate::TrueFalse,
        ExerciseKind::FillInTheBlanks => ExerciseTemplate::FillInTheBlanks,
        ExerciseKind::ShortAnswer | ExerciseKind::LongQuestions => ExerciseTemplate::PromptOnly,
        ExerciseKind::Text => ExerciseTemplate::Preformatted,
        ExerciseKind::Other(_) | ExerciseKind::Untyped => ExerciseTemplate::FreeText,
    }
}

/// Radio group name for a true/false item, unique per list position.
fn radio_group_name(index: usize) -> String {
    format!("tf-{index}")
}

fn revealed_text(exercise: &Exercise) -> Option<String> {
    exercise.revealed_answer().map(|a| a.to_string())
}

#[component]
pub fn ExerciseCard(exercise: Exercise, index: usize) -> impl IntoView {
    let question = exercise.question().to_owned();
    match template_for(&exercise.kind()) {
        ExerciseTemplate::MultipleChoice => {
            let correct = exercise.correct().map(|c| c.to_string()).unwrap_or_default();
            view! {
                <div class="exercise-card">
                    <h4 class="exercise-card__question">{question}</h4>
                    <div class="exercise-card__options">
                        {exercise
                            .options()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <div class="exercise-card__option">
                                        <span class="exercise-card__marker" aria-hidden="true"></span>
                                        <span>{option}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="exercise-card__answer">"Correct answer: " {correct}</p>
                </div>
            }
            .into_any()
        }
        ExerciseTemplate::TrueFalse => {
            let revealed = revealed_text(&exercise);
            let group = radio_group_name(index);
            view! {
                <div class="exercise-card">
                    <h4 class="exercise-card__question">{question}</h4>
                    <div class="exercise-card__choices">
                        <label class="exercise-card__choice">
                            <input type="radio" name=group.clone() disabled=true/>
                            <span>"True"</span>
                        </label>
                        <label class="exercise-card__choice">
                            <input type="radio" name=group disabled=true/>
                            <span>"False"</span>
                        </label>
                    </div>
                    {revealed.map(|answer| {
                        view! {
                            <p class="exercise-card__answer">
                                "Correct answer: "
                                <span class="exercise-card__answer-value">{answer}</span>
                            </p>
                        }
                    })}
                </div>
            }
            .into_any()
        }
        ExerciseTemplate::FillInTheBlanks => {
            let revealed = revealed_text(&exercise);
            view! {
                <div class="exercise-card">
                    <h4 class="exercise-card__question">{question}</h4>
                    {revealed.map(|answer| {
                        view! {
                            <p class="exercise-card__answer">
                                "Answer: "
                                <span class="exercise-card__answer-value">{answer}</span>
                            </p>
                        }
                    })}
                    <div class="exercise-card__blanks">
                        {exercise
                            .blanks()
                            .into_iter()
                            .map(|blank| {
                                view! { <input class="exercise-card__blank" type="text" placeholder=blank/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            }
            .into_any()
        }
        ExerciseTemplate::PromptOnly => view! {
            <div class="exercise-card">
                <h4 class="exercise-card__question">{question}</h4>
            </div>
        }
        .into_any(),
        ExerciseTemplate::Preformatted => view! {
            <div class="exercise-card exercise-card--text">
                <pre class="exercise-card__text">{question}</pre>
            </div>
        }
        .into_any(),
        ExerciseTemplate::FreeText => view! {
            <div class="exercise-card">
                <h4 class="exercise-card__question">{question}</h4>
                <textarea
                    class="exercise-card__free-text"
                    rows="4"
                    placeholder="Type your answer here..."
                ></textarea>
            </div>
        }
        .into_any(),
    }
}
