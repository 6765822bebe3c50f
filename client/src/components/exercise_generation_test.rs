use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;

use super::*;
use crate::net::types::{ExerciseKind, ExercisesPayload, GenerateResponse};

fn generated_form() -> GenerationForm {
    let mut form = GenerationForm { topic: "Cells".to_owned(), ..GenerationForm::default() };
    form.begin_generate();
    form.finish_generate(Ok(GenerateResponse {
        exercises: ExercisesPayload::List(vec![
            Exercise::new(1, ExerciseKind::FillInTheBlanks, "The _____ is the powerhouse.")
                .with_blanks(["[organelle]"]),
        ]),
    }));
    form
}

#[test]
fn metadata_edits_do_not_rebuild_generated_list() {
    let owner = Owner::new();
    owner.set();

    let form = RwSignal::new(generated_form());
    let exercises = generated_list(form);
    let renders = Arc::new(AtomicUsize::new(0));
    let cards = Memo::new({
        let renders = Arc::clone(&renders);
        move |_| {
            renders.fetch_add(1, Ordering::SeqCst);
            exercises.with(|list| list.as_ref().map_or(0, Vec::len))
        }
    });

    assert_eq!(cards.get_untracked(), 1);
    form.update(|f| f.grade = "7".to_owned());
    form.update(|f| f.subject = "Biology".to_owned());
    form.update(|f| f.sub_topic = "Organelles".to_owned());
    form.update(GenerationForm::begin_save);
    assert_eq!(cards.get_untracked(), 1);
    assert_eq!(renders.load(Ordering::SeqCst), 1);
}

#[test]
fn new_generation_attempt_clears_generated_list() {
    let owner = Owner::new();
    owner.set();

    let form = RwSignal::new(generated_form());
    let exercises = generated_list(form);
    assert!(exercises.with_untracked(Option::is_some));

    form.update(GenerationForm::begin_generate);
    assert_eq!(exercises.get_untracked(), None);
}
