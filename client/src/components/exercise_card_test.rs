use super::*;
use crate::net::types::AnswerValue;

#[test]
fn known_kinds_select_their_templates() {
    assert_eq!(template_for(&ExerciseKind::MultipleChoice), ExerciseTemplate::MultipleChoice);
    assert_eq!(template_for(&ExerciseKind::TrueFalse), ExerciseTemplate::TrueFalse);
    assert_eq!(template_for(&ExerciseKind::FillInTheBlanks), ExerciseTemplate::FillInTheBlanks);
    assert_eq!(template_for(&ExerciseKind::ShortAnswer), ExerciseTemplate::PromptOnly);
    assert_eq!(template_for(&ExerciseKind::LongQuestions), ExerciseTemplate::PromptOnly);
    assert_eq!(template_for(&ExerciseKind::Text), ExerciseTemplate::Preformatted);
}

#[test]
fn unknown_kinds_fall_back_to_free_text() {
    for tag in ["Essay", "Matching", "multiple choice", "true/false"] {
        assert_eq!(
            template_for(&ExerciseKind::from_label(tag)),
            ExerciseTemplate::FreeText,
            "{tag}"
        );
    }
}

#[test]
fn untyped_item_falls_back_to_free_text() {
    assert_eq!(template_for(&ExerciseKind::Untyped), ExerciseTemplate::FreeText);
}

#[test]
fn radio_groups_are_unique_per_position() {
    assert_eq!(radio_group_name(0), "tf-0");
    assert_ne!(radio_group_name(1), radio_group_name(2));
}

#[test]
fn revealed_text_formats_boolean() {
    let item = Exercise::new(1, ExerciseKind::TrueFalse, "Q");
    assert_eq!(revealed_text(&item), None);
    let item = item.with_correct(AnswerValue::Flag(false));
    assert_eq!(revealed_text(&item).as_deref(), Some("False"));
}
