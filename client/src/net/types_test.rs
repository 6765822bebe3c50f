use super::*;

// =============================================================
// ExerciseKind
// =============================================================

#[test]
fn exercise_kind_parses_known_labels() {
    assert_eq!(ExerciseKind::from_label("Multiple Choice"), ExerciseKind::MultipleChoice);
    assert_eq!(ExerciseKind::from_label("True/False"), ExerciseKind::TrueFalse);
    assert_eq!(ExerciseKind::from_label("Short Answer"), ExerciseKind::ShortAnswer);
    assert_eq!(ExerciseKind::from_label("Long Questions"), ExerciseKind::LongQuestions);
    assert_eq!(ExerciseKind::from_label("Fill in the Blanks"), ExerciseKind::FillInTheBlanks);
    assert_eq!(ExerciseKind::from_label("Text"), ExerciseKind::Text);
}

#[test]
fn exercise_kind_keeps_unknown_label() {
    let kind = ExerciseKind::from_label("Essay");
    assert_eq!(kind, ExerciseKind::Other("Essay".to_owned()));
    assert_eq!(kind.label(), "Essay");
}

#[test]
fn exercise_kind_labels_are_case_sensitive() {
    assert_eq!(
        ExerciseKind::from_label("multiple choice"),
        ExerciseKind::Other("multiple choice".to_owned())
    );
}

#[test]
fn exercise_kind_from_exercise_type_matches_label() {
    for ty in ExerciseType::ALL {
        assert_eq!(ExerciseKind::from(ty).label(), ty.label());
    }
}

// =============================================================
// ExerciseType
// =============================================================

#[test]
fn exercise_type_default_is_multiple_choice() {
    assert_eq!(ExerciseType::default(), ExerciseType::MultipleChoice);
}

#[test]
fn exercise_type_from_label_round_trips_all() {
    for ty in ExerciseType::ALL {
        assert_eq!(ExerciseType::from_label(ty.label()), Some(ty));
    }
    assert_eq!(ExerciseType::from_label("Essay"), None);
}

#[test]
fn exercise_type_serializes_as_label() {
    let json = serde_json::to_value(ExerciseType::FillInTheBlanks).unwrap();
    assert_eq!(json, serde_json::json!("Fill in the Blanks"));
}

// =============================================================
// Exercise
// =============================================================

#[test]
fn exercise_parses_multiple_choice_item() {
    let item: Exercise = serde_json::from_value(serde_json::json!({
        "id": 1,
        "type": "Multiple Choice",
        "question": "Pick one",
        "options": ["A", "B", "C", "D"],
        "correct": "B"
    }))
    .unwrap();
    assert_eq!(item.kind(), ExerciseKind::MultipleChoice);
    assert_eq!(item.options().len(), 4);
    assert_eq!(item.correct(), Some(AnswerValue::Text("B".to_owned())));
    assert_eq!(item.field("difficulty"), None);
}

#[test]
fn exercise_parses_boolean_correct_value() {
    let item: Exercise = serde_json::from_value(serde_json::json!({
        "id": 2,
        "type": "True/False",
        "question": "Water is wet.",
        "correct": true
    }))
    .unwrap();
    assert_eq!(item.correct(), Some(AnswerValue::Flag(true)));
    assert_eq!(item.revealed_answer().map(|a| a.to_string()), Some("True".to_owned()));
}

#[test]
fn exercise_without_type_is_untyped() {
    let item: Exercise = serde_json::from_value(serde_json::json!({"question": "Bare"})).unwrap();
    assert_eq!(item.kind(), ExerciseKind::Untyped);
    assert!(item.id().is_null());
}

#[test]
fn exercise_preserves_unknown_fields_when_resent() {
    let original = serde_json::json!({
        "id": 3,
        "type": "Essay",
        "question": "Discuss.",
        "difficulty": "hard",
        "rubric": {"points": 10}
    });
    let item: Exercise = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(item.field("difficulty"), Some(&serde_json::json!("hard")));
    assert_eq!(item.kind(), ExerciseKind::Other("Essay".to_owned()));
    assert_eq!(serde_json::to_value(&item).unwrap(), original);
}

#[test]
fn exercise_list_resends_absent_null_and_empty_fields_unchanged() {
    let original = serde_json::json!([
        {"id": 1, "question": "Untyped item"},
        {"id": 2, "type": "Multiple Choice", "question": "Q", "options": [], "correct": null},
        {"type": "Short Answer", "id": null, "question": "Q3"}
    ]);
    let items: Vec<Exercise> = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(items[0].kind(), ExerciseKind::Untyped);
    assert!(items[1].options().is_empty());
    assert_eq!(items[1].correct(), None);
    assert!(items[2].id().is_null());
    assert_eq!(serde_json::to_value(&items).unwrap(), original);
}

#[test]
fn non_string_type_tag_reads_as_other() {
    let item: Exercise = serde_json::from_value(serde_json::json!({"type": 7, "question": "Q"})).unwrap();
    assert_eq!(item.kind(), ExerciseKind::Other("7".to_owned()));
}

#[test]
fn revealed_answer_prefers_answer_over_correct() {
    let item = Exercise::new(1, ExerciseKind::TrueFalse, "Q")
        .with_correct(AnswerValue::Flag(false))
        .with_answer(AnswerValue::Text("True".to_owned()));
    assert_eq!(item.revealed_answer(), Some(AnswerValue::Text("True".to_owned())));
}

#[test]
fn revealed_answer_skips_blank_text() {
    let item = Exercise::new(1, ExerciseKind::FillInTheBlanks, "Q").with_answer(AnswerValue::Text("  ".to_owned()));
    assert_eq!(item.revealed_answer(), None);
}

// =============================================================
// ExercisesPayload
// =============================================================

#[test]
fn string_payload_normalizes_to_single_text_item() {
    let resp: GenerateResponse =
        serde_json::from_value(serde_json::json!({"exercises": "1. What is light?\n2. Why?"})).unwrap();
    let items = resp.exercises.into_exercises();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind(), ExerciseKind::Text);
    assert_eq!(items[0].question(), "1. What is light?\n2. Why?");
    assert_eq!(items[0].id(), &serde_json::json!(1));
}

#[test]
fn empty_string_payload_still_yields_one_item() {
    let items = ExercisesPayload::Text(String::new()).into_exercises();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].question(), "");
}

#[test]
fn list_payload_is_returned_in_order() {
    let resp: GenerateResponse = serde_json::from_value(serde_json::json!({
        "exercises": [
            {"id": 1, "type": "Short Answer", "question": "first"},
            {"id": 2, "type": "Short Answer", "question": "second"}
        ]
    }))
    .unwrap();
    let items = resp.exercises.into_exercises();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].question(), "first");
    assert_eq!(items[1].question(), "second");
}

#[test]
fn missing_exercises_field_is_empty_list() {
    let resp: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(resp.exercises.into_exercises().is_empty());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn generate_request_uses_backend_field_names() {
    let req = GenerateRequest {
        user_id: "demo-user-123",
        topic: "Photosynthesis",
        exercise_type: ExerciseType::TrueFalse,
        num_questions: 5,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "userId": "demo-user-123",
            "topic": "Photosynthesis",
            "exercise_type": "True/False",
            "num_questions": 5
        })
    );
}

#[test]
fn ask_request_uses_backend_field_names() {
    let req = AskRequest { user_id: "u1", question: "Why?" };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"userId": "u1", "question": "Why?"})
    );
}

#[test]
fn save_request_mixes_camel_and_snake_case() {
    let items = vec![Exercise::new(1, ExerciseKind::ShortAnswer, "Explain.")];
    let req = SaveRequest {
        exercise_type: ExerciseType::ShortAnswer,
        exercise_data: &items,
        grade: "7",
        subject: "Biology",
        topic: "Cells",
        sub_topic: "",
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "exerciseType": "Short Answer",
            "exerciseData": [{"id": 1, "type": "Short Answer", "question": "Explain."}],
            "grade": "7",
            "subject": "Biology",
            "topic": "Cells",
            "sub_topic": ""
        })
    );
}

// =============================================================
// Responses
// =============================================================

#[test]
fn message_response_tolerates_missing_message() {
    let resp: MessageResponse = serde_json::from_value(serde_json::json!({"book_id": 9})).unwrap();
    assert_eq!(resp.message, "");
    assert_eq!(resp.extra.get("book_id"), Some(&serde_json::json!(9)));
}

#[test]
fn ask_response_reads_answer() {
    let resp: AskResponse = serde_json::from_value(serde_json::json!({"answer": "Because."})).unwrap();
    assert_eq!(resp.answer.as_deref(), Some("Because."));
}
