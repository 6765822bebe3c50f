//! Placeholder exercise sets for development without a backend.
//!
//! Used by the host server's mock API and by tests that need realistic items.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::net::types::{AnswerValue, Exercise, ExerciseKind, ExerciseType};

const BOOK_PREFIX: &str = "[From Book Context] ";

/// Fabricate `count` items of `exercise_type` about `topic`, numbered from 1.
pub fn mock_exercises(topic: &str, exercise_type: ExerciseType, count: u32, use_book: bool) -> Vec<Exercise> {
    let prefix = if use_book { BOOK_PREFIX } else { "" };
    (1..=count)
        .map(|i| mock_exercise(i, topic, exercise_type, prefix))
        .collect()
}

fn mock_exercise(i: u32, topic: &str, exercise_type: ExerciseType, prefix: &str) -> Exercise {
    let kind = ExerciseKind::from(exercise_type);
    match exercise_type {
        ExerciseType::MultipleChoice => Exercise::new(
            i,
            kind,
            format!("{prefix}Question {i} about {topic}: What is the most important concept related to this topic?"),
        )
        .with_options([
            "Option A: First concept",
            "Option B: Second concept",
            "Option C: Third concept",
            "Option D: Fourth concept",
        ])
        .with_correct(AnswerValue::Text("B".to_owned())),
        ExerciseType::TrueFalse => Exercise::new(
            i,
            kind,
            format!("{prefix}Statement {i}: {topic} is a fundamental concept in this field."),
        )
        .with_correct(AnswerValue::Flag(true)),
        ExerciseType::ShortAnswer => Exercise::new(
            i,
            kind,
            format!("{prefix}Question {i}: Explain the key aspects of {topic} in 2-3 sentences."),
        ),
        ExerciseType::LongQuestions => Exercise::new(
            i,
            kind,
            format!(
                "{prefix}Essay Question {i}: Discuss the importance and applications of {topic}. Provide examples and analyze its impact."
            ),
        ),
        ExerciseType::FillInTheBlanks => Exercise::new(
            i,
            kind,
            format!(
                "{prefix}Complete this sentence about {topic}: The main characteristic of _____ is that it _____ and provides _____."
            ),
        )
        .with_blanks(["[concept]", "[action/property]", "[benefit/result]"]),
    }
}
