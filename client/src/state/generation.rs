//! Exercise generation form state.
//!
//! DESIGN
//! ======
//! The generate banner and the save banner are independent: saving never
//! touches the generate outcome and vice versa. The exercise list is replaced
//! wholesale on every generation attempt.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use super::banner::Banner;
use crate::net::api::ApiError;
use crate::net::types::{Exercise, ExerciseType, GenerateResponse, MessageResponse};

/// Question counts offered by the form. Closed set.
pub const QUESTION_COUNTS: [u32; 4] = [3, 5, 10, 15];
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

pub const MISSING_TOPIC_MESSAGE: &str = "Please enter a topic.";
pub const BOOK_REQUIRED_MESSAGE: &str = "Please upload a book first to use book context.";
pub const SAVED_MESSAGE: &str = "Exercises saved successfully!";

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationForm {
    pub topic: String,
    pub exercise_type: ExerciseType,
    pub num_questions: u32,
    pub grade: String,
    pub subject: String,
    pub sub_topic: String,
    pub loading: bool,
    /// `None` until a generation succeeds; cleared when the next one starts.
    pub exercises: Option<Vec<Exercise>>,
    pub banner: Option<Banner>,
    pub save_banner: Option<Banner>,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            exercise_type: ExerciseType::default(),
            num_questions: DEFAULT_QUESTION_COUNT,
            grade: String::new(),
            subject: String::new(),
            sub_topic: String::new(),
            loading: false,
            exercises: None,
            banner: None,
            save_banner: None,
        }
    }
}

/// Success banner text, e.g. "Generated 5 true/false exercise(s) successfully!".
pub fn generated_message(count: usize, exercise_type: ExerciseType) -> String {
    format!(
        "Generated {count} {} exercise(s) successfully!",
        exercise_type.label().to_lowercase()
    )
}

/// Parse a question-count `<select>` value, keeping only offered counts.
pub fn parse_question_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|n| QUESTION_COUNTS.contains(n))
}

impl GenerationForm {
    /// Both generate buttons are enabled only with a topic and no request in flight.
    pub fn can_generate(&self) -> bool {
        !self.loading && !self.topic.trim().is_empty()
    }

    /// Check local prerequisites for one generate action.
    ///
    /// # Errors
    ///
    /// Returns the banner message when the topic is empty, or when book
    /// context is requested without a ready book.
    pub fn validate_generate(&self, use_book_context: bool, has_book: bool) -> Result<(), &'static str> {
        if self.topic.trim().is_empty() {
            return Err(MISSING_TOPIC_MESSAGE);
        }
        if use_book_context && !has_book {
            return Err(BOOK_REQUIRED_MESSAGE);
        }
        Ok(())
    }

    pub fn begin_generate(&mut self) {
        self.loading = true;
        self.banner = None;
        self.exercises = None;
    }

    pub fn finish_generate(&mut self, result: Result<GenerateResponse, ApiError>) {
        self.loading = false;
        match result {
            Ok(resp) => {
                let items = resp.exercises.into_exercises();
                self.banner = Some(Banner::success(generated_message(items.len(), self.exercise_type)));
                self.exercises = Some(items);
            }
            Err(e) => self.banner = Some(Banner::error(e.to_string())),
        }
    }

    /// Save is offered once a generation has produced a list.
    pub fn can_save(&self) -> bool {
        self.exercises.is_some()
    }

    pub fn begin_save(&mut self) {
        self.save_banner = None;
    }

    pub fn finish_save(&mut self, result: Result<MessageResponse, ApiError>) {
        self.save_banner = Some(match result {
            Ok(_) => Banner::success(SAVED_MESSAGE),
            Err(e) => Banner::error(e.to_string()),
        });
    }
}
