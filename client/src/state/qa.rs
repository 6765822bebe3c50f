//! Q&A form state.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

use super::banner::Banner;
use crate::net::api::ApiError;
use crate::net::types::AskResponse;

pub const MISSING_QUESTION_MESSAGE: &str = "Please enter a question.";
pub const BOOK_REQUIRED_MESSAGE: &str = "Please upload a book first to ask questions about it.";
pub const ANSWERED_MESSAGE: &str = "Question answered successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QaForm {
    pub question: String,
    pub loading: bool,
    pub answer: Option<String>,
    pub banner: Option<Banner>,
}

/// Ctrl+Enter submits from the question field.
pub fn is_submit_shortcut(key: &str, ctrl: bool) -> bool {
    ctrl && key == "Enter"
}

pub fn question_placeholder(has_book: bool) -> &'static str {
    if has_book {
        "Ask any question about the uploaded book..."
    } else {
        "Upload a book first to ask questions"
    }
}

impl QaForm {
    pub fn can_ask(&self, has_book: bool) -> bool {
        !self.loading && has_book && !self.question.trim().is_empty()
    }

    /// Question text is checked before book readiness.
    ///
    /// # Errors
    ///
    /// Returns the banner message for the first unmet prerequisite.
    pub fn validate(&self, has_book: bool) -> Result<(), &'static str> {
        if self.question.trim().is_empty() {
            return Err(MISSING_QUESTION_MESSAGE);
        }
        if !has_book {
            return Err(BOOK_REQUIRED_MESSAGE);
        }
        Ok(())
    }

    pub fn begin_ask(&mut self) {
        self.loading = true;
        self.banner = None;
        self.answer = None;
    }

    pub fn finish_ask(&mut self, result: Result<AskResponse, ApiError>) {
        self.loading = false;
        match result {
            Ok(resp) => {
                self.answer = resp.answer;
                self.banner = Some(Banner::success(ANSWERED_MESSAGE));
            }
            Err(e) => self.banner = Some(Banner::error(e.to_string())),
        }
    }

    /// Answer to display; hidden while a request is in flight.
    pub fn visible_answer(&self) -> Option<&str> {
        if self.loading {
            return None;
        }
        self.answer.as_deref().filter(|a| !a.is_empty())
    }
}
