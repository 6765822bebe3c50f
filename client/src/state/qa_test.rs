use super::*;

fn asking(question: &str) -> QaForm {
    QaForm { question: question.to_owned(), ..QaForm::default() }
}

#[test]
fn qa_form_default_is_empty() {
    let form = QaForm::default();
    assert!(form.answer.is_none());
    assert!(form.banner.is_none());
    assert!(!form.can_ask(true));
}

#[test]
fn empty_question_is_rejected_first() {
    assert_eq!(asking("  ").validate(false), Err(MISSING_QUESTION_MESSAGE));
    assert_eq!(asking("").validate(true), Err("Please enter a question."));
}

#[test]
fn missing_book_is_rejected() {
    assert_eq!(
        asking("What is osmosis?").validate(false),
        Err("Please upload a book first to ask questions about it.")
    );
}

#[test]
fn question_with_book_validates() {
    let form = asking("What is osmosis?");
    assert_eq!(form.validate(true), Ok(()));
    assert!(form.can_ask(true));
    assert!(!form.can_ask(false));
}

#[test]
fn submit_shortcut_requires_ctrl_enter() {
    assert!(is_submit_shortcut("Enter", true));
    assert!(!is_submit_shortcut("Enter", false));
    assert!(!is_submit_shortcut("a", true));
}

#[test]
fn placeholder_reflects_book_readiness() {
    assert_eq!(question_placeholder(true), "Ask any question about the uploaded book...");
    assert_eq!(question_placeholder(false), "Upload a book first to ask questions");
}

#[test]
fn begin_ask_clears_previous_answer() {
    let mut form = QaForm { answer: Some("old".to_owned()), ..asking("Why?") };
    form.begin_ask();
    assert!(form.loading);
    assert!(form.answer.is_none());
    assert!(form.visible_answer().is_none());
}

#[test]
fn successful_ask_stores_answer_verbatim() {
    let mut form = asking("Why?");
    form.begin_ask();
    form.finish_ask(Ok(AskResponse { answer: Some("  Because\nof light.".to_owned()) }));
    assert!(!form.loading);
    assert_eq!(form.visible_answer(), Some("  Because\nof light."));
    assert_eq!(form.banner, Some(Banner::success("Question answered successfully!")));
}

#[test]
fn failed_ask_reports_error() {
    let mut form = asking("Why?");
    form.begin_ask();
    form.finish_ask(Err(ApiError::Network("Failed to fetch".to_owned())));
    assert!(form.answer.is_none());
    assert_eq!(form.banner, Some(Banner::error("network error: Failed to fetch")));
}
