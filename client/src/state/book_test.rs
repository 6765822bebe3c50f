use super::*;

#[test]
fn book_state_default_has_no_book() {
    let state = BookState::default();
    assert!(!state.has_book);
    assert!(!state.is_uploading);
    assert_eq!(state.status(), BookStatus::Missing);
}

#[test]
fn successful_upload_marks_book_ready() {
    let mut state = BookState::default();
    state.set_has_book(true);
    assert!(state.has_book);
    assert_eq!(state.status(), BookStatus::Ready);
}

#[test]
fn failed_upload_revokes_ready_book() {
    let mut state = BookState::default();
    state.set_has_book(true);
    state.set_has_book(false);
    assert!(!state.has_book);
    assert_eq!(state.status(), BookStatus::Missing);
}

#[test]
fn uploading_status_wins_over_ready() {
    let mut state = BookState::default();
    state.set_has_book(true);
    state.set_uploading(true);
    assert_eq!(state.status(), BookStatus::Processing);
    state.set_uploading(false);
    assert_eq!(state.status(), BookStatus::Ready);
}

#[test]
fn status_labels() {
    assert_eq!(BookStatus::Processing.label(), "Processing book...");
    assert_eq!(BookStatus::Ready.label(), "Book ready");
    assert_eq!(BookStatus::Missing.label(), "No book uploaded");
}

#[test]
fn demo_user_id_is_fixed() {
    assert_eq!(DEMO_USER_ID, "demo-user-123");
}
