use super::*;
use crate::state::banner::BannerKind;

fn pdf() -> SelectedFile {
    SelectedFile::new("biology.pdf", "application/pdf")
}

#[test]
fn upload_form_default_is_invalid() {
    let form = UploadForm::default();
    assert!(!form.is_valid());
    assert_eq!(form.validate(), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn selecting_pdf_keeps_file_and_clears_banner() {
    let mut form = UploadForm { banner: Some(Banner::error("old")), ..UploadForm::default() };
    assert!(form.select_file(Some(pdf())));
    assert_eq!(form.file, Some(pdf()));
    assert_eq!(form.banner, None);
}

#[test]
fn selecting_non_pdf_is_rejected() {
    let mut form = UploadForm { user_id: "u1".to_owned(), ..UploadForm::default() };
    assert!(!form.select_file(Some(SelectedFile::new("notes.txt", "text/plain"))));
    assert_eq!(form.file, None);
    assert_eq!(form.banner, Some(Banner::error("Please select a valid PDF file.")));
    assert_eq!(form.validate(), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn non_pdf_selection_discards_previous_pdf() {
    let mut form = UploadForm::default();
    form.select_file(Some(pdf()));
    form.select_file(Some(SelectedFile::new("scan.png", "image/png")));
    assert_eq!(form.file, None);
}

#[test]
fn media_type_must_match_exactly() {
    let mut form = UploadForm::default();
    assert!(!form.select_file(Some(SelectedFile::new("book.pdf", "application/x-pdf"))));
    assert!(!form.select_file(Some(SelectedFile::new("book.pdf", ""))));
}

#[test]
fn clearing_the_file_input_is_rejected() {
    let mut form = UploadForm::default();
    form.select_file(Some(pdf()));
    assert!(!form.select_file(None));
    assert_eq!(form.file, None);
    assert_eq!(form.banner.map(|b| b.kind), Some(BannerKind::Error));
}

#[test]
fn whitespace_user_id_is_invalid() {
    let mut form = UploadForm { user_id: "   ".to_owned(), ..UploadForm::default() };
    form.select_file(Some(pdf()));
    assert!(!form.is_valid());
}

#[test]
fn complete_form_validates() {
    let mut form = UploadForm { user_id: "u1".to_owned(), ..UploadForm::default() };
    form.select_file(Some(pdf()));
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn successful_upload_resets_form() {
    let mut form = UploadForm { user_id: "u1".to_owned(), ..UploadForm::default() };
    form.select_file(Some(pdf()));
    form.begin_submit();
    let ready = form.finish_submit(Ok(MessageResponse {
        message: "Book processed".to_owned(),
        ..MessageResponse::default()
    }));
    assert!(ready);
    assert_eq!(form.user_id, "");
    assert_eq!(form.file, None);
    assert_eq!(form.banner, Some(Banner::success("Book processed")));
}

#[test]
fn failed_upload_keeps_fields_and_reports_error() {
    let mut form = UploadForm { user_id: "u1".to_owned(), ..UploadForm::default() };
    form.select_file(Some(pdf()));
    let ready = form.finish_submit(Err(ApiError::Remote("Failed to upload book".to_owned())));
    assert!(!ready);
    assert_eq!(form.user_id, "u1");
    assert_eq!(form.file, Some(pdf()));
    assert_eq!(form.banner, Some(Banner::error("Failed to upload book")));
}
