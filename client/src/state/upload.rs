//! Book upload form state.
//!
//! The browser `File` handle itself is not stored here; the component keeps it
//! beside this model and only sends it once `validate` passes.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use super::banner::Banner;
use crate::net::api::ApiError;
use crate::net::types::MessageResponse;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const INVALID_FILE_MESSAGE: &str = "Please select a valid PDF file.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Metadata of the file chosen in the file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Media type declared by the browser, e.g. `application/pdf`.
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self { name: name.into(), media_type: media_type.into() }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub user_id: String,
    pub file: Option<SelectedFile>,
    pub banner: Option<Banner>,
}

impl UploadForm {
    /// Apply a file-input change. Returns whether the selection was kept;
    /// anything that is not a PDF is discarded with an error banner.
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> bool {
        match file {
            Some(file) if file.is_pdf() => {
                self.file = Some(file);
                self.banner = None;
                true
            }
            _ => {
                self.file = None;
                self.banner = Some(Banner::error(INVALID_FILE_MESSAGE));
                false
            }
        }
    }

    /// Whether the submit button is enabled.
    pub fn is_valid(&self) -> bool {
        !self.user_id.trim().is_empty() && self.file.is_some()
    }

    /// Check required fields before sending.
    ///
    /// # Errors
    ///
    /// Returns the banner message when the identifier or file is missing.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.is_valid() { Ok(()) } else { Err(MISSING_FIELDS_MESSAGE) }
    }

    pub fn begin_submit(&mut self) {
        self.banner = None;
    }

    /// Reduce the upload outcome into the form. Returns the readiness value to
    /// report to the parent. Success clears both fields.
    pub fn finish_submit(&mut self, result: Result<MessageResponse, ApiError>) -> bool {
        match result {
            Ok(resp) => {
                self.banner = Some(Banner::success(resp.message));
                self.user_id.clear();
                self.file = None;
                true
            }
            Err(e) => {
                self.banner = Some(Banner::error(e.to_string()));
                false
            }
        }
    }
}
