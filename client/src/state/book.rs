//! Cross-panel book readiness.
//!
//! DESIGN
//! ======
//! Owned by `App` and provided as an `RwSignal<BookState>`. Only the upload
//! panel writes it, through `begin_upload`/`finish_upload`; the generation and
//! Q&A panels read `has_book`. The flag is optimistic: nothing re-checks it
//! against the backend.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

/// Fixed user identifier the generation and Q&A panels send.
pub const DEMO_USER_ID: &str = "demo-user-123";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookState {
    /// A book upload has completed successfully and was not followed by a failed one.
    pub has_book: bool,
    pub is_uploading: bool,
}

/// Badge shown in the page header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookStatus {
    Processing,
    Ready,
    Missing,
}

impl BookStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing book...",
            Self::Ready => "Book ready",
            Self::Missing => "No book uploaded",
        }
    }

    pub fn class_modifier(self) -> &'static str {
        match self {
            Self::Processing => "status-indicator--processing",
            Self::Ready => "status-indicator--ready",
            Self::Missing => "status-indicator--missing",
        }
    }
}

impl BookState {
    pub fn set_uploading(&mut self, uploading: bool) {
        self.is_uploading = uploading;
    }

    /// Record the outcome of an upload. A failure revokes an earlier success.
    pub fn set_has_book(&mut self, ready: bool) {
        self.has_book = ready;
    }

    /// Uploading takes precedence over readiness.
    pub fn status(&self) -> BookStatus {
        if self.is_uploading {
            BookStatus::Processing
        } else if self.has_book {
            BookStatus::Ready
        } else {
            BookStatus::Missing
        }
    }
}
