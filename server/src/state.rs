//! Shared state for the mock exercise backend.
//!
//! DESIGN
//! ======
//! `MockBackend` is injected into Axum handlers via the `State` extractor.
//! It only remembers which user uploaded which book, so book-context
//! generation and Q&A can be refused until an upload has happened. Nothing is
//! persisted.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Clone is required by Axum; the registry is Arc-wrapped.
#[derive(Clone, Default)]
pub struct MockBackend {
    /// user id -> file name of the last uploaded book.
    books: Arc<RwLock<HashMap<String, String>>>,
}

impl MockBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a processed book; a later upload replaces the earlier one.
    pub async fn record_book(&self, user_id: &str, file_name: &str) {
        self.books
            .write()
            .await
            .insert(user_id.to_owned(), file_name.to_owned());
    }

    pub async fn book_for(&self, user_id: &str) -> Option<String> {
        self.books.read().await.get(user_id).cloned()
    }
}
