//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::BookRepository;
use crate::infrastructure::InMemoryBookRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
}

impl AppState {
    /// Create a new AppState with a fresh, empty in-memory store
    pub fn new() -> Self {
        Self {
            book_repo: Arc::new(InMemoryBookRepository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
