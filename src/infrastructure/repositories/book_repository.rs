//! In-memory implementation of BookRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{BookFilter, BookRepository, DomainError};
use crate::models::book::{Book, BookPayload, BookSummary};

/// BookRepository backed by a process-wide `Vec` behind an async lock.
///
/// Insertion order is preserved and doubles as the default listing order.
/// Every operation takes the lock exactly once, so each appears atomic to
/// concurrent requests.
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn add(&self, book: Book) -> Result<(), DomainError> {
        self.books.write().await.push(book);
        Ok(())
    }

    async fn find_all(&self, filter: BookFilter) -> Result<Vec<BookSummary>, DomainError> {
        let books = self.books.read().await;

        if books.is_empty() {
            return Ok(Vec::new());
        }

        // Each filter re-selects from the full collection rather than
        // narrowing the previous result. With several filters supplied, the
        // last one in name/reading/finished order takes effect.
        let mut selected: Vec<&Book> = books.iter().collect();

        if let Some(name) = &filter.name {
            let needle = name.to_lowercase();
            selected = books
                .iter()
                .filter(|book| book.name.to_lowercase().contains(&needle))
                .collect();
        }

        if let Some(reading) = &filter.reading {
            let wanted = reading.parse::<i64>().ok();
            selected = books
                .iter()
                .filter(|book| Some(i64::from(book.reading)) == wanted)
                .collect();
        }

        if let Some(finished) = &filter.finished {
            let wanted = finished.parse::<i64>().ok();
            selected = books
                .iter()
                .filter(|book| Some(i64::from(book.finished)) == wanted)
                .collect();
        }

        Ok(selected.into_iter().map(BookSummary::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        name: String,
        payload: &BookPayload,
    ) -> Result<(), DomainError> {
        let mut books = self.books.write().await;

        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.apply_update(name, payload);
                Ok(())
            }
            None => Err(DomainError::NotFound),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let mut books = self.books.write().await;

        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(())
            }
            None => Err(DomainError::NotFound),
        }
    }
}
