//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::book::{Book, BookPayload, BookSummary};

/// Filter criteria for book listings.
///
/// `reading` and `finished` are kept as raw query strings: they are matched
/// by numeric coercion against the stored booleans, and a value that does not
/// parse as a number matches nothing.
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Repository trait for the Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Append a book to the collection
    async fn add(&self, book: Book) -> Result<(), DomainError>;

    /// List books matching the filter, projected for the list endpoint
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<BookSummary>, DomainError>;

    /// Find a book by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError>;

    /// Replace the mutable fields of the book with the given id in place
    async fn update(
        &self,
        id: &str,
        name: String,
        payload: &BookPayload,
    ) -> Result<(), DomainError>;

    /// Remove the book with the given id
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
