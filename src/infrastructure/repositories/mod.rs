//! In-memory repository implementations

pub mod book_repository;

pub use book_repository::InMemoryBookRepository;
