use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Length of generated book identifiers.
const ID_LENGTH: usize = 16;

/// A book record as held in the store and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i64,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

/// Request body for creating or updating a book.
///
/// `name` stays optional so its presence can be checked explicitly; every
/// other field defaults when absent and is otherwise unvalidated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub page_count: i64,
    #[serde(default)]
    pub read_page: i64,
    #[serde(default)]
    pub reading: bool,
}

/// Projection used by the list endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl Book {
    /// Build a fresh record from a validated payload: generates the id,
    /// derives `finished` from the page counts and stamps both timestamps.
    pub fn create(name: String, payload: &BookPayload) -> Self {
        let now = Utc::now().to_rfc3339();

        Self {
            id: generate_id(),
            name,
            year: payload.year,
            author: payload.author.clone(),
            summary: payload.summary.clone(),
            publisher: payload.publisher.clone(),
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.page_count == payload.read_page,
            reading: payload.reading,
            inserted_at: now.clone(),
            updated_at: now,
        }
    }

    /// Replace the mutable fields in place and stamp `updated_at`.
    ///
    /// `id` and `inserted_at` never change. `finished` keeps its
    /// creation-time value and is not recomputed from the new page counts.
    pub fn apply_update(&mut self, name: String, payload: &BookPayload) {
        self.name = name;
        self.year = payload.year;
        self.author = payload.author.clone();
        self.summary = payload.summary.clone();
        self.publisher = payload.publisher.clone();
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.updated_at = Utc::now().to_rfc3339();
    }
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Opaque 16-character alphanumeric identifier. Uniqueness is probabilistic;
/// the store does not check for collisions.
fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}
