use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::infrastructure::AppState;
use crate::models::book::{Book, BookPayload};

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListBooksQuery {
    /// Case-insensitive substring match on the book name
    pub name: Option<String>,
    /// Matches books whose `reading` flag coerces to this number
    pub reading: Option<String>,
    /// Matches books whose `finished` flag coerces to this number
    pub finished: Option<String>,
}

impl From<ListBooksQuery> for crate::domain::BookFilter {
    fn from(query: ListBooksQuery) -> Self {
        Self {
            name: query.name,
            reading: query.reading,
            finished: query.finished,
        }
    }
}

fn fail(code: StatusCode, message: &str) -> Response {
    (
        code,
        Json(json!({ "status": "fail", "message": message })),
    )
        .into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "message": message })),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added, id returned under data.bookId"),
        (status = 400, description = "Missing name or readPage exceeds pageCount")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> impl IntoResponse {
    // name presence is checked before the page-count invariant; a payload
    // missing both reports the missing name
    let Some(name) = payload.name.clone() else {
        return fail(StatusCode::BAD_REQUEST, "name is required to add a book");
    };

    if payload.read_page > payload.page_count {
        return fail(
            StatusCode::BAD_REQUEST,
            "readPage must not exceed pageCount",
        );
    }

    let book = Book::create(name, &payload);
    let id = book.id.clone();

    if let Err(e) = state.book_repo.add(book).await {
        tracing::error!("Failed to store book: {}", e);
        return internal_error("failed to add the book");
    }

    // Read the id back to confirm the record actually landed in the store
    match state.book_repo.find_by_id(&id).await {
        Ok(Some(_)) => (
            StatusCode::CREATED,
            Json(json!({
                "status": "success",
                "message": "book added successfully",
                "data": { "bookId": id }
            })),
        )
            .into_response(),
        _ => internal_error("failed to add the book"),
    }
}

#[utoipa::path(
    get,
    path = "/books",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Books projected to id, name and publisher")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> impl IntoResponse {
    match state.book_repo.find_all(query.into()).await {
        Ok(books) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "data": { "books": books }
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to list books: {}", e);
            internal_error("failed to list books")
        }
    }
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Full book record under data.book", body = Book),
        (status = 404, description = "No book with the given id")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.book_repo.find_by_id(&id).await {
        Ok(Some(book)) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "data": { "book": book }
            })),
        )
            .into_response(),
        Ok(None) => fail(StatusCode::NOT_FOUND, "book not found"),
        Err(e) => {
            tracing::error!("Failed to fetch book {}: {}", id, e);
            internal_error("failed to fetch the book")
        }
    }
}

#[utoipa::path(
    put,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated"),
        (status = 400, description = "Missing name or readPage exceeds pageCount"),
        (status = 404, description = "No book with the given id")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> impl IntoResponse {
    // Payload validation runs before the existence check: an invalid payload
    // against an unknown id reports the payload error, not 404
    let Some(name) = payload.name.clone() else {
        return fail(
            StatusCode::BAD_REQUEST,
            "name is required to update the book",
        );
    };

    if payload.read_page > payload.page_count {
        return fail(
            StatusCode::BAD_REQUEST,
            "readPage must not exceed pageCount",
        );
    }

    match state.book_repo.update(&id, name, &payload).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "book updated successfully"
            })),
        )
            .into_response(),
        Err(crate::domain::DomainError::NotFound) => {
            fail(StatusCode::NOT_FOUND, "update failed, id not found")
        }
        Err(e) => {
            tracing::error!("Failed to update book {}: {}", id, e);
            internal_error("failed to update the book")
        }
    }
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book removed"),
        (status = 404, description = "No book with the given id")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.book_repo.delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "book deleted successfully"
            })),
        )
            .into_response(),
        Err(crate::domain::DomainError::NotFound) => {
            fail(StatusCode::NOT_FOUND, "delete failed, id not found")
        }
        Err(e) => {
            tracing::error!("Failed to delete book {}: {}", id, e);
            internal_error("failed to delete the book")
        }
    }
}
