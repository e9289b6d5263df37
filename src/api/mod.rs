pub mod books;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/", get(books::list_books))
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state)
}
