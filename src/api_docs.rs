use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::list_books,
        api::books::create_book,
        api::books::get_book,
        api::books::update_book,
        api::books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BookSummary,
        )
    ),
    tags(
        (name = "bookshelf", description = "Bookshelf API")
    )
)]
pub struct ApiDoc;
