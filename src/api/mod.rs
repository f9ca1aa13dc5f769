//! Route handlers (controllers), one module per entity, plus the router.
//!
//! Write paths follow one shape: decode the form body, run the entity's
//! validation pipeline, re-render the form with accumulated errors on
//! failure, persist and redirect to the canonical URL on success.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod index;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{views, AppState};

/// 302 Found redirect; form submissions land on the record's page.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Fallback for routes that match nothing.
async fn fallback_404() -> Response {
    (StatusCode::NOT_FOUND, views::not_found_page()).into_response()
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/", get(index::catalog_home))
        // Authors
        .route("/authors", get(authors::list))
        .route(
            "/author/create",
            get(authors::create_form).post(authors::create_submit),
        )
        .route("/author/:id", get(authors::detail))
        .route(
            "/author/:id/delete",
            get(authors::delete_form).post(authors::delete_submit),
        )
        .route(
            "/author/:id/update",
            get(authors::update_form).post(authors::update_submit),
        )
        // Books
        .route("/books", get(books::list))
        .route(
            "/book/create",
            get(books::create_form).post(books::create_submit),
        )
        .route("/book/:id", get(books::detail))
        .route(
            "/book/:id/delete",
            get(books::delete_form).post(books::delete_submit),
        )
        .route(
            "/book/:id/update",
            get(books::update_form).post(books::update_submit),
        )
        // Book instances
        .route("/bookinstances", get(book_instances::list))
        .route(
            "/bookinstance/create",
            get(book_instances::create_form).post(book_instances::create_submit),
        )
        .route("/bookinstance/:id", get(book_instances::detail))
        .route(
            "/bookinstance/:id/delete",
            get(book_instances::delete_form).post(book_instances::delete_submit),
        )
        .route(
            "/bookinstance/:id/update",
            get(book_instances::update_form).post(book_instances::update_submit),
        )
        // Genres
        .route("/genres", get(genres::list))
        .route(
            "/genre/create",
            get(genres::create_form).post(genres::create_submit),
        )
        .route("/genre/:id", get(genres::detail))
        .route(
            "/genre/:id/delete",
            get(genres::delete_form).post(genres::delete_submit),
        )
        .route(
            "/genre/:id/update",
            get(genres::update_form).post(genres::update_submit),
        );

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(index::health_check))
        .nest("/catalog", catalog)
        .fallback(fallback_404)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
