//! Dashboard and liveness endpoints

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tokio::try_join;

use crate::{error::AppResult, views::IndexView, AppState};

/// GET / — the dashboard: five independent counts fetched concurrently;
/// the first failed count aborts the request.
pub async fn index(State(state): State<AppState>) -> AppResult<Response> {
    let repo = &state.repo;
    let (book_count, book_instance_count, book_instance_available_count, author_count, genre_count) =
        try_join!(
            repo.books.count(),
            repo.book_instances.count(),
            repo.book_instances.count_available(),
            repo.authors.count(),
            repo.genres.count(),
        )?;

    Ok(IndexView {
        book_count,
        book_instance_count,
        book_instance_available_count,
        author_count,
        genre_count,
    }
    .render()
    .into_response())
}

/// GET /catalog — the prefix has no page of its own.
pub async fn catalog_home() -> Response {
    super::found("/")
}

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
