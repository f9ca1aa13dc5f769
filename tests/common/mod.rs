//! Shared helpers for integration tests: an in-memory database with the
//! schema applied, plus request/response plumbing to drive the router
//! without opening a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt; // for `oneshot` method

use carrel_server::{api, config::AppConfig, repository::Repository, AppState};

/// Build the full application router over a fresh in-memory database.
/// A single long-lived connection keeps the in-memory schema alive for
/// the whole test.
pub async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<std::time::Duration>)
        .max_lifetime(None::<std::time::Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("Should create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Should run migrations");

    let state = AppState {
        config: Arc::new(AppConfig::default()),
        repo: Arc::new(Repository::new(pool)),
    };

    api::create_router(state)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Should have Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Last path segment of a canonical URL (the record id).
pub fn id_of(url: &str) -> String {
    url.rsplit('/').next().unwrap().to_string()
}

/// Create an author via the form endpoint, returning its detail URL.
pub async fn create_author(app: &Router, first_name: &str, family_name: &str) -> String {
    let body = format!(
        "first_name={first_name}&family_name={family_name}&date_of_birth=&date_of_death="
    );
    let response = post_form(app, "/catalog/author/create", &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    location(&response)
}

/// Create a genre via the form endpoint, returning its detail URL.
pub async fn create_genre(app: &Router, name: &str) -> String {
    let response = post_form(app, "/catalog/genre/create", &format!("name={name}")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    location(&response)
}

/// Create a book via the form endpoint, returning its detail URL.
pub async fn create_book(
    app: &Router,
    title: &str,
    author_id: &str,
    genre_ids: &[&str],
) -> String {
    let mut body = format!(
        "title={title}&author={author_id}&summary=A+test+summary&isbn=9780000000000"
    );
    for genre_id in genre_ids {
        body.push_str(&format!("&genre={genre_id}"));
    }
    let response = post_form(app, "/catalog/book/create", &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    location(&response)
}

/// Create a book instance via the form endpoint, returning its detail URL.
pub async fn create_instance(app: &Router, book_id: &str, imprint: &str, status: &str) -> String {
    let body = format!("book={book_id}&imprint={imprint}&status={status}&due_back=");
    let response = post_form(app, "/catalog/bookinstance/create", &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    location(&response)
}
