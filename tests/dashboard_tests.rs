//! Dashboard, health and routing-shell tests.

mod common;

use axum::http::StatusCode;

use common::{body_text, create_author, create_book, create_genre, create_instance, get, id_of,
    location, test_app};

#[tokio::test]
async fn dashboard_shows_zero_counts_on_an_empty_library() {
    let app = test_app().await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Local Library Home"));
    assert!(page.contains("Books:</strong> 0"));
    assert!(page.contains("Copies:</strong> 0"));
    assert!(page.contains("Copies available:</strong> 0"));
    assert!(page.contains("Authors:</strong> 0"));
    assert!(page.contains("Genres:</strong> 0"));
}

#[tokio::test]
async fn dashboard_counts_reflect_the_catalog() {
    let app = test_app().await;

    let author_url = create_author(&app, "Jane", "Austen").await;
    let genre_url = create_genre(&app, "Romance").await;
    let book_url = create_book(&app, "Emma", &id_of(&author_url), &[&id_of(&genre_url)]).await;
    let book_id = id_of(&book_url);
    create_instance(&app, &book_id, "London+1815", "Available").await;
    create_instance(&app, &book_id, "Dublin+1816", "Loaned").await;

    let page = body_text(get(&app, "/").await).await;
    assert!(page.contains("Books:</strong> 1"));
    assert!(page.contains("Copies:</strong> 2"));
    assert!(page.contains("Copies available:</strong> 1"));
    assert!(page.contains("Authors:</strong> 1"));
    assert!(page.contains("Genres:</strong> 1"));
}

#[tokio::test]
async fn catalog_prefix_redirects_to_the_dashboard() {
    let app = test_app().await;

    let response = get(&app, "/catalog").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app().await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).expect("Should parse JSON");
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn unknown_routes_fall_through_to_the_generic_404() {
    let app = test_app().await;

    let response = get(&app, "/catalog/wizards").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let page = body_text(response).await;
    assert!(page.contains("Page not found"));
}
