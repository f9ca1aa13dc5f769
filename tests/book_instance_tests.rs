//! Book instance workflow tests: status defaulting, due-date handling,
//! and the guard-free delete path.

mod common;

use axum::http::StatusCode;

use common::{
    body_text, create_author, create_book, create_instance, get, id_of, location, post_form,
    test_app,
};

async fn seeded_book(app: &axum::Router) -> String {
    let author_url = create_author(app, "Jane", "Austen").await;
    let book_url = create_book(app, "Emma", &id_of(&author_url), &[]).await;
    id_of(&book_url)
}

#[tokio::test]
async fn create_instance_persists_and_redirects_to_detail() {
    let app = test_app().await;
    let book_id = seeded_book(&app).await;

    let body = format!("book={book_id}&imprint=London+1815&status=Available&due_back=2026-06-03");
    let response = post_form(&app, "/catalog/bookinstance/create", &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let url = location(&response);
    assert!(url.starts_with("/catalog/bookinstance/"));

    let page = body_text(get(&app, &url).await).await;
    assert!(page.contains("London 1815"));
    assert!(page.contains("Available"));
    assert!(page.contains("Jun 3, 2026"));
    // The owning book is linked.
    assert!(page.contains("Emma"));
}

#[tokio::test]
async fn status_defaults_to_maintenance_when_not_submitted() {
    let app = test_app().await;
    let book_id = seeded_book(&app).await;

    let body = format!("book={book_id}&imprint=London+1815&due_back=");
    let response = post_form(&app, "/catalog/bookinstance/create", &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let page = body_text(get(&app, &location(&response)).await).await;
    assert!(page.contains("Maintenance"));
}

#[tokio::test]
async fn unknown_status_is_a_validation_error() {
    let app = test_app().await;
    let book_id = seeded_book(&app).await;

    let body = format!("book={book_id}&imprint=London+1815&status=Lost&due_back=");
    let response = post_form(&app, "/catalog/bookinstance/create", &body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Invalid status"));

    let list = body_text(get(&app, "/catalog/bookinstances").await).await;
    assert!(list.contains("There are no book instances."));
}

#[tokio::test]
async fn missing_imprint_is_reported_and_book_choice_preserved() {
    let app = test_app().await;
    let book_id = seeded_book(&app).await;

    let body = format!("book={book_id}&imprint=&status=Available&due_back=");
    let response = post_form(&app, "/catalog/bookinstance/create", &body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Imprint must be specified"));
    // The chosen book stays selected in the redisplayed form.
    assert!(page.contains(&format!("value=\"{book_id}\" selected")));
}

#[tokio::test]
async fn instance_delete_needs_no_guard() {
    let app = test_app().await;
    let book_id = seeded_book(&app).await;
    let url = create_instance(&app, &book_id, "London+1815", "Available").await;

    let confirm = body_text(get(&app, &format!("{url}/delete")).await).await;
    assert!(confirm.contains("Do you really want to delete this copy"));

    let response = post_form(
        &app,
        &format!("{url}/delete"),
        &format!("bookinstanceid={}", id_of(&url)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/catalog/bookinstances");
    assert_eq!(get(&app, &url).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_overwrites_the_copy_in_place() {
    let app = test_app().await;
    let book_id = seeded_book(&app).await;
    let url = create_instance(&app, &book_id, "London+1815", "Maintenance").await;

    // Pre-filled form selects the current status.
    let form = body_text(get(&app, &format!("{url}/update")).await).await;
    assert!(form.contains("Update BookInstance"));
    assert!(form.contains("value=\"Maintenance\" selected"));

    let body = format!("book={book_id}&imprint=Dublin+1816&status=Loaned&due_back=2026-09-01");
    let response = post_form(&app, &format!("{url}/update"), &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), url);

    let page = body_text(get(&app, &url).await).await;
    assert!(page.contains("Dublin 1816"));
    assert!(page.contains("Loaned"));
    assert!(page.contains("Sep 1, 2026"));
}

#[tokio::test]
async fn instance_detail_reports_not_found_for_unknown_id() {
    let app = test_app().await;
    assert_eq!(
        get(&app, "/catalog/bookinstance/no-such-id").await.status(),
        StatusCode::NOT_FOUND
    );
}
