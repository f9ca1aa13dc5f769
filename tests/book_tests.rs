//! Book workflow tests: multi-value genre normalization, form redisplay
//! with reference lists, the delete guard, and updates.

mod common;

use axum::http::StatusCode;

use common::{
    body_text, create_author, create_book, create_genre, create_instance, get, id_of, location,
    post_form, test_app,
};

#[tokio::test]
async fn create_book_persists_and_redirects_to_detail() {
    let app = test_app().await;

    let author_url = create_author(&app, "Jane", "Austen").await;
    let url = create_book(&app, "Emma", &id_of(&author_url), &[]).await;
    assert!(url.starts_with("/catalog/book/"));

    let page = body_text(get(&app, &url).await).await;
    assert!(page.contains("Title: Emma"));
    assert!(page.contains("Austen, Jane"));
    assert!(page.contains("9780000000000"));
}

#[tokio::test]
async fn submitted_genres_are_kept_in_order() {
    let app = test_app().await;

    let author_url = create_author(&app, "Jane", "Austen").await;
    // Alphabetically Romance < Satire, submit them in the other order.
    let satire = id_of(&create_genre(&app, "Satire").await);
    let romance = id_of(&create_genre(&app, "Romance").await);

    let url = create_book(&app, "Emma", &id_of(&author_url), &[&satire, &romance]).await;
    let page = body_text(get(&app, &url).await).await;

    let genres_start = page.find("book-genres").expect("genre span present");
    let satire_at = page[genres_start..].find("Satire").expect("Satire shown");
    let romance_at = page[genres_start..].find("Romance").expect("Romance shown");
    assert!(satire_at < romance_at);
}

#[tokio::test]
async fn single_genre_submission_yields_one_genre() {
    let app = test_app().await;

    let author_url = create_author(&app, "Jane", "Austen").await;
    let romance = id_of(&create_genre(&app, "Romance").await);

    let url = create_book(&app, "Emma", &id_of(&author_url), &[&romance]).await;
    let page = body_text(get(&app, &url).await).await;

    let marker = "<span class=\"book-genres\">";
    let start = page.find(marker).expect("genre span present") + marker.len();
    let end = start + page[start..].find("</span>").expect("span closed");
    let span = &page[start..end];
    assert_eq!(span.matches("<a ").count(), 1);
    assert!(span.contains("Romance"));
}

#[tokio::test]
async fn zero_genre_submission_yields_no_genres() {
    let app = test_app().await;

    let author_url = create_author(&app, "Jane", "Austen").await;
    let url = create_book(&app, "Emma", &id_of(&author_url), &[]).await;

    let page = body_text(get(&app, &url).await).await;
    assert!(page.contains("<span class=\"book-genres\"></span>"));
}

#[tokio::test]
async fn invalid_book_submission_redisplays_with_reference_lists() {
    let app = test_app().await;

    create_author(&app, "Jane", "Austen").await;

    // Missing title and ISBN.
    let response = post_form(
        &app,
        "/catalog/book/create",
        "title=&author=&summary=A+story&isbn=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Title must not be empty."));
    assert!(page.contains("Author must not be empty."));
    assert!(page.contains("ISBN must not be empty."));
    // The summary survives sanitized, and the author select is repopulated.
    assert!(page.contains("A story"));
    assert!(page.contains("Austen, Jane"));

    let list = body_text(get(&app, "/catalog/books").await).await;
    assert!(list.contains("There are no books."));
}

#[tokio::test]
async fn book_detail_reports_not_found_for_unknown_id() {
    let app = test_app().await;
    assert_eq!(
        get(&app, "/catalog/book/no-such-id").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn delete_is_refused_while_copies_reference_the_book() {
    let app = test_app().await;

    let author_url = create_author(&app, "Jane", "Austen").await;
    let book_url = create_book(&app, "Emma", &id_of(&author_url), &[]).await;
    let book_id = id_of(&book_url);
    let instance_url = create_instance(&app, &book_id, "London+1815", "Available").await;

    let response = post_form(
        &app,
        &format!("{book_url}/delete"),
        &format!("bookid={book_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Delete the following copies"));
    assert_eq!(get(&app, &book_url).await.status(), StatusCode::OK);

    // Remove the copy; deletion then goes through.
    let response = post_form(
        &app,
        &format!("{instance_url}/delete"),
        &format!("bookinstanceid={}", id_of(&instance_url)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let response = post_form(
        &app,
        &format!("{book_url}/delete"),
        &format!("bookid={book_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/catalog/books");
    assert_eq!(get(&app, &book_url).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_overwrites_fields_and_genre_set_in_place() {
    let app = test_app().await;

    let author_url = create_author(&app, "Jane", "Austen").await;
    let author_id = id_of(&author_url);
    let romance = id_of(&create_genre(&app, "Romance").await);
    let satire = id_of(&create_genre(&app, "Satire").await);

    let url = create_book(&app, "Emma", &author_id, &[&romance]).await;

    // The update form comes back pre-filled with the current genre checked.
    let form = body_text(get(&app, &format!("{url}/update")).await).await;
    assert!(form.contains("Update Book"));
    assert!(form.contains(&format!("value=\"{romance}\" checked")));

    let body = format!(
        "title=Emma+Revised&author={author_id}&summary=A+test+summary&isbn=9780000000000&genre={satire}"
    );
    let response = post_form(&app, &format!("{url}/update"), &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), url);

    let page = body_text(get(&app, &url).await).await;
    assert!(page.contains("Emma Revised"));
    assert!(page.contains("Satire"));
    assert!(!page.contains("Romance"));
}
