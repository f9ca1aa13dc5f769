//! Book controllers

use axum::{
    extract::{Path, RawForm, State},
    response::{IntoResponse, Response},
};
use tokio::try_join;

use crate::{
    error::{AppError, AppResult},
    forms::{FormData, FormReport},
    models::{Book, NewBook},
    views::books::{BookDeleteView, BookDetailView, BookFormView, BookListView},
    AppState,
};

/// Validation pipeline for book create and update submissions. The genre
/// field is normalized to a sequence before the rules run, so zero, one
/// or many submitted values all validate the same way.
fn validate(data: &FormData) -> FormReport {
    let mut form = FormReport::new();
    form.field_list("genre", data.all("genre"));
    form.field("title", data.first("title"))
        .trim()
        .required("Title must not be empty.")
        .escape()
        .done();
    form.field("author", data.first("author"))
        .trim()
        .required("Author must not be empty.")
        .escape()
        .done();
    form.field("summary", data.first("summary"))
        .trim()
        .required("Summary must not be empty.")
        .escape()
        .done();
    form.field("isbn", data.first("isbn"))
        .trim()
        .required("ISBN must not be empty.")
        .escape()
        .done();
    form
}

fn new_book(form: &FormReport) -> NewBook {
    NewBook {
        title: form.value("title").to_string(),
        author_id: form.value("author").to_string(),
        summary: form.value("summary").to_string(),
        isbn: form.value("isbn").to_string(),
        genre_ids: form.list("genre").to_vec(),
    }
}

/// GET /catalog/books
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let books = state.repo.books.list().await?;
    Ok(BookListView { books }.render().into_response())
}

/// GET /catalog/book/:id
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let (book, instances) = try_join!(
        state.repo.books.get(&id),
        state.repo.book_instances.list_for_book(&id),
    )?;

    let book = book.ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

    Ok(BookDetailView { book, instances }.render().into_response())
}

/// GET /catalog/book/create — reference lists populate the selects.
pub async fn create_form(State(state): State<AppState>) -> AppResult<Response> {
    let (authors, genres) = try_join!(state.repo.authors.list(), state.repo.genres.list())?;

    Ok(BookFormView {
        title: "Create Book",
        form: FormReport::new(),
        authors,
        genres,
    }
    .render()
    .into_response())
}

/// POST /catalog/book/create
pub async fn create_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        let (authors, genres) = try_join!(state.repo.authors.list(), state.repo.genres.list())?;
        return Ok(BookFormView {
            title: "Create Book",
            form,
            authors,
            genres,
        }
        .render()
        .into_response());
    }

    let book = state.repo.books.insert(&new_book(&form)).await?;
    Ok(super::found(&book.url()))
}

/// GET /catalog/book/:id/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let (book, instances) = try_join!(
        state.repo.books.get(&id),
        state.repo.book_instances.list_for_book(&id),
    )?;

    let Some(book) = book else {
        return Ok(super::found("/catalog/books"));
    };

    Ok(BookDeleteView { book, instances }.render().into_response())
}

/// POST /catalog/book/:id/delete — target id comes from the body.
pub async fn delete_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let id = data
        .first("bookid")
        .ok_or_else(|| AppError::BadRequest("Missing book id".to_string()))?
        .to_string();

    let (book, instances) = try_join!(
        state.repo.books.get(&id),
        state.repo.book_instances.list_for_book(&id),
    )?;

    let Some(book) = book else {
        return Ok(super::found("/catalog/books"));
    };

    // Referential guard: copies still point here, refuse and show them.
    if !instances.is_empty() {
        return Ok(BookDeleteView { book, instances }.render().into_response());
    }

    state.repo.books.delete(&id).await?;
    Ok(super::found("/catalog/books"))
}

/// GET /catalog/book/:id/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let (book, authors, genres) = try_join!(
        state.repo.books.get(&id),
        state.repo.authors.list(),
        state.repo.genres.list(),
    )?;

    let book = book.ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

    Ok(BookFormView {
        title: "Update Book",
        form: seed_form(&book),
        authors,
        genres,
    }
    .render()
    .into_response())
}

/// POST /catalog/book/:id/update
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        let (authors, genres) = try_join!(state.repo.authors.list(), state.repo.genres.list())?;
        return Ok(BookFormView {
            title: "Update Book",
            form,
            authors,
            genres,
        }
        .render()
        .into_response());
    }

    state
        .repo
        .books
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

    state.repo.books.update(&id, &new_book(&form)).await?;
    Ok(super::found(&format!("/catalog/book/{}", id)))
}

fn seed_form(book: &Book) -> FormReport {
    let mut form = FormReport::new();
    form.set_value("title", book.title.clone());
    form.set_value("author", book.author_id.clone());
    form.set_value("summary", book.summary.clone());
    form.set_value("isbn", book.isbn.clone());
    form.set_list("genre", book.genres.iter().map(|g| g.id.clone()).collect());
    form
}
