//! Genre controllers

use axum::{
    extract::{Path, RawForm, State},
    response::{IntoResponse, Response},
};
use tokio::try_join;

use crate::{
    error::{AppError, AppResult},
    forms::{FormData, FormReport},
    views::genres::{GenreDeleteView, GenreDetailView, GenreFormView, GenreListView},
    AppState,
};

/// Validation pipeline for genre create and update submissions.
fn validate(data: &FormData) -> FormReport {
    let mut form = FormReport::new();
    form.field("name", data.first("name"))
        .trim()
        .min_length(3, "Genre name must contain at least 3 characters")
        .max_length(100, "Genre name must not exceed 100 characters")
        .escape()
        .done();
    form
}

/// GET /catalog/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let genres = state.repo.genres.list().await?;
    Ok(GenreListView { genres }.render().into_response())
}

/// GET /catalog/genre/:id
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let (genre, books) = try_join!(
        state.repo.genres.get(&id),
        state.repo.books.list_by_genre(&id),
    )?;

    let genre = genre.ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    Ok(GenreDetailView { genre, books }.render().into_response())
}

/// GET /catalog/genre/create
pub async fn create_form() -> Response {
    GenreFormView {
        title: "Create Genre",
        form: FormReport::new(),
    }
    .render()
    .into_response()
}

/// POST /catalog/genre/create
pub async fn create_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        return Ok(GenreFormView {
            title: "Create Genre",
            form,
        }
        .render()
        .into_response());
    }

    // Application-level uniqueness: an existing genre with the same name
    // wins over inserting a duplicate.
    let name = form.value("name");
    if let Some(existing) = state.repo.genres.find_by_name(name).await? {
        return Ok(super::found(&existing.url()));
    }

    let genre = state.repo.genres.insert(name).await?;
    Ok(super::found(&genre.url()))
}

/// GET /catalog/genre/:id/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let (genre, books) = try_join!(
        state.repo.genres.get(&id),
        state.repo.books.list_by_genre(&id),
    )?;

    let Some(genre) = genre else {
        return Ok(super::found("/catalog/genres"));
    };

    Ok(GenreDeleteView { genre, books }.render().into_response())
}

/// POST /catalog/genre/:id/delete — target id comes from the body.
pub async fn delete_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let id = data
        .first("genreid")
        .ok_or_else(|| AppError::BadRequest("Missing genre id".to_string()))?
        .to_string();

    let (genre, books) = try_join!(
        state.repo.genres.get(&id),
        state.repo.books.list_by_genre(&id),
    )?;

    let Some(genre) = genre else {
        return Ok(super::found("/catalog/genres"));
    };

    // Referential guard: books still point here, refuse and show them.
    if !books.is_empty() {
        return Ok(GenreDeleteView { genre, books }.render().into_response());
    }

    state.repo.genres.delete(&id).await?;
    Ok(super::found("/catalog/genres"))
}

/// GET /catalog/genre/:id/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let genre = state
        .repo
        .genres
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    let mut form = FormReport::new();
    form.set_value("name", genre.name);

    Ok(GenreFormView {
        title: "Update Genre",
        form,
    }
    .render()
    .into_response())
}

/// POST /catalog/genre/:id/update
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        return Ok(GenreFormView {
            title: "Update Genre",
            form,
        }
        .render()
        .into_response());
    }

    state
        .repo
        .genres
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    state.repo.genres.update(&id, form.value("name")).await?;
    Ok(super::found(&format!("/catalog/genre/{}", id)))
}
