//! Author controllers

use axum::{
    extract::{Path, RawForm, State},
    response::{IntoResponse, Response},
};
use tokio::try_join;

use crate::{
    error::{AppError, AppResult},
    forms::{FormData, FormReport},
    models::{Author, NewAuthor},
    views::authors::{AuthorDeleteView, AuthorDetailView, AuthorFormView, AuthorListView},
    AppState,
};

/// Validation pipeline for author create and update submissions.
fn validate(data: &FormData) -> FormReport {
    let mut form = FormReport::new();
    form.field("first_name", data.first("first_name"))
        .trim()
        .required("First name must be specified.")
        .max_length(100, "First name must not exceed 100 characters.")
        .alphanumeric("First name has non-alphanumeric characters.")
        .escape()
        .done();
    form.field("family_name", data.first("family_name"))
        .trim()
        .required("Family name must be specified.")
        .max_length(100, "Family name must not exceed 100 characters.")
        .alphanumeric("Family name has non-alphanumeric characters.")
        .escape()
        .done();
    form.field("date_of_birth", data.first("date_of_birth"))
        .trim()
        .iso_date("Invalid date of birth")
        .escape()
        .done();
    form.field("date_of_death", data.first("date_of_death"))
        .trim()
        .iso_date("Invalid date of death")
        .escape()
        .done();
    form
}

fn new_author(form: &FormReport) -> NewAuthor {
    NewAuthor {
        first_name: form.value("first_name").to_string(),
        family_name: form.value("family_name").to_string(),
        date_of_birth: form.date("date_of_birth"),
        date_of_death: form.date("date_of_death"),
    }
}

/// GET /catalog/authors
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let authors = state.repo.authors.list().await?;
    Ok(AuthorListView { authors }.render().into_response())
}

/// GET /catalog/author/:id
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let (author, books) = try_join!(
        state.repo.authors.get(&id),
        state.repo.books.list_by_author(&id),
    )?;

    let author =
        author.ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

    Ok(AuthorDetailView { author, books }.render().into_response())
}

/// GET /catalog/author/create
pub async fn create_form() -> Response {
    AuthorFormView {
        title: "Create Author",
        form: FormReport::new(),
    }
    .render()
    .into_response()
}

/// POST /catalog/author/create
pub async fn create_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        return Ok(AuthorFormView {
            title: "Create Author",
            form,
        }
        .render()
        .into_response());
    }

    let author = state.repo.authors.insert(&new_author(&form)).await?;
    Ok(super::found(&author.url()))
}

/// GET /catalog/author/:id/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let (author, books) = try_join!(
        state.repo.authors.get(&id),
        state.repo.books.list_by_author(&id),
    )?;

    // Already gone: treat as deleted and return to the list.
    let Some(author) = author else {
        return Ok(super::found("/catalog/authors"));
    };

    Ok(AuthorDeleteView { author, books }.render().into_response())
}

/// POST /catalog/author/:id/delete — target id comes from the body.
pub async fn delete_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let id = data
        .first("authorid")
        .ok_or_else(|| AppError::BadRequest("Missing author id".to_string()))?
        .to_string();

    let (author, books) = try_join!(
        state.repo.authors.get(&id),
        state.repo.books.list_by_author(&id),
    )?;

    let Some(author) = author else {
        return Ok(super::found("/catalog/authors"));
    };

    // Referential guard: books still point here, refuse and show them.
    if !books.is_empty() {
        return Ok(AuthorDeleteView { author, books }.render().into_response());
    }

    state.repo.authors.delete(&id).await?;
    Ok(super::found("/catalog/authors"))
}

/// GET /catalog/author/:id/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let author = state
        .repo
        .authors
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

    Ok(AuthorFormView {
        title: "Update Author",
        form: seed_form(&author),
    }
    .render()
    .into_response())
}

/// POST /catalog/author/:id/update
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        return Ok(AuthorFormView {
            title: "Update Author",
            form,
        }
        .render()
        .into_response());
    }

    state
        .repo
        .authors
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

    state.repo.authors.update(&id, &new_author(&form)).await?;
    Ok(super::found(&format!("/catalog/author/{}", id)))
}

fn seed_form(author: &Author) -> FormReport {
    let mut form = FormReport::new();
    form.set_value("first_name", author.first_name.clone());
    form.set_value("family_name", author.family_name.clone());
    form.set_value("date_of_birth", author.date_of_birth_form());
    form.set_value("date_of_death", author.date_of_death_form());
    form
}
