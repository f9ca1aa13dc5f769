//! Book instance (copy) controllers

use axum::{
    extract::{Path, RawForm, State},
    response::{IntoResponse, Response},
};

use crate::{
    error::{AppError, AppResult},
    forms::{FormData, FormReport},
    models::{BookInstance, InstanceStatus, NewBookInstance},
    views::book_instances::{
        BookInstanceDeleteView, BookInstanceDetailView, BookInstanceFormView,
        BookInstanceListView,
    },
    AppState,
};

/// Validation pipeline for copy create and update submissions.
fn validate(data: &FormData) -> FormReport {
    let statuses: Vec<&str> = InstanceStatus::ALL.iter().map(|s| s.as_str()).collect();

    let mut form = FormReport::new();
    form.field("book", data.first("book"))
        .trim()
        .required("Book must be specified")
        .escape()
        .done();
    form.field("imprint", data.first("imprint"))
        .trim()
        .required("Imprint must be specified")
        .escape()
        .done();
    form.field("due_back", data.first("due_back"))
        .trim()
        .iso_date("Invalid date")
        .escape()
        .done();
    form.field("status", data.first("status"))
        .trim()
        .one_of(&statuses, "Invalid status")
        .escape()
        .done();
    form
}

fn new_instance(form: &FormReport) -> NewBookInstance {
    NewBookInstance {
        book_id: form.value("book").to_string(),
        imprint: form.value("imprint").to_string(),
        // An absent status falls back to the Maintenance default.
        status: InstanceStatus::parse(form.value("status")).unwrap_or_default(),
        due_back: form.date("due_back"),
    }
}

/// GET /catalog/bookinstances
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let instances = state.repo.book_instances.list().await?;
    Ok(BookInstanceListView { instances }.render().into_response())
}

/// GET /catalog/bookinstance/:id
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let mut instance = state
        .repo
        .book_instances
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))?;

    instance.book = state.repo.books.get(&instance.book_id).await?;

    Ok(BookInstanceDetailView { instance }.render().into_response())
}

/// GET /catalog/bookinstance/create — all books populate the select.
pub async fn create_form(State(state): State<AppState>) -> AppResult<Response> {
    let books = state.repo.books.list().await?;

    Ok(BookInstanceFormView {
        title: "Create BookInstance",
        form: FormReport::new(),
        books,
    }
    .render()
    .into_response())
}

/// POST /catalog/bookinstance/create
pub async fn create_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        let books = state.repo.books.list().await?;
        return Ok(BookInstanceFormView {
            title: "Create BookInstance",
            form,
            books,
        }
        .render()
        .into_response());
    }

    let instance = state.repo.book_instances.insert(&new_instance(&form)).await?;
    Ok(super::found(&instance.url()))
}

/// GET /catalog/bookinstance/:id/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(instance) = state.repo.book_instances.get(&id).await? else {
        return Ok(super::found("/catalog/bookinstances"));
    };

    Ok(BookInstanceDeleteView { instance }.render().into_response())
}

/// POST /catalog/bookinstance/:id/delete — target id comes from the body.
/// Copies have no dependents, so deletion is never refused.
pub async fn delete_submit(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let id = data
        .first("bookinstanceid")
        .ok_or_else(|| AppError::BadRequest("Missing book instance id".to_string()))?
        .to_string();

    if state.repo.book_instances.get(&id).await?.is_some() {
        state.repo.book_instances.delete(&id).await?;
    }

    Ok(super::found("/catalog/bookinstances"))
}

/// GET /catalog/bookinstance/:id/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let (instance, books) = tokio::try_join!(
        state.repo.book_instances.get(&id),
        state.repo.books.list(),
    )?;

    let instance = instance
        .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))?;

    Ok(BookInstanceFormView {
        title: "Update BookInstance",
        form: seed_form(&instance),
        books,
    }
    .render()
    .into_response())
}

/// POST /catalog/bookinstance/:id/update
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> AppResult<Response> {
    let data = FormData::parse(&body)?;
    let form = validate(&data);

    if !form.is_valid() {
        let books = state.repo.books.list().await?;
        return Ok(BookInstanceFormView {
            title: "Update BookInstance",
            form,
            books,
        }
        .render()
        .into_response());
    }

    state
        .repo
        .book_instances
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))?;

    state
        .repo
        .book_instances
        .update(&id, &new_instance(&form))
        .await?;
    Ok(super::found(&format!("/catalog/bookinstance/{}", id)))
}

fn seed_form(instance: &BookInstance) -> FormReport {
    let mut form = FormReport::new();
    form.set_value("book", instance.book_id.clone());
    form.set_value("imprint", instance.imprint.clone());
    form.set_value("due_back", instance.due_back_form());
    form.set_value("status", instance.status.clone());
    form
}
