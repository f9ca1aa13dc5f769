//! Server-rendered views.
//!
//! Handlers assemble per-page view-models and delegate here; this module
//! is the only place markup is written. Values coming out of the store
//! were sanitized at form intake, so they are echoed as-is.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use axum::{http::StatusCode, response::Html};

use crate::forms::{escape_html, FieldError};

/// Shared page shell: sidebar navigation plus the page body.
pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <nav>
    <ul>
      <li><a href="/">Home</a></li>
      <li><a href="/catalog/books">All books</a></li>
      <li><a href="/catalog/authors">All authors</a></li>
      <li><a href="/catalog/genres">All genres</a></li>
      <li><a href="/catalog/bookinstances">All book instances</a></li>
      <li><a href="/catalog/book/create">Create new book</a></li>
      <li><a href="/catalog/author/create">Create new author</a></li>
      <li><a href="/catalog/genre/create">Create new genre</a></li>
      <li><a href="/catalog/bookinstance/create">Create new book instance</a></li>
    </ul>
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#
    ))
}

/// Accumulated validation errors as a list, every problem at once.
pub(crate) fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">\n");
    for e in errors {
        out.push_str(&format!("  <li>{}</li>\n", escape_html(&e.message)));
    }
    out.push_str("</ul>\n");
    out
}

pub(crate) fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label> \
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></p>\n"
    )
}

pub(crate) fn date_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label> \
         <input type=\"date\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></p>\n"
    )
}

pub(crate) fn textarea(label: &str, name: &str, value: &str) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label> \
         <textarea id=\"{name}\" name=\"{name}\">{value}</textarea></p>\n"
    )
}

pub(crate) fn submit_button(label: &str) -> String {
    format!("<p><button type=\"submit\">{label}</button></p>\n")
}

/// Dashboard view-model: the five independent catalog counts.
pub struct IndexView {
    pub book_count: i64,
    pub book_instance_count: i64,
    pub book_instance_available_count: i64,
    pub author_count: i64,
    pub genre_count: i64,
}

impl IndexView {
    pub fn render(&self) -> Html<String> {
        let body = format!(
            "<h1>Local Library Home</h1>\n\
             <p>The library has the following record counts:</p>\n\
             <ul>\n\
               <li><strong>Books:</strong> {}</li>\n\
               <li><strong>Copies:</strong> {}</li>\n\
               <li><strong>Copies available:</strong> {}</li>\n\
               <li><strong>Authors:</strong> {}</li>\n\
               <li><strong>Genres:</strong> {}</li>\n\
             </ul>\n",
            self.book_count,
            self.book_instance_count,
            self.book_instance_available_count,
            self.author_count,
            self.genre_count,
        );
        layout("Local Library Home", &body)
    }
}

/// Generic error page; `detail` is only passed in non-production builds.
pub fn error_page(status: StatusCode, message: &str, detail: Option<&str>) -> Html<String> {
    let mut body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        status.as_u16(),
        escape_html(message)
    );
    if let Some(detail) = detail {
        body.push_str(&format!("<pre>{}</pre>\n", escape_html(detail)));
    }
    layout("Error", &body)
}

/// Fallback page for routes that match nothing.
pub fn not_found_page() -> Html<String> {
    error_page(StatusCode::NOT_FOUND, "Page not found", None)
}
