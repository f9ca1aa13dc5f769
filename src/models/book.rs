//! Book model and list projection

use serde::Serialize;
use sqlx::FromRow;

use super::{author::Author, genre::Genre};

/// Full book model from database.
///
/// Relations are loaded separately by the repository and left empty on
/// plain row fetches.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub summary: String,
    pub isbn: String,
    #[sqlx(skip)]
    pub author: Option<Author>,
    #[sqlx(skip)]
    pub genres: Vec<Genre>,
}

impl Book {
    /// Canonical detail-page path
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Validated field set for book create and update. `genre_ids` keeps the
/// submitted order.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author_id: String,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<String>,
}

/// Short book representation for lists: title plus the joined author name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookListRow {
    pub id: String,
    pub title: String,
    pub author_name: String,
}

impl BookListRow {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}
