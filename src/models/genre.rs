//! Genre model

use serde::Serialize;
use sqlx::FromRow;

/// Full genre model from database.
///
/// Name uniqueness is enforced at the application level: create looks up
/// an existing genre with the same name and redirects to it instead of
/// inserting a duplicate.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

impl Genre {
    /// Canonical detail-page path
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}
