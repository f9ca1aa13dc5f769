//! Book instance (physical copy) model and status codes

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::{book::Book, format_form_date, format_medium_date};

/// Loan status of a physical copy. Stored as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstanceStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl InstanceStatus {
    pub const ALL: [InstanceStatus; 4] = [
        InstanceStatus::Available,
        InstanceStatus::Maintenance,
        InstanceStatus::Loaned,
        InstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Maintenance => "Maintenance",
            InstanceStatus::Loaned => "Loaned",
            InstanceStatus::Reserved => "Reserved",
        }
    }

    /// Strict parse of a form value; `None` for anything outside the enum.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl Default for InstanceStatus {
    fn default() -> Self {
        InstanceStatus::Maintenance
    }
}

impl From<&str> for InstanceStatus {
    fn from(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full book instance model from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookInstance {
    pub id: String,
    pub book_id: String,
    pub imprint: String,
    pub status: String,
    pub due_back: NaiveDate,
    #[sqlx(skip)]
    pub book: Option<Book>,
}

impl BookInstance {
    /// Canonical detail-page path
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    pub fn status(&self) -> InstanceStatus {
        InstanceStatus::from(self.status.as_str())
    }

    /// Due date as a medium date ("Jun 3, 2026")
    pub fn due_back_formatted(&self) -> String {
        format_medium_date(self.due_back)
    }

    /// Due date as an ISO string for form value attributes
    pub fn due_back_form(&self) -> String {
        format_form_date(self.due_back)
    }
}

/// Validated field set for book instance create and update. A missing due
/// date means "due now": the store fills in the creation date.
#[derive(Debug, Clone)]
pub struct NewBookInstance {
    pub book_id: String,
    pub imprint: String,
    pub status: InstanceStatus,
    pub due_back: Option<NaiveDate>,
}

/// Short instance representation for lists: copy plus joined book title.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookInstanceListRow {
    pub id: String,
    pub book_id: String,
    pub imprint: String,
    pub status: String,
    pub due_back: NaiveDate,
    pub book_title: String,
}

impl BookInstanceListRow {
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    pub fn status(&self) -> InstanceStatus {
        InstanceStatus::from(self.status.as_str())
    }

    pub fn due_back_formatted(&self) -> String {
        format_medium_date(self.due_back)
    }
}
