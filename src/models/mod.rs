//! Catalog entity models.
//!
//! Each entity is a plain record struct mapped straight from its table.
//! Display fields (canonical URLs, formatted names and dates) are derived
//! accessors computed on every read, never stored.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

pub use author::{Author, NewAuthor};
pub use book::{Book, BookListRow, NewBook};
pub use book_instance::{BookInstance, BookInstanceListRow, InstanceStatus, NewBookInstance};
pub use genre::Genre;

use chrono::NaiveDate;

/// Medium date used on detail and list pages ("Dec 16, 1775").
pub(crate) fn format_medium_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// ISO date used for form value attributes.
pub(crate) fn format_form_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
