//! Author views

use axum::response::Html;

use crate::{
    forms::FormReport,
    models::{Author, Book},
};

use super::{date_input, error_list, layout, submit_button, text_input};

pub struct AuthorListView {
    pub authors: Vec<Author>,
}

impl AuthorListView {
    pub fn render(&self) -> Html<String> {
        let mut body = String::from("<h1>Author List</h1>\n<ul>\n");
        if self.authors.is_empty() {
            body.push_str("  <li>There are no authors.</li>\n");
        }
        for author in &self.authors {
            body.push_str(&format!(
                "  <li><a href=\"{}\">{}</a> ({})</li>\n",
                author.url(),
                author.name(),
                author.lifespan()
            ));
        }
        body.push_str("</ul>\n");
        layout("Author List", &body)
    }
}

pub struct AuthorDetailView {
    pub author: Author,
    pub books: Vec<Book>,
}

impl AuthorDetailView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!(
            "<h1 class=\"author-name\">{}</h1>\n<p class=\"author-lifespan\">{}</p>\n\
             <h2>Books</h2>\n",
            self.author.name(),
            self.author.lifespan()
        );
        if self.books.is_empty() {
            body.push_str("<p>This author has no books.</p>\n");
        } else {
            body.push_str("<dl>\n");
            for book in &self.books {
                body.push_str(&format!(
                    "  <dt><a href=\"{}\">{}</a></dt>\n  <dd>{}</dd>\n",
                    book.url(),
                    book.title,
                    book.summary
                ));
            }
            body.push_str("</dl>\n");
        }
        body.push_str(&format!(
            "<p><a href=\"{}/update\">Update author</a> | <a href=\"{}/delete\">Delete author</a></p>\n",
            self.author.url(),
            self.author.url()
        ));
        layout("Author Detail", &body)
    }
}

/// Create and update share this form; update pre-seeds the report.
pub struct AuthorFormView {
    pub title: &'static str,
    pub form: FormReport,
}

impl AuthorFormView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!("<h1>{}</h1>\n<form method=\"post\">\n", self.title);
        body.push_str(&text_input(
            "First name:",
            "first_name",
            self.form.value("first_name"),
        ));
        body.push_str(&text_input(
            "Family name:",
            "family_name",
            self.form.value("family_name"),
        ));
        body.push_str(&date_input(
            "Date of birth:",
            "date_of_birth",
            self.form.value("date_of_birth"),
        ));
        body.push_str(&date_input(
            "Date of death:",
            "date_of_death",
            self.form.value("date_of_death"),
        ));
        body.push_str(&submit_button("Submit"));
        body.push_str("</form>\n");
        body.push_str(&error_list(self.form.errors()));
        layout(self.title, &body)
    }
}

/// Delete confirmation. When books still reference the author the list is
/// shown instead of the confirm button and deletion is refused.
pub struct AuthorDeleteView {
    pub author: Author,
    pub books: Vec<Book>,
}

impl AuthorDeleteView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!("<h1>Delete Author: {}</h1>\n", self.author.name());
        if self.books.is_empty() {
            body.push_str("<p>Do you really want to delete this author?</p>\n");
            body.push_str(&format!(
                "<form method=\"post\">\n\
                 <input type=\"hidden\" name=\"authorid\" value=\"{}\">\n",
                self.author.id
            ));
            body.push_str(&submit_button("Delete"));
            body.push_str("</form>\n");
        } else {
            body.push_str(
                "<p class=\"delete-blocked\">Delete the following books before attempting to \
                 delete this author:</p>\n<dl>\n",
            );
            for book in &self.books {
                body.push_str(&format!(
                    "  <dt><a href=\"{}\">{}</a></dt>\n  <dd>{}</dd>\n",
                    book.url(),
                    book.title,
                    book.summary
                ));
            }
            body.push_str("</dl>\n");
        }
        layout("Delete Author", &body)
    }
}
