//! Book instance (copy) views

use axum::response::Html;

use crate::{
    forms::FormReport,
    models::{BookInstance, BookInstanceListRow, BookListRow, InstanceStatus},
};

use super::{date_input, error_list, layout, submit_button, text_input};

pub struct BookInstanceListView {
    pub instances: Vec<BookInstanceListRow>,
}

impl BookInstanceListView {
    pub fn render(&self) -> Html<String> {
        let mut body = String::from("<h1>Book Instance List</h1>\n<ul>\n");
        if self.instances.is_empty() {
            body.push_str("  <li>There are no book instances.</li>\n");
        }
        for instance in &self.instances {
            body.push_str(&format!(
                "  <li><a href=\"{}\">{}: {}</a> - {} (due {})</li>\n",
                instance.url(),
                instance.book_title,
                instance.imprint,
                instance.status,
                instance.due_back_formatted()
            ));
        }
        body.push_str("</ul>\n");
        layout("Book Instance List", &body)
    }
}

pub struct BookInstanceDetailView {
    pub instance: BookInstance,
}

impl BookInstanceDetailView {
    pub fn render(&self) -> Html<String> {
        let book = self
            .instance
            .book
            .as_ref()
            .map(|b| format!("<a href=\"{}\">{}</a>", b.url(), b.title))
            .unwrap_or_default();
        let mut body = format!(
            "<h1>Id: {}</h1>\n\
             <p><strong>Book:</strong> {}</p>\n\
             <p><strong>Imprint:</strong> {}</p>\n\
             <p><strong>Status:</strong> <span class=\"instance-status\">{}</span></p>\n\
             <p><strong>Due back:</strong> {}</p>\n",
            self.instance.id,
            book,
            self.instance.imprint,
            self.instance.status,
            self.instance.due_back_formatted()
        );
        body.push_str(&format!(
            "<p><a href=\"{}/update\">Update book instance</a> | \
             <a href=\"{}/delete\">Delete book instance</a></p>\n",
            self.instance.url(),
            self.instance.url()
        ));
        layout("Book Instance Detail", &body)
    }
}

pub struct BookInstanceFormView {
    pub title: &'static str,
    pub form: FormReport,
    pub books: Vec<BookListRow>,
}

impl BookInstanceFormView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!("<h1>{}</h1>\n<form method=\"post\">\n", self.title);

        body.push_str("<p><label for=\"book\">Book:</label> <select id=\"book\" name=\"book\">\n");
        for book in &self.books {
            let selected = if self.form.value("book") == book.id {
                " selected"
            } else {
                ""
            };
            body.push_str(&format!(
                "  <option value=\"{}\"{}>{}</option>\n",
                book.id, selected, book.title
            ));
        }
        body.push_str("</select></p>\n");

        body.push_str(&text_input("Imprint:", "imprint", self.form.value("imprint")));
        body.push_str(&date_input(
            "Date when book available:",
            "due_back",
            self.form.value("due_back"),
        ));

        body.push_str("<p><label for=\"status\">Status:</label> <select id=\"status\" name=\"status\">\n");
        for status in InstanceStatus::ALL {
            let selected = if self.form.value("status") == status.as_str() {
                " selected"
            } else {
                ""
            };
            body.push_str(&format!(
                "  <option value=\"{status}\"{selected}>{status}</option>\n"
            ));
        }
        body.push_str("</select></p>\n");

        body.push_str(&submit_button("Submit"));
        body.push_str("</form>\n");
        body.push_str(&error_list(self.form.errors()));
        layout(self.title, &body)
    }
}

/// Copies have no dependents; the confirmation is always offered.
pub struct BookInstanceDeleteView {
    pub instance: BookInstance,
}

impl BookInstanceDeleteView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!(
            "<h1>Delete Book Instance: {}</h1>\n\
             <p>Do you really want to delete this copy ({})?</p>\n",
            self.instance.id, self.instance.imprint
        );
        body.push_str(&format!(
            "<form method=\"post\">\n\
             <input type=\"hidden\" name=\"bookinstanceid\" value=\"{}\">\n",
            self.instance.id
        ));
        body.push_str(&submit_button("Delete"));
        body.push_str("</form>\n");
        layout("Delete Book Instance", &body)
    }
}
