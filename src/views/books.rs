//! Book views

use axum::response::Html;

use crate::{
    forms::FormReport,
    models::{Author, Book, BookInstance, BookListRow, Genre},
};

use super::{error_list, layout, submit_button, text_input, textarea};

pub struct BookListView {
    pub books: Vec<BookListRow>,
}

impl BookListView {
    pub fn render(&self) -> Html<String> {
        let mut body = String::from("<h1>Book List</h1>\n<ul>\n");
        if self.books.is_empty() {
            body.push_str("  <li>There are no books.</li>\n");
        }
        for book in &self.books {
            body.push_str(&format!(
                "  <li><a href=\"{}\">{}</a> ({})</li>\n",
                book.url(),
                book.title,
                book.author_name
            ));
        }
        body.push_str("</ul>\n");
        layout("Book List", &body)
    }
}

pub struct BookDetailView {
    pub book: Book,
    pub instances: Vec<BookInstance>,
}

impl BookDetailView {
    pub fn render(&self) -> Html<String> {
        let author = self
            .book
            .author
            .as_ref()
            .map(|a| format!("<a href=\"{}\">{}</a>", a.url(), a.name()))
            .unwrap_or_default();
        let genres = self
            .book
            .genres
            .iter()
            .map(|g| format!("<a href=\"{}\">{}</a>", g.url(), g.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut body = format!(
            "<h1 class=\"book-title\">Title: {}</h1>\n\
             <p><strong>Author:</strong> {}</p>\n\
             <p><strong>Summary:</strong> {}</p>\n\
             <p><strong>ISBN:</strong> {}</p>\n\
             <p><strong>Genre:</strong> <span class=\"book-genres\">{}</span></p>\n\
             <h2>Copies</h2>\n",
            self.book.title, author, self.book.summary, self.book.isbn, genres
        );

        if self.instances.is_empty() {
            body.push_str("<p>There are no copies of this book in the library.</p>\n");
        } else {
            body.push_str("<ul>\n");
            for instance in &self.instances {
                body.push_str(&format!(
                    "  <li><a href=\"{}\">{}</a> - {} (due {})</li>\n",
                    instance.url(),
                    instance.imprint,
                    instance.status,
                    instance.due_back_formatted()
                ));
            }
            body.push_str("</ul>\n");
        }
        body.push_str(&format!(
            "<p><a href=\"{}/update\">Update book</a> | <a href=\"{}/delete\">Delete book</a></p>\n",
            self.book.url(),
            self.book.url()
        ));
        layout("Book Detail", &body)
    }
}

/// Create and update share this form. The author select and genre
/// checkboxes are populated from the reference lists; the currently
/// chosen values come from the (possibly pre-seeded) form report.
pub struct BookFormView {
    pub title: &'static str,
    pub form: FormReport,
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
}

impl BookFormView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!("<h1>{}</h1>\n<form method=\"post\">\n", self.title);
        body.push_str(&text_input("Title:", "title", self.form.value("title")));

        body.push_str("<p><label for=\"author\">Author:</label> <select id=\"author\" name=\"author\">\n");
        for author in &self.authors {
            let selected = if self.form.value("author") == author.id {
                " selected"
            } else {
                ""
            };
            body.push_str(&format!(
                "  <option value=\"{}\"{}>{}</option>\n",
                author.id,
                selected,
                author.name()
            ));
        }
        body.push_str("</select></p>\n");

        body.push_str(&textarea("Summary:", "summary", self.form.value("summary")));
        body.push_str(&text_input("ISBN:", "isbn", self.form.value("isbn")));

        body.push_str("<fieldset><legend>Genre:</legend>\n");
        for genre in &self.genres {
            let checked = if self.form.list("genre").contains(&genre.id) {
                " checked"
            } else {
                ""
            };
            body.push_str(&format!(
                "  <label><input type=\"checkbox\" name=\"genre\" value=\"{}\"{}> {}</label>\n",
                genre.id, checked, genre.name
            ));
        }
        body.push_str("</fieldset>\n");

        body.push_str(&submit_button("Submit"));
        body.push_str("</form>\n");
        body.push_str(&error_list(self.form.errors()));
        layout(self.title, &body)
    }
}

pub struct BookDeleteView {
    pub book: Book,
    pub instances: Vec<BookInstance>,
}

impl BookDeleteView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!("<h1>Delete Book: {}</h1>\n", self.book.title);
        if self.instances.is_empty() {
            body.push_str("<p>Do you really want to delete this book?</p>\n");
            body.push_str(&format!(
                "<form method=\"post\">\n\
                 <input type=\"hidden\" name=\"bookid\" value=\"{}\">\n",
                self.book.id
            ));
            body.push_str(&submit_button("Delete"));
            body.push_str("</form>\n");
        } else {
            body.push_str(
                "<p class=\"delete-blocked\">Delete the following copies before attempting to \
                 delete this book:</p>\n<ul>\n",
            );
            for instance in &self.instances {
                body.push_str(&format!(
                    "  <li><a href=\"{}\">{}</a> - {}</li>\n",
                    instance.url(),
                    instance.imprint,
                    instance.status
                ));
            }
            body.push_str("</ul>\n");
        }
        layout("Delete Book", &body)
    }
}
