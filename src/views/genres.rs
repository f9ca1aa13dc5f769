//! Genre views

use axum::response::Html;

use crate::{
    forms::FormReport,
    models::{Book, Genre},
};

use super::{error_list, layout, submit_button, text_input};

pub struct GenreListView {
    pub genres: Vec<Genre>,
}

impl GenreListView {
    pub fn render(&self) -> Html<String> {
        let mut body = String::from("<h1>Genre List</h1>\n<ul>\n");
        if self.genres.is_empty() {
            body.push_str("  <li>There are no genres.</li>\n");
        }
        for genre in &self.genres {
            body.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                genre.url(),
                genre.name
            ));
        }
        body.push_str("</ul>\n");
        layout("Genre List", &body)
    }
}

pub struct GenreDetailView {
    pub genre: Genre,
    pub books: Vec<Book>,
}

impl GenreDetailView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!(
            "<h1 class=\"genre-name\">Genre: {}</h1>\n<h2>Books</h2>\n",
            self.genre.name
        );
        if self.books.is_empty() {
            body.push_str("<p>This genre has no books.</p>\n");
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
            "<p><a href=\"{}/update\">Update genre</a> | <a href=\"{}/delete\">Delete genre</a></p>\n",
            self.genre.url(),
            self.genre.url()
        ));
        layout("Genre Detail", &body)
    }
}

pub struct GenreFormView {
    pub title: &'static str,
    pub form: FormReport,
}

impl GenreFormView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!("<h1>{}</h1>\n<form method=\"post\">\n", self.title);
        body.push_str(&text_input("Genre:", "name", self.form.value("name")));
        body.push_str(&submit_button("Submit"));
        body.push_str("</form>\n");
        body.push_str(&error_list(self.form.errors()));
        layout(self.title, &body)
    }
}

pub struct GenreDeleteView {
    pub genre: Genre,
    pub books: Vec<Book>,
}

impl GenreDeleteView {
    pub fn render(&self) -> Html<String> {
        let mut body = format!("<h1>Delete Genre: {}</h1>\n", self.genre.name);
        if self.books.is_empty() {
            body.push_str("<p>Do you really want to delete this genre?</p>\n");
            body.push_str(&format!(
                "<form method=\"post\">\n\
                 <input type=\"hidden\" name=\"genreid\" value=\"{}\">\n",
                self.genre.id
            ));
            body.push_str(&submit_button("Delete"));
            body.push_str("</form>\n");
        } else {
            body.push_str(
                "<p class=\"delete-blocked\">Delete the following books before attempting to \
                 delete this genre:</p>\n<dl>\n",
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
        layout("Delete Genre", &body)
    }
}
