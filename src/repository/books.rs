//! Books repository for database operations.
//!
//! Books carry two relations loaded alongside the row: the single author
//! and the ordered genre set (join table `book_genres`, `position` column
//! keeping submitted order).

use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, Book, BookListRow, Genre, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// All books with their author's display name, sorted by title.
    pub async fn list(&self) -> AppResult<Vec<BookListRow>> {
        let rows = sqlx::query_as::<_, BookListRow>(
            r#"
            SELECT b.id, b.title, a.family_name || ', ' || a.first_name AS author_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            ORDER BY b.title COLLATE NOCASE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// One book with author and genres populated.
    pub async fn get(&self, id: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author_id, summary, isbn FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut book) = book else {
            return Ok(None);
        };

        book.author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, family_name, date_of_birth, date_of_death
            FROM authors
            WHERE id = ?
            "#,
        )
        .bind(&book.author_id)
        .fetch_optional(&self.pool)
        .await?;

        book.genres = self.genres_of(id).await?;

        Ok(Some(book))
    }

    /// Genres of one book in submitted order.
    async fn genres_of(&self, book_id: &str) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = ?
            ORDER BY bg.position
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(genres)
    }

    /// Books referencing one author (dependents for the delete guard and
    /// the author detail page).
    pub async fn list_by_author(&self, author_id: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author_id, summary, isbn
            FROM books
            WHERE author_id = ?
            ORDER BY title COLLATE NOCASE
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Books referencing one genre.
    pub async fn list_by_genre(&self, genre_id: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = ?
            ORDER BY b.title COLLATE NOCASE
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a new book and its genre links; the store assigns the id.
    pub async fn insert(&self, new: &NewBook) -> AppResult<Book> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO books (id, title, author_id, summary, isbn) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&new.title)
        .bind(&new.author_id)
        .bind(&new.summary)
        .bind(&new.isbn)
        .execute(&self.pool)
        .await?;

        self.replace_genres(&id, &new.genre_ids).await?;

        Ok(Book {
            id: id.clone(),
            title: new.title.clone(),
            author_id: new.author_id.clone(),
            summary: new.summary.clone(),
            isbn: new.isbn.clone(),
            author: None,
            genres: self.genres_of(&id).await?,
        })
    }

    /// Overwrite all mutable fields of the record at `id`, genre set
    /// included.
    pub async fn update(&self, id: &str, new: &NewBook) -> AppResult<()> {
        sqlx::query("UPDATE books SET title = ?, author_id = ?, summary = ?, isbn = ? WHERE id = ?")
            .bind(&new.title)
            .bind(&new.author_id)
            .bind(&new.summary)
            .bind(&new.isbn)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.replace_genres(id, &new.genre_ids).await?;

        Ok(())
    }

    async fn replace_genres(&self, book_id: &str, genre_ids: &[String]) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = ?")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        for (position, genre_id) in genre_ids.iter().enumerate() {
            sqlx::query("INSERT INTO book_genres (book_id, genre_id, position) VALUES (?, ?, ?)")
                .bind(book_id)
                .bind(genre_id)
                .bind(position as i64)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
