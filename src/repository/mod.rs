//! Repository layer for database operations.
//!
//! One repository per entity over a shared SQLite pool. The aggregate is
//! constructed once at startup and handed to the handler layer through
//! application state; nothing here is reachable through ambient lookup.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use sqlx::{Pool, Sqlite};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub book_instances: book_instances::BookInstancesRepository,
    pub genres: genres::GenresRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            book_instances: book_instances::BookInstancesRepository::new(pool.clone()),
            genres: genres::GenresRepository::new(pool.clone()),
            pool,
        }
    }
}
