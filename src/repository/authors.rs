//! Authors repository for database operations

use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, NewAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// All authors, sorted by family name for the list view.
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, family_name, date_of_birth, date_of_death
            FROM authors
            ORDER BY family_name COLLATE NOCASE, first_name COLLATE NOCASE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, family_name, date_of_birth, date_of_death
            FROM authors
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Insert a new author; the store assigns the id.
    pub async fn insert(&self, new: &NewAuthor) -> AppResult<Author> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO authors (id, first_name, family_name, date_of_birth, date_of_death)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&new.first_name)
        .bind(&new.family_name)
        .bind(new.date_of_birth)
        .bind(new.date_of_death)
        .execute(&self.pool)
        .await?;

        Ok(Author {
            id,
            first_name: new.first_name.clone(),
            family_name: new.family_name.clone(),
            date_of_birth: new.date_of_birth,
            date_of_death: new.date_of_death,
        })
    }

    /// Overwrite all mutable fields of the record at `id`.
    pub async fn update(&self, id: &str, new: &NewAuthor) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE authors
            SET first_name = ?, family_name = ?, date_of_birth = ?, date_of_death = ?
            WHERE id = ?
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.family_name)
        .bind(new.date_of_birth)
        .bind(new.date_of_death)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
