//! Genres repository for database operations

use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::{error::AppResult, models::Genre};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Sqlite>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// All genres, sorted by name for the list view.
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres ORDER BY name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(genres)
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(genre)
    }

    /// Exact-name lookup backing the application-level uniqueness check.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(genre)
    }

    /// Insert a new genre; the store assigns the id.
    pub async fn insert(&self, name: &str) -> AppResult<Genre> {
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO genres (id, name) VALUES (?, ?)")
            .bind(&id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Genre {
            id,
            name: name.to_string(),
        })
    }

    /// Overwrite the record at `id`.
    pub async fn update(&self, id: &str, name: &str) -> AppResult<()> {
        sqlx::query("UPDATE genres SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
