//! Book instances (physical copies) repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{BookInstance, BookInstanceListRow, InstanceStatus, NewBookInstance},
};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Sqlite>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// All copies with their book's title, sorted by title.
    pub async fn list(&self) -> AppResult<Vec<BookInstanceListRow>> {
        let rows = sqlx::query_as::<_, BookInstanceListRow>(
            r#"
            SELECT i.id, i.book_id, i.imprint, i.status, i.due_back, b.title AS book_title
            FROM book_instances i
            JOIN books b ON b.id = i.book_id
            ORDER BY b.title COLLATE NOCASE, i.imprint COLLATE NOCASE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<BookInstance>> {
        let instance = sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, status, due_back FROM book_instances WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(instance)
    }

    /// Copies of one book (dependents for the delete guard and the book
    /// detail page).
    pub async fn list_for_book(&self, book_id: &str) -> AppResult<Vec<BookInstance>> {
        let instances = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT id, book_id, imprint, status, due_back
            FROM book_instances
            WHERE book_id = ?
            ORDER BY imprint COLLATE NOCASE
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(instances)
    }

    /// Insert a new copy; the store assigns the id and defaults the due
    /// date to the creation date.
    pub async fn insert(&self, new: &NewBookInstance) -> AppResult<BookInstance> {
        let id = Uuid::new_v4().to_string();
        let due_back = new.due_back.unwrap_or_else(|| Utc::now().date_naive());

        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status, due_back)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&new.book_id)
        .bind(&new.imprint)
        .bind(new.status.as_str())
        .bind(due_back)
        .execute(&self.pool)
        .await?;

        Ok(BookInstance {
            id,
            book_id: new.book_id.clone(),
            imprint: new.imprint.clone(),
            status: new.status.as_str().to_string(),
            due_back,
            book: None,
        })
    }

    /// Overwrite all mutable fields of the record at `id`.
    pub async fn update(&self, id: &str, new: &NewBookInstance) -> AppResult<()> {
        let due_back = new.due_back.unwrap_or_else(|| Utc::now().date_naive());

        sqlx::query(
            r#"
            UPDATE book_instances
            SET book_id = ?, imprint = ?, status = ?, due_back = ?
            WHERE id = ?
            "#,
        )
        .bind(&new.book_id)
        .bind(&new.imprint)
        .bind(new.status.as_str())
        .bind(due_back)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM book_instances WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_available(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = ?")
            .bind(InstanceStatus::Available.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
