//! Data access for the todos table. One parameterized statement per operation;
//! `Option<Todo>` encodes row-not-found, everything else is a storage fault.

use crate::error::AppError;
use crate::model::Todo;
use sqlx::PgPool;

pub struct TodoService;

impl TodoService {
    /// All todos, most recently created first. Id breaks ties between rows
    /// inserted within one timestamp quantum.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Todo>, AppError> {
        let rows = sqlx::query_as::<_, Todo>(
            "SELECT id, title, completed, created_at FROM todos \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert a row with the given title; id, completed=false and created_at
    /// come from column defaults. Returns the created row.
    pub async fn create(pool: &PgPool, title: &str) -> Result<Todo, AppError> {
        let row = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title) VALUES ($1) \
             RETURNING id, title, completed, created_at",
        )
        .bind(title)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Overwrite title and completed for one row. None if the id matched nothing.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        title: &str,
        completed: bool,
    ) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET title = $1, completed = $2 WHERE id = $3 \
             RETURNING id, title, completed, created_at",
        )
        .bind(title)
        .bind(completed)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Remove one row, returning its data. None if the id matched nothing.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, Todo>(
            "DELETE FROM todos WHERE id = $1 \
             RETURNING id, title, completed, created_at",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Flip completed for one row. The negation happens inside the single
    /// UPDATE, so concurrent toggles on the same id serialize on the row and
    /// never overwrite each other with a stale value.
    pub async fn toggle_completed(pool: &PgPool, id: i32) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET completed = NOT completed WHERE id = $1 \
             RETURNING id, title, completed, created_at",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }
}
