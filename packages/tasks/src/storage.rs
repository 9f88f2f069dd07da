// ABOUTME: Task storage layer using SQLite
// ABOUTME: List, create, partial update and delete over the tasks table

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use super::types::{Task, TaskCreateInput, TaskUpdateInput};
use tasklist_storage::StorageError;

const SELECT_TASKS: &str = "SELECT id, title, description, due_date, is_completed FROM tasks";

pub struct TaskStorage {
    pool: SqlitePool,
}

impl TaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All tasks in insertion order
    pub async fn list_tasks(&self) -> Result<Vec<Task>, StorageError> {
        debug!("Fetching all tasks");

        let tasks = sqlx::query_as::<_, Task>(&format!("{} ORDER BY id", SELECT_TASKS))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(tasks)
    }

    pub async fn get_task(&self, task_id: i64) -> Result<Option<Task>, StorageError> {
        debug!("Fetching task: {}", task_id);

        sqlx::query_as::<_, Task>(&format!("{} WHERE id = ?", SELECT_TASKS))
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)
    }

    /// Insert a task and return the stored row, including its assigned id.
    pub async fn create_task(&self, input: TaskCreateInput) -> Result<Task, StorageError> {
        debug!("Creating task: {}", input.title);

        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, due_date, is_completed)
            VALUES (?, ?, ?, COALESCE(?, FALSE))
            RETURNING id, title, description, due_date, is_completed
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.due_date)
        .bind(input.is_completed)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::Sqlx)
    }

    /// Apply a partial update. Returns the number of rows affected (0 or 1).
    pub async fn update_task(
        &self,
        task_id: i64,
        input: TaskUpdateInput,
    ) -> Result<u64, StorageError> {
        debug!("Updating task: {}", task_id);

        if input.is_empty() {
            // Nothing to write; report whether the row exists
            return Ok(self.get_task(task_id).await?.map_or(0, |_| 1));
        }

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tasks SET ");
        let mut fields = query.separated(", ");

        if let Some(title) = input.title {
            fields.push("title = ").push_bind_unseparated(title);
        }
        if let Some(description) = input.description {
            fields.push("description = ").push_bind_unseparated(description);
        }
        if let Some(due_date) = input.due_date {
            fields.push("due_date = ").push_bind_unseparated(due_date);
        }
        if let Some(is_completed) = input.is_completed {
            fields.push("is_completed = ").push_bind_unseparated(is_completed);
        }

        query.push(" WHERE id = ").push_bind(task_id);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected())
    }

    /// Delete a task. Returns the number of rows affected (0 or 1).
    pub async fn delete_task(&self, task_id: i64) -> Result<u64, StorageError> {
        debug!("Deleting task: {}", task_id);

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected())
    }
}
