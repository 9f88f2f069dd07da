// ABOUTME: HTTP request handlers for task operations
// ABOUTME: Handles CRUD operations for tasks with database integration

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::response::{ApiError, MessageResponse};
use crate::db::DbState;
use tasklist_core::validate_title;
use tasklist_tasks::{TaskCreateInput, TaskUpdateInput};

/// List all tasks
pub async fn list_tasks(State(db): State<DbState>) -> Result<impl IntoResponse, ApiError> {
    info!("Listing tasks");

    let tasks = db
        .task_storage
        .list_tasks()
        .await
        .map_err(ApiError::storage("Failed to get tasks"))?;

    Ok(Json(tasks))
}

/// Request body for creating a task
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub is_completed: Option<bool>,
}

/// Create a new task
pub async fn create_task(
    State(db): State<DbState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let title = validate_title(request.title.as_deref())?.to_string();

    info!("Creating task '{}'", title);

    let input = TaskCreateInput {
        title,
        description: request.description,
        due_date: request.due_date,
        is_completed: request.is_completed,
    };

    let task = db
        .task_storage
        .create_task(input)
        .await
        .map_err(ApiError::storage("Failed to create new task"))?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update an existing task with any subset of its mutable fields
pub async fn update_task(
    State(db): State<DbState>,
    task_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TaskUpdateInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(task_id) = task_id?;
    let Json(input) = payload?;

    info!("Updating task: {}", task_id);

    let affected = db
        .task_storage
        .update_task(task_id, input)
        .await
        .map_err(ApiError::storage("Failed to update task"))?;

    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Task updated successfully")))
}

/// Delete a task
pub async fn delete_task(
    State(db): State<DbState>,
    task_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(task_id) = task_id?;

    info!("Deleting task: {}", task_id);

    let affected = db
        .task_storage
        .delete_task(task_id)
        .await
        .map_err(ApiError::storage("Failed to delete task"))?;

    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
