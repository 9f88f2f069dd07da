// ABOUTME: HTTP API layer for Tasklist providing REST endpoints and routing
// ABOUTME: Translates task routes into TaskStorage calls and maps outcomes to status codes

use axum::{
    routing::{get, put},
    Router,
};

pub mod db;
pub mod health;
pub mod response;
pub mod tasks_handlers;

pub use db::DbState;
pub use response::{ApiError, MessageResponse};

/// Creates the tasks API router (nested under /tasks and /api/tasks)
pub fn create_tasks_router() -> Router<DbState> {
    Router::new()
        .route(
            "/",
            get(tasks_handlers::list_tasks).post(tasks_handlers::create_task),
        )
        .route(
            "/{task_id}",
            put(tasks_handlers::update_task).delete(tasks_handlers::delete_task),
        )
}

/// Creates the full application router bound to a database state.
///
/// Cross-cutting layers (CORS, request tracing) are added by the binary.
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/api", get(health::server_check))
        .route("/api/health", get(health::health_check))
        .nest("/tasks", create_tasks_router())
        .nest("/api/tasks", create_tasks_router())
        .fallback(response::not_found)
        .with_state(db)
}
