//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tasks_core::task::{Task, TaskId};
use tasks_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn map_core_error(err: Error) -> ApiError {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(error = %err, "Task storage failure");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, err.to_string())
}

fn parse_body(body: Result<Json<TaskRequest>, JsonRejection>) -> Result<TaskRequest, ApiError> {
    body.map(|Json(req)| req).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected task request body");
        error_response(StatusCode::BAD_REQUEST, "invalid request body")
    })
}

fn parse_id(id: Result<Path<TaskId>, PathRejection>) -> Result<TaskId, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "task id must be an integer"))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state
        .task_service()
        .list_tasks()
        .await
        .map_err(map_core_error)?;

    Ok(Json(tasks))
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let req = parse_body(body)?;

    let created = state
        .task_service()
        .create_task(req.description)
        .await
        .map_err(map_core_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(id)?;

    let task = state
        .task_service()
        .get_task(id)
        .await
        .map_err(map_core_error)?;

    Ok(Json(task))
}

/// PUT /tasks/:id - Replace a task's description
async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
    body: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(id)?;
    let req = parse_body(body)?;

    let updated = state
        .task_service()
        .update_task(id, req.description)
        .await
        .map_err(map_core_error)?;

    Ok(Json(updated))
}

/// DELETE /tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(id)?;

    state
        .task_service()
        .delete_task(id)
        .await
        .map_err(map_core_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT|DELETE /tasks/ - Id segment left empty
async fn missing_id() -> ApiError {
    error_response(StatusCode::BAD_REQUEST, "task id is required")
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/", put(missing_id).delete(missing_id))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
