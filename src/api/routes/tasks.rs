//! Task CRUD routes.

use crate::api::envelope::Envelope;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::ingestion::ports::TaskTranslator;
use crate::task::domain::{Task, TaskId};
use crate::task::ports::TaskRepository;
use crate::task::validation::{CreateTaskRequest, UpdateTaskRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mockable::Clock;
use std::str::FromStr;
use std::sync::Arc;

/// Parses the path parameter into a task identifier.
fn parse_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::from_str(raw).map_err(|_| ApiError::InvalidTaskId)
}

/// `GET /api/tasks`: all tasks in canonical order.
pub async fn list_tasks<T, R, C>(
    State(state): State<Arc<AppState<T, R, C>>>,
) -> Result<Json<Envelope<Vec<Task>>>, ApiError>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.tasks.list_all().await?;
    Ok(Json(Envelope::with_message(
        tasks,
        "Tasks retrieved successfully",
    )))
}

/// `GET /api/tasks/{id}`: a single task.
pub async fn get_task<T, R, C>(
    State(state): State<Arc<AppState<T, R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Task>>, ApiError>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state.tasks.get_by_id(parse_id(&id)?).await?;
    Ok(Json(Envelope::with_message(
        task,
        "Task retrieved successfully",
    )))
}

/// `POST /api/tasks`: create a task from a structured payload.
pub async fn create_task<T, R, C>(
    State(state): State<Arc<AppState<T, R, C>>>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Task>>), ApiError>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(request) = body?;
    let task = state.tasks.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(task, "Task created successfully")),
    ))
}

/// `PUT /api/tasks/{id}`: partial update; unspecified fields are left
/// untouched.
pub async fn update_task<T, R, C>(
    State(state): State<Arc<AppState<T, R, C>>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Envelope<Task>>, ApiError>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(request) = body?;
    let task = state.tasks.update(parse_id(&id)?, &request).await?;
    Ok(Json(Envelope::with_message(
        task,
        "Task updated successfully",
    )))
}

/// `DELETE /api/tasks/{id}`: hard delete.
pub async fn delete_task<T, R, C>(
    State(state): State<Arc<AppState<T, R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Option<()>>>, ApiError>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    state.tasks.delete(parse_id(&id)?).await?;
    Ok(Json(Envelope::with_message(
        None,
        "Task deleted successfully",
    )))
}
