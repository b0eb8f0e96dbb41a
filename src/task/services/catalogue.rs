//! Service layer composing the task store with validation.

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
    validation::{self, CreateTaskRequest, UpdateTaskRequest, ValidationErrors},
};
use futures_util::future::join_all;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Field-level validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// No task exists with the referenced identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task repository service.
///
/// Composes the persistence port with the validation layer and guarantees
/// the canonical read ordering. The repository and clock are injected so
/// concurrent test scenarios can run against isolated instances.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

// Manual impl: both fields are `Arc` handles, so cloning must not require
// `R: Clone` or `C: Clone` as the derive would.
impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all tasks in canonical order: priority ascending, then due
    /// date ascending, then due time ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with the
    /// identifier exists.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.repository.find_by_id(id).await?;
        task.ok_or(TaskServiceError::NotFound(id))
    }

    /// Validates and persists a new task.
    ///
    /// The store assigns the identifier and timestamps; status defaults to
    /// `todo` and priority to `P3` when unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] with field-level detail when
    /// the payload is invalid, or [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn create(&self, request: &CreateTaskRequest) -> TaskServiceResult<Task> {
        let data = validation::validate_create(request)?;
        let task = Task::create(data, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Validates the supplied fields and merges them into an existing task.
    ///
    /// Unsupplied fields are left untouched; `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing and
    /// [`TaskServiceError::Validation`] when a supplied field is invalid.
    pub async fn update(
        &self,
        id: TaskId,
        request: &UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let patch = validation::validate_update(request)?;
        let mut task = self.get_by_id(id).await?;
        task.apply_patch(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with the
    /// identifier exists; a repeated delete of the same identifier is an
    /// error, not a no-op.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Creates each request independently via [`Self::create`].
    ///
    /// Outcomes are returned in request order so callers can correlate each
    /// result back to its originating index. One request's failure does not
    /// abort the remaining requests; creates run concurrently since each
    /// record is causally independent.
    pub async fn create_many(
        &self,
        requests: &[CreateTaskRequest],
    ) -> Vec<TaskServiceResult<Task>> {
        join_all(requests.iter().map(|request| self.create(request))).await
    }
}
