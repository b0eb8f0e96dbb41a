//! Shared handler state.

use crate::ingestion::ports::TaskTranslator;
use crate::ingestion::services::IngestionService;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;
use mockable::Clock;

/// Services injected into the HTTP handlers.
///
/// Wrapped in an `Arc` by the caller; both services are cheaply cloneable
/// handles over the same repository instance.
pub struct AppState<T, R, C>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task repository service.
    pub tasks: TaskService<R, C>,
    /// Ingestion orchestrator.
    pub ingestion: IngestionService<T, R, C>,
}

impl<T, R, C> AppState<T, R, C>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Bundles the services into handler state.
    #[must_use]
    pub const fn new(tasks: TaskService<R, C>, ingestion: IngestionService<T, R, C>) -> Self {
        Self { tasks, ingestion }
    }
}
