//! The ingestion orchestrator: free text in, persisted tasks out.

use crate::ingestion::domain::{
    CandidateFailure, IngestionError, IngestionReport, TaskCandidate,
};
use crate::ingestion::ports::TaskTranslator;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default upper bound on submitted free text, in code points.
///
/// Matches the limit the reference parser deployment enforces; rejecting
/// locally avoids an outbound call that would be refused anyway.
pub const DEFAULT_MAX_TEXT_LEN: usize = 2000;

/// Ingestion orchestrator.
///
/// Sequences translation, per-candidate validation, and per-candidate
/// persistence for one free-text submission. Translation failures abort the
/// batch with no writes; candidate failures are recorded without aborting
/// the remaining candidates (deliberate at-least-effort policy, not an
/// all-or-nothing transaction).
pub struct IngestionService<T, R, C>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    translator: Arc<T>,
    tasks: TaskService<R, C>,
    max_text_len: usize,
}

// Manual impl: the service holds `Arc` handles and a cheaply cloneable
// task service, so cloning must not require `T`, `R`, or `C` to be `Clone`
// as the derive would.
impl<T, R, C> Clone for IngestionService<T, R, C>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
            tasks: self.tasks.clone(),
            max_text_len: self.max_text_len,
        }
    }
}

impl<T, R, C> IngestionService<T, R, C>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates an orchestrator with the default text length bound.
    #[must_use]
    pub const fn new(translator: Arc<T>, tasks: TaskService<R, C>) -> Self {
        Self {
            translator,
            tasks,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    /// Overrides the free-text length bound.
    #[must_use]
    pub const fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Runs one submission through the pipeline.
    ///
    /// Candidates are persisted in the order returned by the parser and the
    /// report preserves that order; the repository's canonical ordering
    /// applies only when tasks are subsequently listed.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError`] when the text fails its local bounds or
    /// when translation fails; in both cases nothing has been persisted.
    pub async fn ingest(&self, text: &str) -> Result<IngestionReport, IngestionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(IngestionError::EmptyText);
        }
        let length = trimmed.chars().count();
        if length > self.max_text_len {
            return Err(IngestionError::TextTooLong {
                actual: length,
                limit: self.max_text_len,
            });
        }

        let candidates = self.translator.translate(trimmed).await?;
        debug!(candidates = candidates.len(), "translation completed");
        if candidates.is_empty() {
            return Ok(IngestionReport::empty());
        }

        Ok(self.persist_candidates(candidates).await)
    }

    /// Validates and persists each candidate independently, correlating
    /// every outcome back to its originating candidate index.
    async fn persist_candidates(&self, candidates: Vec<TaskCandidate>) -> IngestionReport {
        let requests: Vec<_> = candidates
            .iter()
            .cloned()
            .map(TaskCandidate::into_create_request)
            .collect();
        let outcomes = self.tasks.create_many(&requests).await;

        let mut report = IngestionReport::empty();
        for (position, (candidate, outcome)) in (1usize..).zip(candidates.into_iter().zip(outcomes))
        {
            match outcome {
                Ok(task) => report.created.push(task),
                Err(err) => {
                    warn!(position, error = %err, "candidate rejected");
                    report.failures.push(CandidateFailure {
                        index: position,
                        candidate,
                        message: err.to_string(),
                    });
                }
            }
        }
        report
    }
}
