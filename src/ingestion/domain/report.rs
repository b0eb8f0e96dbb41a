//! Terminal outcome of an ingestion batch.

use super::TaskCandidate;
use crate::task::domain::Task;
use serde::Serialize;

/// Terminal state of a persisting ingestion batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngestionOutcome {
    /// Every candidate persisted (including the zero-candidate batch).
    Completed,
    /// Some candidates persisted and some failed.
    PartiallyCompleted,
    /// Every candidate failed.
    Failed,
}

/// One candidate that failed validation or persistence.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateFailure {
    /// One-based position of the candidate in the parser's output order.
    pub index: usize,
    /// The candidate as returned by the parser.
    pub candidate: TaskCandidate,
    /// Human-readable reason, carrying field-level detail where available.
    pub message: String,
}

/// Result of the persisting stage of an ingestion batch.
///
/// Created tasks and failures both preserve the parser's candidate order;
/// the canonical repository ordering applies only to subsequent listings,
/// never to the ingestion response.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionReport {
    /// Tasks persisted, in candidate order.
    pub created: Vec<Task>,
    /// Candidates that failed, in candidate order.
    pub failures: Vec<CandidateFailure>,
}

impl IngestionReport {
    /// Report for a batch with zero candidates.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            created: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns the terminal state of the batch.
    #[must_use]
    pub fn outcome(&self) -> IngestionOutcome {
        if self.failures.is_empty() {
            IngestionOutcome::Completed
        } else if self.created.is_empty() {
            IngestionOutcome::Failed
        } else {
            IngestionOutcome::PartiallyCompleted
        }
    }
}
