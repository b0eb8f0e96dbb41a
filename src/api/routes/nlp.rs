//! Free-text ingestion route.

use crate::api::envelope::Envelope;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::ingestion::domain::{CandidateFailure, IngestionOutcome};
use crate::ingestion::ports::TaskTranslator;
use crate::task::domain::Task;
use crate::task::ports::TaskRepository;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for free-text ingestion.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseTasksBody {
    /// Free-text submission describing one or more tasks.
    pub text: Option<String>,
}

/// Ingestion reply payload: persisted tasks plus any per-candidate
/// failures, both in the parser's candidate order.
#[derive(Debug, Clone, Serialize)]
pub struct ParseTasksData {
    /// Tasks persisted from the submission.
    pub tasks: Vec<Task>,
    /// Candidates that failed validation or persistence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<CandidateFailure>,
}

/// `POST /api/nlp/parse`: translate free text and persist the resulting
/// candidates.
///
/// Full success and partial success both reply `200` with the persisted
/// tasks; a batch where every candidate failed replies `400`, still
/// enumerating the failures so callers never have to guess which of the
/// candidates made it into storage. Translation failures map to 503/400/500
/// per the taxonomy, with nothing persisted.
pub async fn parse_tasks<T, R, C>(
    State(state): State<Arc<AppState<T, R, C>>>,
    body: Result<Json<ParseTasksBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<ParseTasksData>>), ApiError>
where
    T: TaskTranslator,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(request) = body?;
    let text = request
        .text
        .ok_or_else(|| ApiError::BadRequest("Text input is required".to_owned()))?;

    let report = state.ingestion.ingest(&text).await?;
    let outcome = report.outcome();
    let created = report.created.len();
    let failed = report.failures.len();

    let message = match outcome {
        IngestionOutcome::Completed => {
            format!("Successfully parsed and created {created} tasks")
        }
        IngestionOutcome::PartiallyCompleted => {
            format!("Created {created} of {} tasks", created + failed)
        }
        IngestionOutcome::Failed => format!("All {failed} parsed tasks failed"),
    };

    let status = match outcome {
        IngestionOutcome::Failed => StatusCode::BAD_REQUEST,
        IngestionOutcome::Completed | IngestionOutcome::PartiallyCompleted => StatusCode::OK,
    };

    let mut envelope = Envelope::with_message(
        ParseTasksData {
            tasks: report.created,
            failures: report.failures,
        },
        message,
    );
    envelope.success = outcome != IngestionOutcome::Failed;
    Ok((status, Json(envelope)))
}
