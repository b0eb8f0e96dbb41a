//! Mapping from service failures onto HTTP status codes and envelopes.

use super::envelope::FailureEnvelope;
use crate::ingestion::domain::{IngestionError, TranslationError};
use crate::task::services::TaskServiceError;
use crate::task::validation::ValidationErrors;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Failures surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failed (HTTP 400).
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The referenced task does not exist (HTTP 404).
    #[error("Task not found")]
    NotFound,

    /// The path parameter is not a well-formed task identifier (HTTP 400).
    #[error("Invalid task ID format")]
    InvalidTaskId,

    /// The request body is missing or malformed (HTTP 400).
    #[error("{0}")]
    BadRequest(String),

    /// An ingestion-stage failure (status per the translation taxonomy).
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    /// Internal persistence or infrastructure failure (HTTP 500).
    #[error("Internal server error")]
    Internal(String),
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(errors) => Self::Validation(errors),
            TaskServiceError::NotFound(_) => Self::NotFound,
            TaskServiceError::Repository(cause) => Self::Internal(cause.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidTaskId | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Ingestion(err) => ingestion_status(err),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn envelope(&self) -> FailureEnvelope {
        match self {
            Self::Validation(errors) => FailureEnvelope::with_errors(
                "Validation failed",
                errors.violations().to_vec(),
            ),
            Self::Ingestion(err) => FailureEnvelope::new(ingestion_message(err)),
            Self::Internal(_) => FailureEnvelope::new("Internal server error"),
            other => FailureEnvelope::new(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            error!(%cause, "request failed");
        }
        (self.status(), Json(self.envelope())).into_response()
    }
}

const fn ingestion_status(err: &IngestionError) -> StatusCode {
    match err {
        IngestionError::EmptyText | IngestionError::TextTooLong { .. } => StatusCode::BAD_REQUEST,
        IngestionError::Translation(translation) => match translation {
            TranslationError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            TranslationError::InvalidUpstreamInput(_) => StatusCode::BAD_REQUEST,
            TranslationError::UnexpectedUpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

fn ingestion_message(err: &IngestionError) -> String {
    match err {
        IngestionError::Translation(TranslationError::ServiceUnavailable) => {
            "NLP service is unavailable. Please try again later.".to_owned()
        }
        IngestionError::Translation(TranslationError::InvalidUpstreamInput(_)) => {
            "Invalid input for natural language processing".to_owned()
        }
        IngestionError::Translation(TranslationError::UnexpectedUpstreamFailure(_)) => {
            "Failed to process natural language input".to_owned()
        }
        other => other.to_string(),
    }
}
