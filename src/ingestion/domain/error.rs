//! Error types for translation and ingestion.

use thiserror::Error;

/// Failures surfaced by the natural-language translation boundary.
///
/// The proxy never retries and never partially trusts a malformed response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// The remote parser was unreachable or the bounded call timed out.
    #[error("natural-language service is unavailable")]
    ServiceUnavailable,

    /// The remote parser rejected the text as unparseable.
    #[error("natural-language service rejected the input: {0}")]
    InvalidUpstreamInput(String),

    /// Any other non-success response, including a response that fails to
    /// parse into the expected shape.
    #[error("unexpected natural-language service failure: {0}")]
    UnexpectedUpstreamFailure(String),
}

/// Failures that abort an ingestion before any candidate is persisted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IngestionError {
    /// The submission is empty after trimming.
    #[error("Text input is required")]
    EmptyText,

    /// The submission exceeds the local length bound; rejected before the
    /// outbound call to avoid resource exhaustion against the remote
    /// service.
    #[error("text input too long: {actual} code points, maximum is {limit}")]
    TextTooLong {
        /// Observed length in code points.
        actual: usize,
        /// Maximum accepted length in code points.
        limit: usize,
    },

    /// The translation stage failed; no persistence was attempted.
    #[error(transparent)]
    Translation(#[from] TranslationError),
}
