//! The uniform `{success, data, message}` response envelope.

use crate::task::validation::FieldViolation;
use serde::Serialize;

/// Success envelope; `data` is always present, `null` where an operation
/// yields nothing (delete).
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Always `true` on the success path.
    pub success: bool,
    /// Operation payload.
    pub data: T,
    /// Optional human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Success envelope without a message.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Success envelope with a message.
    #[must_use]
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Failure envelope; `success` is `false` and `data` is omitted.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    /// Always `false` on the failure path.
    pub success: bool,
    /// Human-readable failure summary.
    pub message: String,
    /// Field-level violations, present for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl FailureEnvelope {
    /// Failure envelope with just a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    /// Failure envelope carrying field-level violations.
    #[must_use]
    pub fn with_errors(message: impl Into<String>, errors: Vec<FieldViolation>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}
