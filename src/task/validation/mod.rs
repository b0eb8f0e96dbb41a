//! Pure validation and normalization for task field input.
//!
//! Validation is side-effect free: raw request payloads go in, either a
//! fully validated domain value or a structured list of field-level
//! violations comes out. Callers surface the per-field messages to end
//! users, so a failure is never collapsed into a single opaque error.

pub mod rules;

use crate::task::domain::{NewTaskData, TaskPatch};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raw payload for creating a task.
///
/// Every field is optional at the wire level so that missing fields are
/// reported as violations rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task name, 1–255 code points after trimming.
    pub task_name: Option<String>,
    /// Assignee, 1–100 code points after trimming.
    pub assignee: Option<String>,
    /// Due date in `YYYY-MM-DD` form.
    pub due_date: Option<String>,
    /// Due time in 24-hour `HH:MM` form.
    pub due_time: Option<String>,
    /// Priority; defaults to `P3` when absent.
    pub priority: Option<String>,
}

/// Raw payload for partially updating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// Replacement task name, if supplied.
    pub task_name: Option<String>,
    /// Replacement assignee, if supplied.
    pub assignee: Option<String>,
    /// Replacement due date, if supplied.
    pub due_date: Option<String>,
    /// Replacement due time, if supplied.
    pub due_time: Option<String>,
    /// Replacement priority, if supplied.
    pub priority: Option<String>,
    /// Replacement status, if supplied.
    pub status: Option<String>,
}

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (for example `taskName`).
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldViolation {
    /// Creates a violation for the given field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty collection of field-level violations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Wraps a non-empty violation list.
    #[must_use]
    pub const fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    /// Returns the violations.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Consumes the error, returning the violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for violation in &self.0 {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

/// Validates a create payload, reporting every violation in one pass.
///
/// Text fields are trimmed before their bounds are checked; an absent
/// priority defaults to `P3`, while a present but unrecognized priority is a
/// violation (lenient interpretation of advisory parser output happens
/// upstream in the ingestion pipeline, not here).
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing each failing field.
pub fn validate_create(request: &CreateTaskRequest) -> Result<NewTaskData, ValidationErrors> {
    let mut violations = Vec::new();

    let task_name = collect(&mut violations, rules::task_name(request.task_name.as_deref()));
    let assignee = collect(&mut violations, rules::assignee(request.assignee.as_deref()));
    let due_date = collect(&mut violations, rules::due_date(request.due_date.as_deref()));
    let due_time = collect(&mut violations, rules::due_time(request.due_time.as_deref()));
    let priority = collect(&mut violations, rules::priority(request.priority.as_deref()));

    match (task_name, assignee, due_date, due_time, priority) {
        (Some(task_name), Some(assignee), Some(due_date), Some(due_time), Some(priority))
            if violations.is_empty() =>
        {
            Ok(NewTaskData {
                task_name,
                assignee,
                due_date,
                due_time,
                priority,
            })
        }
        _ => Err(ValidationErrors::new(violations)),
    }
}

/// Validates a partial-update payload, checking only the supplied fields.
///
/// # Errors
///
/// Returns [`ValidationErrors`] when a supplied field fails its constraint
/// or when no field is supplied at all.
pub fn validate_update(request: &UpdateTaskRequest) -> Result<TaskPatch, ValidationErrors> {
    let mut violations = Vec::new();

    let mut patch = TaskPatch::default();
    if request.task_name.is_some() {
        patch.task_name = collect(&mut violations, rules::task_name(request.task_name.as_deref()));
    }
    if request.assignee.is_some() {
        patch.assignee = collect(&mut violations, rules::assignee(request.assignee.as_deref()));
    }
    if request.due_date.is_some() {
        patch.due_date = collect(&mut violations, rules::due_date(request.due_date.as_deref()));
    }
    if request.due_time.is_some() {
        patch.due_time = collect(&mut violations, rules::due_time(request.due_time.as_deref()));
    }
    if request.priority.is_some() {
        patch.priority = collect(&mut violations, rules::priority(request.priority.as_deref()));
    }
    if let Some(status) = request.status.as_deref() {
        patch.status = collect(&mut violations, rules::status(status));
    }

    if !violations.is_empty() {
        return Err(ValidationErrors::new(violations));
    }
    if patch.is_empty() {
        return Err(ValidationErrors::new(vec![FieldViolation::new(
            "request",
            "At least one updatable field must be supplied",
        )]));
    }
    Ok(patch)
}

/// Pushes the violation of a failed rule, returning the success value
/// otherwise.
fn collect<T>(
    violations: &mut Vec<FieldViolation>,
    outcome: Result<T, FieldViolation>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}
