//! Individual validation rule implementations.
//!
//! Each rule is a pure function that validates one field of a task payload.
//! Rules return the constructed domain value on success or a
//! [`FieldViolation`] naming the field and the human-readable reason.

use super::FieldViolation;
use crate::task::domain::{
    Assignee, DueDate, DueTime, Priority, TaskDomainError, TaskName, TaskStatus,
};

/// Wire name of the task name field.
pub const FIELD_TASK_NAME: &str = "taskName";
/// Wire name of the assignee field.
pub const FIELD_ASSIGNEE: &str = "assignee";
/// Wire name of the due date field.
pub const FIELD_DUE_DATE: &str = "dueDate";
/// Wire name of the due time field.
pub const FIELD_DUE_TIME: &str = "dueTime";
/// Wire name of the priority field.
pub const FIELD_PRIORITY: &str = "priority";
/// Wire name of the status field.
pub const FIELD_STATUS: &str = "status";

/// Validates the task name; a missing value is reported like an empty one.
///
/// # Errors
///
/// Returns a [`FieldViolation`] on `taskName` when the value is missing,
/// empty after trimming, or over-long.
pub fn task_name(value: Option<&str>) -> Result<TaskName, FieldViolation> {
    TaskName::new(value.unwrap_or_default()).map_err(|err| domain_violation(FIELD_TASK_NAME, &err))
}

/// Validates the assignee; a missing value is reported like an empty one.
///
/// # Errors
///
/// Returns a [`FieldViolation`] on `assignee` when the value is missing,
/// empty after trimming, or over-long.
pub fn assignee(value: Option<&str>) -> Result<Assignee, FieldViolation> {
    Assignee::new(value.unwrap_or_default()).map_err(|err| domain_violation(FIELD_ASSIGNEE, &err))
}

/// Validates the due date against the exact `YYYY-MM-DD` lexical form.
///
/// # Errors
///
/// Returns a [`FieldViolation`] on `dueDate` when the value is missing or
/// not a valid calendar date in the required form.
pub fn due_date(value: Option<&str>) -> Result<DueDate, FieldViolation> {
    let raw = value.ok_or_else(|| FieldViolation::new(FIELD_DUE_DATE, "Due date is required"))?;
    DueDate::parse(raw).map_err(|err| domain_violation(FIELD_DUE_DATE, &err))
}

/// Validates the due time against the exact 24-hour `HH:MM` lexical form.
///
/// # Errors
///
/// Returns a [`FieldViolation`] on `dueTime` when the value is missing or
/// not a valid time in the required form.
pub fn due_time(value: Option<&str>) -> Result<DueTime, FieldViolation> {
    let raw = value.ok_or_else(|| FieldViolation::new(FIELD_DUE_TIME, "Due time is required"))?;
    DueTime::parse(raw).map_err(|err| domain_violation(FIELD_DUE_TIME, &err))
}

/// Validates the priority, applying the `P3` default when absent.
///
/// A present value must be an exact member of the enumeration; leniency for
/// advisory parser output is an ingestion concern, not a validation one.
///
/// # Errors
///
/// Returns a [`FieldViolation`] on `priority` when a supplied value is not
/// one of `P1`–`P4`.
pub fn priority(value: Option<&str>) -> Result<Priority, FieldViolation> {
    value.map_or(Ok(Priority::default()), |raw| {
        Priority::try_from(raw).map_err(|err| FieldViolation::new(FIELD_PRIORITY, err.to_string()))
    })
}

/// Validates a status value.
///
/// # Errors
///
/// Returns a [`FieldViolation`] on `status` when the value is not one of
/// `todo`, `in-progress`, `completed`.
pub fn status(value: &str) -> Result<TaskStatus, FieldViolation> {
    TaskStatus::try_from(value)
        .map_err(|err| FieldViolation::new(FIELD_STATUS, err.to_string()))
}

/// Maps a domain construction error onto the given wire field.
fn domain_violation(field: &str, err: &TaskDomainError) -> FieldViolation {
    FieldViolation::new(field, err.to_string())
}
