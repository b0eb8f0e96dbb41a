//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("Task name is required")]
    EmptyTaskName,

    /// The task name exceeds the maximum length.
    #[error("Task name too long: {actual} code points, maximum is {max}")]
    TaskNameTooLong {
        /// Observed length in code points.
        actual: usize,
        /// Maximum allowed length in code points.
        max: usize,
    },

    /// The assignee is empty after trimming.
    #[error("Assignee is required")]
    EmptyAssignee,

    /// The assignee exceeds the maximum length.
    #[error("Assignee name too long: {actual} code points, maximum is {max}")]
    AssigneeTooLong {
        /// Observed length in code points.
        actual: usize,
        /// Maximum allowed length in code points.
        max: usize,
    },

    /// The due date does not match the `YYYY-MM-DD` lexical form or is not a
    /// valid calendar date.
    #[error("Invalid date format (YYYY-MM-DD): '{0}'")]
    InvalidDueDate(String),

    /// The due time does not match the `HH:MM` 24-hour lexical form.
    #[error("Invalid time format (HH:MM): '{0}'")]
    InvalidDueTime(String),

    /// The priority value is not a member of the enumeration.
    #[error(transparent)]
    UnknownPriority(#[from] ParsePriorityError),

    /// The status value is not a member of the enumeration.
    #[error(transparent)]
    UnknownStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing priority values from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid priority '{0}', expected one of P1, P2, P3, P4")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task status values from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid status '{0}', expected one of todo, in-progress, completed")]
pub struct ParseTaskStatusError(pub String);
