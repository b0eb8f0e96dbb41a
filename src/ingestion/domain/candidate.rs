//! Unvalidated task candidates produced by the natural-language parser.

use crate::task::domain::Priority;
use crate::task::validation::CreateTaskRequest;
use serde::{Deserialize, Serialize};

/// A task-shaped record returned by the parser, not yet validated or
/// persisted.
///
/// All fields are carried verbatim; strictness is enforced downstream by
/// the validation layer. The `priority` field is advisory free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCandidate {
    /// Proposed task name.
    pub task_name: String,
    /// Proposed assignee.
    pub assignee: String,
    /// Proposed due date text.
    pub due_date: String,
    /// Proposed due time text.
    pub due_time: String,
    /// Advisory priority text; values outside the enumeration are treated
    /// as absent rather than rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl TaskCandidate {
    /// Interprets the advisory priority leniently.
    ///
    /// Returns `None` when the text is absent or not a member of the
    /// enumeration, which triggers the `P3` default downstream. The
    /// normalization is silent; no warning is surfaced to the end user.
    #[must_use]
    pub fn advisory_priority(&self) -> Option<Priority> {
        self.priority
            .as_deref()
            .and_then(Priority::from_advisory)
    }

    /// Converts the candidate into a create request for strict validation.
    ///
    /// Unrecognized advisory priority is dropped here so validation applies
    /// the default instead of rejecting the candidate.
    #[must_use]
    pub fn into_create_request(self) -> CreateTaskRequest {
        let priority = self.advisory_priority().map(|p| p.as_str().to_owned());
        CreateTaskRequest {
            task_name: Some(self.task_name),
            assignee: Some(self.assignee),
            due_date: Some(self.due_date),
            due_time: Some(self.due_time),
            priority,
        }
    }
}
