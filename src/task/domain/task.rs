//! Task aggregate root and the priority/status enumerations.

use super::{
    Assignee, DueDate, DueTime, ParsePriorityError, ParseTaskStatusError, TaskId, TaskName,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task urgency, P1 being the most urgent.
///
/// The derived ordering (`P1 < P2 < P3 < P4`) is the primary component of
/// the canonical read ordering and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Most urgent.
    P1,
    /// High urgency.
    P2,
    /// Normal urgency; the default when unspecified.
    P3,
    /// Lowest urgency.
    P4,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }

    /// Leniently interprets advisory priority text from the parser.
    ///
    /// Returns `None` for anything that is not a member of the enumeration
    /// (after trimming and case folding); callers apply the default instead
    /// of rejecting.
    #[must_use]
    pub fn from_advisory(value: &str) -> Option<Self> {
        Self::try_from(value.trim().to_ascii_uppercase().as_str()).ok()
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::P3
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            "P3" => Ok(Self::P3),
            "P4" => Ok(Self::P4),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Validated input for creating a task record.
///
/// Produced by the validation layer; every field has already passed its
/// constraints and the priority default has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Validated task name.
    pub task_name: TaskName,
    /// Validated assignee.
    pub assignee: Assignee,
    /// Validated due date.
    pub due_date: DueDate,
    /// Validated due time.
    pub due_time: DueTime,
    /// Priority, defaulted to [`Priority::P3`] when unspecified.
    pub priority: Priority,
}

/// Validated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement task name, if supplied.
    pub task_name: Option<TaskName>,
    /// Replacement assignee, if supplied.
    pub assignee: Option<Assignee>,
    /// Replacement due date, if supplied.
    pub due_date: Option<DueDate>,
    /// Replacement due time, if supplied.
    pub due_time: Option<DueTime>,
    /// Replacement priority, if supplied.
    pub priority: Option<Priority>,
    /// Replacement status, if supplied.
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Returns `true` when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.assignee.is_none()
            && self.due_date.is_none()
            && self.due_time.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub task_name: TaskName,
    /// Persisted assignee.
    pub assignee: Assignee,
    /// Persisted due date.
    pub due_date: DueDate,
    /// Persisted due time.
    pub due_time: DueTime,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// Constructed only from validated data, so every held value satisfies its
/// field constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    task_name: TaskName,
    assignee: Assignee,
    due_date: DueDate,
    due_time: DueTime,
    priority: Priority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier, `todo` status, and
    /// clock-assigned timestamps.
    #[must_use]
    pub fn create(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            task_name: data.task_name,
            assignee: data.assignee,
            due_date: data.due_date,
            due_time: data.due_time,
            priority: data.priority,
            status: TaskStatus::Todo,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            task_name,
            assignee,
            due_date,
            due_time,
            priority,
            status,
            created_at,
            updated_at,
        } = data;
        Self {
            id,
            task_name,
            assignee,
            due_date,
            due_time,
            priority,
            status,
            created_at,
            updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn task_name(&self) -> &TaskName {
        &self.task_name
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> &Assignee {
        &self.assignee
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the due time.
    #[must_use]
    pub const fn due_time(&self) -> DueTime {
        self.due_time
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the canonical ordering key: priority, then due date, then
    /// due time, all ascending.
    #[must_use]
    pub const fn ordering_key(&self) -> (Priority, DueDate, DueTime) {
        (self.priority, self.due_date, self.due_time)
    }

    /// Merges a validated partial update into this task and refreshes
    /// `updated_at`. Fields absent from the patch are left untouched.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(task_name) = patch.task_name {
            self.task_name = task_name;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(due_time) = patch.due_time {
            self.due_time = due_time;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = clock.utc();
    }
}
