//! Domain model for task records.
//!
//! The task domain models the persisted task entity with validated scalar
//! types, closed priority/status enumerations, and the canonical ordering
//! key, while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod fields;
mod ids;
mod task;

pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use fields::{Assignee, DueDate, DueTime, TaskName};
pub use ids::TaskId;
pub use task::{NewTaskData, PersistedTaskData, Priority, Task, TaskPatch, TaskStatus};
