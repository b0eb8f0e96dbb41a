//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub task_name: String,
    /// Assignee.
    pub assignee: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Due time of day.
    pub due_time: NaiveTime,
    /// Priority storage form.
    pub priority: String,
    /// Status storage form.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub task_name: String,
    /// Assignee.
    pub assignee: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Due time of day.
    pub due_time: NaiveTime,
    /// Priority storage form.
    pub priority: String,
    /// Status storage form.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied on task update; the service merges partial updates
/// before persistence, so every mutable column is written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Task name.
    pub task_name: String,
    /// Assignee.
    pub assignee: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Due time of day.
    pub due_time: NaiveTime,
    /// Priority storage form.
    pub priority: String,
    /// Status storage form.
    pub status: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
