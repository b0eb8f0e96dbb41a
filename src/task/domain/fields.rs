//! Validated scalar types for task fields.
//!
//! Each newtype enforces its lexical constraints at construction so the
//! store never holds an unvalidated value. Text fields are trimmed before
//! their bounds are checked; date and time fields must match their exact
//! lexical forms (`YYYY-MM-DD` and 24-hour `HH:MM`).

use super::TaskDomainError;
use chrono::{NaiveDate, NaiveTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum task name length in code points.
pub const MAX_TASK_NAME_LEN: usize = 255;

/// Maximum assignee length in code points.
pub const MAX_ASSIGNEE_LEN: usize = 100;

/// Non-empty, trimmed task name of 1–255 code points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the trimmed value is
    /// empty, or [`TaskDomainError::TaskNameTooLong`] when it exceeds
    /// [`MAX_TASK_NAME_LEN`] code points.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        let length = trimmed.chars().count();
        if length > MAX_TASK_NAME_LEN {
            return Err(TaskDomainError::TaskNameTooLong {
                actual: length,
                max: MAX_TASK_NAME_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the task name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, trimmed assignee name of 1–100 code points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignee(String);

impl Assignee {
    /// Creates a validated assignee, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAssignee`] when the trimmed value is
    /// empty, or [`TaskDomainError::AssigneeTooLong`] when it exceeds
    /// [`MAX_ASSIGNEE_LEN`] code points.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyAssignee);
        }
        let length = trimmed.chars().count();
        if length > MAX_ASSIGNEE_LEN {
            return Err(TaskDomainError::AssigneeTooLong {
                actual: length,
                max: MAX_ASSIGNEE_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the assignee as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Assignee {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date in the fixed lexical form `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a due date, enforcing the exact `YYYY-MM-DD` lexical form and
    /// calendar validity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the shape or the
    /// calendar date is invalid.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        if !is_date_shape(value) {
            return Err(TaskDomainError::InvalidDueDate(value.to_owned()));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDueDate(value.to_owned()))
    }

    /// Wraps an already-validated calendar date from the store.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

/// Time of day in the fixed 24-hour lexical form `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueTime(NaiveTime);

impl DueTime {
    /// Parses a due time, enforcing the exact `HH:MM` lexical form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueTime`] when the shape or the
    /// time value is invalid.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        if !is_time_shape(value) {
            return Err(TaskDomainError::InvalidDueTime(value.to_owned()));
        }
        NaiveTime::parse_from_str(value, "%H:%M")
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDueTime(value.to_owned()))
    }

    /// Wraps an already-validated time of day from the store.
    ///
    /// Sub-minute precision is never persisted, so the value is expected to
    /// sit on a whole minute.
    #[must_use]
    pub const fn from_time(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Returns the wrapped time of day.
    #[must_use]
    pub const fn time(self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for DueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for DueTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DueTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

/// Checks the `YYYY-MM-DD` shape: ten bytes, digits with dashes at 4 and 7.
fn is_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(position, byte)| {
            if position == 4 || position == 7 {
                *byte == b'-'
            } else {
                byte.is_ascii_digit()
            }
        })
}

/// Checks the `HH:MM` shape: five bytes, digits with a colon at 2.
fn is_time_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes.iter().enumerate().all(|(position, byte)| {
            if position == 2 {
                *byte == b':'
            } else {
                byte.is_ascii_digit()
            }
        })
}
