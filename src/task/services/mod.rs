//! Application services for task records.

mod catalogue;

pub use catalogue::{TaskService, TaskServiceError, TaskServiceResult};
