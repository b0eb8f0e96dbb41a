//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task name.
        #[max_length = 255]
        task_name -> Varchar,
        /// Assignee.
        #[max_length = 100]
        assignee -> Varchar,
        /// Due date.
        due_date -> Date,
        /// Due time of day.
        due_time -> Time,
        /// Priority; the stored forms `P1`–`P4` sort lexically in canonical
        /// order.
        #[max_length = 2]
        priority -> Varchar,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
