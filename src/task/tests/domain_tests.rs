//! Domain-focused tests for task field types and the aggregate.

use crate::task::domain::{
    Assignee, DueDate, DueTime, NewTaskData, Priority, Task, TaskDomainError, TaskName,
    TaskPatch, TaskStatus,
};
use mockable::DefaultClock;
use rstest::rstest;

fn sample_data() -> NewTaskData {
    NewTaskData {
        task_name: TaskName::new("Finish landing page").expect("valid name"),
        assignee: Assignee::new("Aman").expect("valid assignee"),
        due_date: DueDate::parse("2024-06-20").expect("valid date"),
        due_time: DueTime::parse("23:00").expect("valid time"),
        priority: Priority::default(),
    }
}

#[rstest]
fn task_name_trims_surrounding_whitespace() {
    let name = TaskName::new("  Finish landing page  ").expect("valid name");
    assert_eq!(name.as_str(), "Finish landing page");
}

#[rstest]
fn task_name_rejects_empty_after_trim() {
    assert_eq!(TaskName::new("   "), Err(TaskDomainError::EmptyTaskName));
}

#[rstest]
fn task_name_rejects_over_255_code_points() {
    let long = "x".repeat(256);
    assert!(matches!(
        TaskName::new(long),
        Err(TaskDomainError::TaskNameTooLong { actual: 256, .. })
    ));
}

#[rstest]
fn task_name_counts_code_points_not_bytes() {
    // 255 multi-byte code points are within bounds.
    let name = "é".repeat(255);
    assert!(TaskName::new(name).is_ok());
}

#[rstest]
fn assignee_rejects_over_100_code_points() {
    let long = "a".repeat(101);
    assert!(matches!(
        Assignee::new(long),
        Err(TaskDomainError::AssigneeTooLong { actual: 101, .. })
    ));
}

#[rstest]
#[case("2024-06-20")]
#[case("2000-01-01")]
#[case("2024-02-29")]
fn due_date_accepts_exact_lexical_form(#[case] raw: &str) {
    let date = DueDate::parse(raw).expect("valid date");
    assert_eq!(date.to_string(), raw);
}

#[rstest]
#[case("2024-6-20")]
#[case("20-06-2024")]
#[case("2024/06/20")]
#[case("2024-13-01")]
#[case("2023-02-29")]
#[case("2024-06-20T00:00")]
#[case("")]
fn due_date_rejects_other_forms(#[case] raw: &str) {
    assert!(matches!(
        DueDate::parse(raw),
        Err(TaskDomainError::InvalidDueDate(_))
    ));
}

#[rstest]
#[case("00:00")]
#[case("23:59")]
#[case("09:30")]
fn due_time_accepts_24_hour_form(#[case] raw: &str) {
    let time = DueTime::parse(raw).expect("valid time");
    assert_eq!(time.to_string(), raw);
}

#[rstest]
#[case("9:00")]
#[case("24:00")]
#[case("12:60")]
#[case("12:00:00")]
#[case("noon")]
fn due_time_rejects_other_forms(#[case] raw: &str) {
    assert!(matches!(
        DueTime::parse(raw),
        Err(TaskDomainError::InvalidDueTime(_))
    ));
}

#[rstest]
fn priority_orders_p1_first() {
    assert!(Priority::P1 < Priority::P2);
    assert!(Priority::P2 < Priority::P3);
    assert!(Priority::P3 < Priority::P4);
}

#[rstest]
fn priority_defaults_to_p3() {
    assert_eq!(Priority::default(), Priority::P3);
}

#[rstest]
#[case("P1", Some(Priority::P1))]
#[case("p2", Some(Priority::P2))]
#[case(" P4 ", Some(Priority::P4))]
#[case("urgent", None)]
#[case("", None)]
fn advisory_priority_is_lenient(#[case] raw: &str, #[case] expected: Option<Priority>) {
    assert_eq!(Priority::from_advisory(raw), expected);
}

#[rstest]
fn strict_priority_rejects_non_members() {
    assert!(Priority::try_from("urgent").is_err());
    assert!(Priority::try_from("p1").is_err());
}

#[rstest]
#[case("todo", TaskStatus::Todo)]
#[case("in-progress", TaskStatus::InProgress)]
#[case("completed", TaskStatus::Completed)]
fn status_round_trips_storage_form(#[case] raw: &str, #[case] status: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(status));
    assert_eq!(status.as_str(), raw);
}

#[rstest]
fn create_assigns_defaults_and_timestamps() {
    let clock = DefaultClock;
    let task = Task::create(sample_data(), &clock);

    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.priority(), Priority::P3);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn apply_patch_merges_only_supplied_fields() {
    let clock = DefaultClock;
    let mut task = Task::create(sample_data(), &clock);
    let original_name = task.task_name().clone();

    let patch = TaskPatch {
        status: Some(TaskStatus::InProgress),
        ..TaskPatch::default()
    };
    task.apply_patch(patch, &clock);

    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.task_name(), &original_name);
    assert_eq!(task.priority(), Priority::P3);
}

#[rstest]
fn task_serializes_with_wire_field_names() {
    let clock = DefaultClock;
    let task = Task::create(sample_data(), &clock);
    let value = serde_json::to_value(&task).expect("serializable task");

    assert_eq!(value["taskName"], "Finish landing page");
    assert_eq!(value["assignee"], "Aman");
    assert_eq!(value["dueDate"], "2024-06-20");
    assert_eq!(value["dueTime"], "23:00");
    assert_eq!(value["priority"], "P3");
    assert_eq!(value["status"], "todo");
}
