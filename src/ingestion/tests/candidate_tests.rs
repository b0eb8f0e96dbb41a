//! Tests for candidate interpretation and conversion.

use crate::ingestion::domain::TaskCandidate;
use crate::task::domain::Priority;
use rstest::rstest;

fn candidate(priority: Option<&str>) -> TaskCandidate {
    TaskCandidate {
        task_name: "Finish landing page".into(),
        assignee: "Aman".into(),
        due_date: "2024-06-20".into(),
        due_time: "23:00".into(),
        priority: priority.map(Into::into),
    }
}

#[rstest]
#[case(Some("P1"), Some(Priority::P1))]
#[case(Some("p2"), Some(Priority::P2))]
#[case(Some("  P4  "), Some(Priority::P4))]
#[case(Some("urgent"), None)]
#[case(Some("P5"), None)]
#[case(None, None)]
fn advisory_priority_is_lenient(
    #[case] raw: Option<&str>,
    #[case] expected: Option<Priority>,
) {
    assert_eq!(candidate(raw).advisory_priority(), expected);
}

#[rstest]
fn into_create_request_keeps_a_recognized_priority() {
    let request = candidate(Some("p1")).into_create_request();
    assert_eq!(request.priority.as_deref(), Some("P1"));
    assert_eq!(request.task_name.as_deref(), Some("Finish landing page"));
    assert_eq!(request.due_date.as_deref(), Some("2024-06-20"));
}

#[rstest]
fn into_create_request_drops_an_unrecognized_priority() {
    let request = candidate(Some("urgent")).into_create_request();
    assert_eq!(request.priority, None);
}

#[rstest]
fn candidates_deserialize_from_camel_case_wire_form() {
    let parsed: TaskCandidate = serde_json::from_str(
        r#"{"taskName":"Call the bank","assignee":"Riya","dueDate":"2024-07-01","dueTime":"09:30"}"#,
    )
    .expect("valid candidate payload");

    assert_eq!(parsed.task_name, "Call the bank");
    assert_eq!(parsed.assignee, "Riya");
    assert_eq!(parsed.priority, None);
}
