//! Router-level tests exercising the HTTP surface end to end over the
//! in-memory store.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes into JSON bodies after shape checks"
)]
#![expect(
    clippy::shadow_unrelated,
    reason = "Test code reuses variable names for clarity in sequential assertions"
)]

use std::sync::Arc;

use crate::api::{build_router, cors_layer, AppState};
use crate::ingestion::domain::{TaskCandidate, TranslationError};
use crate::ingestion::ports::{TaskTranslator, TranslationResult};
use crate::ingestion::services::IngestionService;
use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::services::TaskService;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Translator double replying with a canned result.
struct StubTranslator(TranslationResult);

#[async_trait]
impl TaskTranslator for StubTranslator {
    async fn translate(&self, _text: &str) -> TranslationResult {
        self.0.clone()
    }
}

fn app_with_translation(result: TranslationResult) -> Router {
    let tasks = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let ingestion = IngestionService::new(Arc::new(StubTranslator(result)), tasks.clone());
    build_router(Arc::new(AppState::new(tasks, ingestion)))
}

fn app() -> Router {
    app_with_translation(Ok(Vec::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

fn create_body(name: &str, time: &str, priority: Option<&str>) -> Value {
    let mut body = json!({
        "taskName": name,
        "assignee": "Aman",
        "dueDate": "2024-06-20",
        "dueTime": time,
    });
    if let Some(priority) = priority {
        body["priority"] = json!(priority);
    }
    body
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_replies_with_the_success_envelope() {
    let (status, body) = send(&app(), get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Task Manager API is running"));
    assert!(body["data"]["service"].is_string());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_replies_created_with_store_assigned_fields() {
    let app = app();
    let request = json_request(
        "POST",
        "/api/tasks",
        create_body("Finish landing page", "23:00", None),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Task created successfully"));
    assert_eq!(body["data"]["taskName"], json!("Finish landing page"));
    assert_eq!(body["data"]["status"], json!("todo"));
    assert_eq!(body["data"]["priority"], json!("P3"));
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_reports_field_violations_in_the_failure_envelope() {
    let request = json_request("POST", "/api/tasks", json!({"taskName": "   "}));
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    let errors = body["errors"].as_array().expect("errors array");
    let fields: Vec<_> = errors
        .iter()
        .map(|violation| violation["field"].as_str().expect("field"))
        .collect();
    assert_eq!(fields, vec!["taskName", "assignee", "dueDate", "dueTime"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_still_gets_the_failure_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].is_string());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_returns_canonical_order_regardless_of_insertion_order() {
    let app = app();
    for (name, time, priority) in [
        ("Late P2", "18:00", Some("P2")),
        ("Only P1", "09:00", Some("P1")),
        ("Early P2", "09:00", Some("P2")),
    ] {
        let (status, _) = send(
            &app,
            json_request("POST", "/api/tasks", create_body(name, time, priority)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get_request("/api/tasks")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Tasks retrieved successfully"));
    let names: Vec<_> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|task| task["taskName"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Only P1", "Early P2", "Late P2"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_round_trips_a_created_task() {
    let app = app();
    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/tasks",
            create_body("Finish landing page", "23:00", Some("P2")),
        ),
    )
    .await;
    let id = created["data"]["id"].as_str().expect("id").to_owned();

    let (status, body) = send(&app, get_request(&format!("/api/tasks/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created["data"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_for_an_unknown_id_is_not_found() {
    let uri = format!("/api/tasks/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app(), get_request(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Task not found"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_with_a_malformed_id_is_a_bad_request() {
    let (status, body) = send(&app(), get_request("/api/tasks/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid task ID format"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_merges_a_partial_payload() {
    let app = app();
    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/tasks",
            create_body("Finish landing page", "23:00", None),
        ),
    )
    .await;
    let id = created["data"]["id"].as_str().expect("id").to_owned();

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/tasks/{id}"),
            json!({"status": "in-progress"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Task updated successfully"));
    assert_eq!(body["data"]["status"], json!("in-progress"));
    assert_eq!(body["data"]["taskName"], created["data"]["taskName"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_an_empty_payload_is_a_bad_request() {
    let app = app();
    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/tasks",
            create_body("Finish landing page", "23:00", None),
        ),
    )
    .await;
    let id = created["data"]["id"].as_str().expect("id").to_owned();

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/api/tasks/{id}"), json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_replies_null_data_and_repeats_are_not_found() {
    let app = app();
    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/tasks",
            create_body("Finish landing page", "23:00", None),
        ),
    )
    .await;
    let id = created["data"]["id"].as_str().expect("id").to_owned();
    let uri = format!("/api/tasks/{id}");

    let delete = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(&app, delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Task deleted successfully"));
    assert_eq!(body["data"], Value::Null);

    let repeat = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(&app, repeat).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn parsed_candidate(name: &str, assignee: &str) -> TaskCandidate {
    TaskCandidate {
        task_name: name.into(),
        assignee: assignee.into(),
        due_date: "2024-06-20".into(),
        due_time: "23:00".into(),
        priority: None,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nlp_parse_persists_the_candidates_and_reports_the_count() {
    let app = app_with_translation(Ok(vec![parsed_candidate("Finish landing page", "Aman")]));

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/nlp/parse",
            json!({"text": "Finish landing page Aman today 11pm"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Successfully parsed and created 1 tasks")
    );
    assert_eq!(body["data"]["tasks"].as_array().expect("tasks").len(), 1);
    assert!(body["data"].get("failures").is_none());

    let (_, listed) = send(&app, get_request("/api/tasks")).await;
    assert_eq!(listed["data"].as_array().expect("data").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nlp_parse_reports_a_partial_batch_as_success_with_failures() {
    let app = app_with_translation(Ok(vec![
        parsed_candidate("First", "Aman"),
        parsed_candidate("Second", "   "),
    ]));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/nlp/parse", json!({"text": "two things"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Created 1 of 2 tasks"));
    let failures = body["data"]["failures"].as_array().expect("failures");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["index"], json!(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nlp_parse_rejects_an_all_failing_batch() {
    let app = app_with_translation(Ok(vec![parsed_candidate("", "Aman")]));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/nlp/parse", json!({"text": "one broken thing"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("All 1 parsed tasks failed"));
    assert_eq!(
        body["data"]["failures"].as_array().expect("failures").len(),
        1
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nlp_parse_without_text_is_a_bad_request() {
    let (status, body) = send(
        &app(),
        json_request("POST", "/api/nlp/parse", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Text input is required"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nlp_parse_maps_an_unreachable_parser_to_service_unavailable() {
    let app = app_with_translation(Err(TranslationError::ServiceUnavailable));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/nlp/parse", json!({"text": "anything"})),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["message"],
        json!("NLP service is unavailable. Please try again later.")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nlp_parse_maps_an_upstream_rejection_to_bad_request() {
    let app = app_with_translation(Err(TranslationError::InvalidUpstreamInput(
        "unparseable".into(),
    )));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/nlp/parse", json!({"text": "???"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("Invalid input for natural language processing")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nlp_parse_maps_other_upstream_failures_to_internal_error() {
    let app = app_with_translation(Err(TranslationError::UnexpectedUpstreamFailure(
        "boom".into(),
    )));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/nlp/parse", json!({"text": "anything"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        json!("Failed to process natural language input")
    );
}

#[rstest]
fn cors_layer_accepts_a_well_formed_origin() {
    assert!(cors_layer("http://localhost:3000").is_ok());
}

#[rstest]
fn cors_layer_rejects_an_origin_that_is_not_a_header_value() {
    // Control characters can never appear in an Origin header.
    assert!(cors_layer("http://example.com\n").is_err());
}
