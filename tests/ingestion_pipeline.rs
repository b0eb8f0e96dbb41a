//! End-to-end ingestion flows exercised through the public crate surface.
//!
//! A stub translator stands in for the remote natural-language parser so the
//! scenarios cover the orchestration policy: batch abort on translation
//! failure, per-candidate isolation, and silent advisory-priority
//! normalization.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;
use taskdeck::ingestion::{
    domain::{IngestionError, IngestionOutcome, TaskCandidate, TranslationError},
    ports::{TaskTranslator, TranslationResult},
    services::IngestionService,
};
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, TaskStatus},
    services::TaskService,
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Translator double replying with a canned result.
struct StubTranslator(TranslationResult);

#[async_trait]
impl TaskTranslator for StubTranslator {
    async fn translate(&self, _text: &str) -> TranslationResult {
        self.0.clone()
    }
}

type Services = (
    IngestionService<StubTranslator, InMemoryTaskRepository, DefaultClock>,
    TaskService<InMemoryTaskRepository, DefaultClock>,
);

fn services(result: TranslationResult) -> Services {
    let tasks = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let ingestion = IngestionService::new(Arc::new(StubTranslator(result)), tasks.clone());
    (ingestion, tasks)
}

fn candidate(name: &str, assignee: &str, time: &str, priority: Option<&str>) -> TaskCandidate {
    TaskCandidate {
        task_name: name.into(),
        assignee: assignee.into(),
        due_date: "2024-06-20".into(),
        due_time: time.into(),
        priority: priority.map(Into::into),
    }
}

/// One submission producing one persisted task visible through listing.
#[test]
fn a_parsed_submission_lands_in_the_repository() {
    let rt = test_runtime();
    let (ingestion, tasks) = services(Ok(vec![candidate(
        "Finish landing page",
        "Aman",
        "23:00",
        None,
    )]));

    let report = rt
        .block_on(ingestion.ingest("Finish landing page Aman today 11pm"))
        .expect("ingest");

    assert_eq!(report.outcome(), IngestionOutcome::Completed);
    assert_eq!(report.created.len(), 1);

    let listed = rt.block_on(tasks.list_all()).expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].task_name().as_str(), "Finish landing page");
    assert_eq!(listed[0].status(), TaskStatus::Todo);
    assert_eq!(listed[0].priority(), Priority::P3);
}

/// A multi-candidate batch with one invalid candidate persists the rest.
#[test]
fn one_bad_candidate_does_not_abort_the_batch() {
    let rt = test_runtime();
    let (ingestion, tasks) = services(Ok(vec![
        candidate("Call the bank", "Riya", "09:30", Some("P1")),
        candidate("Broken", "", "10:00", None),
        candidate("Water the plants", "Aman", "18:00", Some("p4")),
    ]));

    let report = rt.block_on(ingestion.ingest("three things")).expect("ingest");

    assert_eq!(report.outcome(), IngestionOutcome::PartiallyCompleted);
    assert_eq!(report.created.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 2);

    // Listing reflects only the persisted candidates, canonically ordered.
    let listed = rt.block_on(tasks.list_all()).expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].task_name().as_str(), "Call the bank");
    assert_eq!(listed[0].priority(), Priority::P1);
    assert_eq!(listed[1].priority(), Priority::P4);
}

/// A translation failure leaves the repository untouched.
#[test]
fn translation_failure_persists_nothing() {
    let rt = test_runtime();
    let (ingestion, tasks) = services(Err(TranslationError::ServiceUnavailable));

    let result = rt.block_on(ingestion.ingest("anything at all"));

    assert!(matches!(
        result,
        Err(IngestionError::Translation(
            TranslationError::ServiceUnavailable
        ))
    ));
    assert!(rt.block_on(tasks.list_all()).expect("list").is_empty());
}

/// Local bounds reject the submission before the translator is consulted.
#[test]
fn local_bounds_are_enforced_before_translation() {
    let rt = test_runtime();
    let (ingestion, tasks) = services(Ok(Vec::new()));

    let empty = rt.block_on(ingestion.ingest("   "));
    assert!(matches!(empty, Err(IngestionError::EmptyText)));

    let (bounded, _) = services(Ok(Vec::new()));
    let long = rt.block_on(bounded.with_max_text_len(5).ingest("far too long"));
    assert!(matches!(long, Err(IngestionError::TextTooLong { .. })));

    assert!(rt.block_on(tasks.list_all()).expect("list").is_empty());
}
