//! Orchestration services for the ingestion pipeline.

mod pipeline;

pub use pipeline::{IngestionService, DEFAULT_MAX_TEXT_LEN};
