//! Port contracts for the ingestion pipeline.

pub mod translator;

pub use translator::{TaskTranslator, TranslationResult};
