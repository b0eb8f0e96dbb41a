//! Domain model for the ingestion pipeline.

mod candidate;
mod error;
mod report;

pub use candidate::TaskCandidate;
pub use error::{IngestionError, TranslationError};
pub use report::{CandidateFailure, IngestionOutcome, IngestionReport};
