//! Translator port for the external natural-language capability.

use crate::ingestion::domain::{TaskCandidate, TranslationError};
use async_trait::async_trait;

/// Result type for translation calls.
pub type TranslationResult = Result<Vec<TaskCandidate>, TranslationError>;

/// Narrow contract over the external text-to-tasks capability.
///
/// The capability is consumed, not owned: implementations issue a single
/// bounded request and surface the failure taxonomy in
/// [`TranslationError`] without retrying. Keeping the interface this small
/// lets tests swap in a stub without touching the orchestrator.
#[async_trait]
pub trait TaskTranslator: Send + Sync {
    /// Translates one free-text submission into a sequence of candidates.
    ///
    /// # Errors
    ///
    /// Returns a [`TranslationError`] naming the failure domain; a timeout
    /// or connection failure is never silently swallowed.
    async fn translate(&self, text: &str) -> TranslationResult;
}
