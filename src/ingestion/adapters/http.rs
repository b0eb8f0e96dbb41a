//! HTTP client adapter for the external natural-language parser service.

use crate::ingestion::domain::{TaskCandidate, TranslationError};
use crate::ingestion::ports::{TaskTranslator, TranslationResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound on one translation request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    tasks: Vec<TaskCandidate>,
}

/// Translator backed by the remote parser's `POST /parse` endpoint.
///
/// Issues exactly one time-boxed request per translation and never retries;
/// failure modes are mapped onto [`TranslationError`] so a stalled or
/// misbehaving remote dependency cannot leak into the orchestrator as
/// anything other than its taxonomy.
#[derive(Debug, Clone)]
pub struct HttpTaskTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTaskTranslator {
    /// Creates a translator for the parser service at `endpoint`, bounding
    /// every request at `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the underlying client build error when TLS or system
    /// configuration prevents constructing an HTTP client.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Creates a translator with the reference 30-second bound.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_default_timeout(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::new(endpoint, DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl TaskTranslator for HttpTaskTranslator {
    async fn translate(&self, text: &str) -> TranslationResult {
        let url = format!("{}/parse", self.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&ParseRequest { text })
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranslationError::InvalidUpstreamInput(detail));
        }
        if !status.is_success() {
            return Err(TranslationError::UnexpectedUpstreamFailure(format!(
                "upstream returned status {status}"
            )));
        }

        // A response that fails to parse into the expected shape is never
        // partially trusted.
        let parsed = response
            .json::<ParseResponse>()
            .await
            .map_err(|err| TranslationError::UnexpectedUpstreamFailure(err.to_string()))?;
        Ok(parsed.tasks)
    }
}

/// Maps transport-level failures onto the translation taxonomy.
fn classify_request_error(err: reqwest::Error) -> TranslationError {
    if err.is_timeout() || err.is_connect() {
        TranslationError::ServiceUnavailable
    } else {
        TranslationError::UnexpectedUpstreamFailure(err.to_string())
    }
}
