//! Liveness endpoint.

use crate::api::envelope::Envelope;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Payload of the liveness reply.
#[derive(Debug, Clone, Serialize)]
pub struct HealthData {
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Reply timestamp.
    pub timestamp: String,
}

/// `GET /health`: liveness check.
#[expect(
    clippy::unused_async,
    reason = "axum handlers must have an async signature"
)]
pub async fn health() -> Json<Envelope<HealthData>> {
    Json(Envelope::with_message(
        HealthData {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now().to_rfc3339(),
        },
        "Task Manager API is running",
    ))
}
