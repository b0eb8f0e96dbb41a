//! HTTP surface for the task repository and the ingestion pipeline.
//!
//! The transport is deliberately thin: handlers deserialize payloads, call
//! the injected services, and wrap every reply in the uniform
//! `{success, data, message}` envelope. Status codes follow the error
//! taxonomy: validation 400, missing record 404, parser unreachable 503,
//! upstream rejection 400, anything else 500.

pub mod envelope;
pub mod error;
pub mod routes;
mod state;

pub use state::AppState;

use crate::ingestion::ports::TaskTranslator;
use crate::task::ports::TaskRepository;
use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use axum::Router;
use mockable::Clock;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[cfg(test)]
mod tests;

/// Builds the application router over the injected services.
pub fn build_router<T, R, C>(state: Arc<AppState<T, R, C>>) -> Router
where
    T: TaskTranslator + 'static,
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route("/api/nlp/parse", post(routes::nlp::parse_tasks))
        .with_state(state)
}

/// CORS layer restricted to the configured frontend origin.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] when the origin is not a valid header
/// value.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin_value: HeaderValue = origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin_value))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}
