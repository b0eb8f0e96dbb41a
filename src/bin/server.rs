//! Taskdeck HTTP server.
//!
//! Wires the repository (PostgreSQL when `DATABASE_URL` is set, in-memory
//! otherwise), the natural-language translator, and the HTTP router, then
//! serves until interrupted.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use taskdeck::api::{self, AppState};
use taskdeck::config::Config;
use taskdeck::ingestion::adapters::HttpTaskTranslator;
use taskdeck::ingestion::services::IngestionService;
use taskdeck::task::adapters::memory::InMemoryTaskRepository;
use taskdeck::task::adapters::postgres::PostgresTaskRepository;
use taskdeck::task::ports::TaskRepository;
use taskdeck::task::services::TaskService;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = <Config as clap::Parser>::parse();
    match config.database_url.clone() {
        Some(url) => {
            let pool = Pool::builder().build(ConnectionManager::<PgConnection>::new(url))?;
            info!("using PostgreSQL repository");
            run(Arc::new(PostgresTaskRepository::new(pool)), config).await
        }
        None => {
            info!("DATABASE_URL not set, using in-memory repository");
            run(Arc::new(InMemoryTaskRepository::new()), config).await
        }
    }
}

/// Assembles the services over the chosen repository and serves HTTP.
async fn run<R>(repository: Arc<R>, config: Config) -> Result<(), BoxError>
where
    R: TaskRepository + 'static,
{
    let clock = Arc::new(DefaultClock);
    let translator = Arc::new(HttpTaskTranslator::new(
        config.nlp_service_url.clone(),
        Duration::from_secs(config.nlp_timeout_secs),
    )?);

    let tasks = TaskService::new(Arc::clone(&repository), Arc::clone(&clock));
    let ingestion = IngestionService::new(translator, tasks.clone())
        .with_max_text_len(config.nlp_max_text_len);
    let state = Arc::new(AppState::new(tasks, ingestion));

    let router = api::build_router(state).layer(api::cors_layer(&config.cors_origin)?);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, parser = %config.nlp_service_url, "taskdeck server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}

/// Resolves when the process receives an interrupt.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server simply runs until killed.
        std::future::pending::<()>().await;
    }
}
