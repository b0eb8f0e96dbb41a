//! Server configuration from flags and environment variables.

use clap::Parser;

/// Runtime configuration for the taskdeck server.
///
/// Every option can be supplied as a flag or through the environment;
/// defaults mirror the reference deployment.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskdeck-server", version, about)]
pub struct Config {
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// `PostgreSQL` connection URL; when absent the server runs against the
    /// in-memory repository.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Base URL of the natural-language parser service.
    #[arg(long, env = "NLP_SERVICE_URL", default_value = "http://localhost:8000")]
    pub nlp_service_url: String,

    /// Allowed CORS origin for the frontend.
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,

    /// Upper bound on one translation request, in seconds.
    #[arg(long, env = "NLP_TIMEOUT_SECS", default_value_t = 30)]
    pub nlp_timeout_secs: u64,

    /// Upper bound on submitted free text, in code points.
    #[arg(long, env = "NLP_MAX_TEXT_LEN", default_value_t = 2000)]
    pub nlp_max_text_len: usize,
}
