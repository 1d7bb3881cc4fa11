//! Configuration loading from environment.

use std::env;

use ledger_types::IdStrategy;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub id_strategy: IdStrategy,
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse()?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| ledger_repo::MEMORY_URL.to_string());

        let id_strategy = match env::var("ID_STRATEGY") {
            Ok(value) => value.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            Err(_) => IdStrategy::default(),
        };

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("text") | Err(_) => LogFormat::Text,
            Ok(other) => anyhow::bail!("LOG_FORMAT must be `text` or `json`, got `{}`", other),
        };

        let otlp_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|v| !v.is_empty());

        Ok(Self {
            port,
            database_url,
            id_strategy,
            log_format,
            otlp_endpoint,
        })
    }
}
