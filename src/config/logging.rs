use std::env;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),
}

/// Initialize the tracing subscriber.
/// `LOG_LEVEL` accepts anything an `EnvFilter` does, e.g. `debug` or `estate_scout=trace`.
pub fn init_logging() -> Result<(), LoggingError> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    let env_filter = EnvFilter::try_new(&log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", log_level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}
