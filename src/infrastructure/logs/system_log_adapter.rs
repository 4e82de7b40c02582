/*
System Log Adapter

Installs the global tracing subscriber. The filter comes from `RUST_LOG` when it is set
and from `logging.level` otherwise; the output format is either human-readable text
or one JSON object per line.
*/

use crate::config::application_settings::{LogFormat, LoggingConfig};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter for a configured level, ignoring the environment
pub fn filter_for(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(level).map_err(|e| LogError::InvalidLevel(format!("{}: {}", level, e)))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LogError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => filter_for(&directives),
        _ => filter_for(&config.level),
    }
}

/// Install the global subscriber; fails if one is already set
pub fn init(config: &LoggingConfig) -> Result<(), LogError> {
    let registry = Registry::default().with(build_filter(config)?);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_span_list(true))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
    };

    installed.map_err(|e| LogError::Init(e.to_string()))
}
