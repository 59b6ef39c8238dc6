//! Subscriber setup for the `oxirow` binary.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to whoever embeds it.

use crate::core::common::OxirowError;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub format: LogFormat,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: LevelFilter::INFO, format: LogFormat::Pretty, with_ansi: true }
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
///
/// # Errors
///
/// Returns `OxirowError::Logging` if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), OxirowError> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json().with_writer(io::stderr)).try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(config.with_ansi).with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_ansi(config.with_ansi).with_writer(io::stderr))
            .try_init(),
    };

    result.map_err(|e| OxirowError::Logging(e.to_string()))
}
