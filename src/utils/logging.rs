//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Polyglot binary.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{PolyglotError, Result};

/// Initialize logging based on configuration
///
/// When a log directory is configured, the returned guard must be kept alive
/// for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "polyglot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| PolyglotError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a loaded language with its key count
pub fn log_language_loaded(locale_code: &str, key_count: usize) {
    debug!(
        locale_code = locale_code,
        key_count = key_count,
        "Language loaded"
    );
}

/// Log a completed catalog load
pub fn log_catalog_loaded(root: &str, language_count: usize) {
    info!(
        root = root,
        language_count = language_count,
        "Catalog loaded"
    );
}
