use crate::error::ConfigError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `level` (one of the
/// `LOG_LEVELS`) is used. Output goes to stderr through a non-blocking writer.
/// The returned guard flushes pending lines on drop and must outlive the server.
pub fn init_tracing(level: &str) -> Result<WorkerGuard, ConfigError> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    Ok(guard)
}

/// Maps a configured level name to a `tracing` filter directive.
fn filter_directive(level: &str) -> &'static str {
    match level {
        "DEBUG" => "debug",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    }
}
