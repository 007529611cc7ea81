//! File-backed `tracing` set-up.
//!
//! The terminal belongs to the TUI, so all diagnostics go to
//! [`Config::log_path`](crate::config::Config::log_path).

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Errors that can occur while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Builds the level filter from an optional `RUST_LOG`-style directive.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Builds a plain-text subscriber writing to `writer`.
pub fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .with_env_filter(filter)
        .finish()
}

/// Installs the global subscriber, appending to the configured log file.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// for the lifetime of the program.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<WorkerGuard, LoggingError> {
    let appender = tracing_appender::rolling::never(&config.log_dir, config.log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let directive = std::env::var("RUST_LOG").ok();
    let filter = env_filter(directive.as_deref());
    tracing::subscriber::set_global_default(subscriber(writer, filter))
        .map_err(|e| LoggingError::Init(e.to_string()))?;
    Ok(guard)
}
