use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SUPERNUTRI_LOG";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter {filter:?}: {message}")]
    Filter { filter: String, message: String },
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Resolves the filter directive: `SUPERNUTRI_LOG`, then `RUST_LOG`, then the
/// level given on the command line.
pub fn filter_directive(log_level: &str) -> String {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| log_level.to_string())
}

pub fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::Filter {
        filter: directive.to_string(),
        message: e.to_string(),
    })
}

/// Installs the global subscriber. Logs go to stderr so report output on
/// stdout stays clean.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let filter = build_filter(&filter_directive(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))
}

#[cfg(test)]
#[path = "../tests/src_inline/telemetry.rs"]
mod tests;
