// src/setup.rs

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

const DEFAULT_FILTER: &str = "dompet=info,forms=info,router=info";

/// Install the global tracing subscriber. Logs go to stderr; stdout is
/// reserved for the check report.
pub(super) fn set_up_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    tracing::debug!(format = ?config.log_format, "tracing initialised");
}
