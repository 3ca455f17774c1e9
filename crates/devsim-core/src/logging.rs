//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "DEVSIM_LOG";

const LOG_FILE_NAME: &str = "devsim.log";

/// Initialize the logging subsystem
///
/// The overlay runs inside a host app that usually owns stdout, so logs go
/// to `~/.local/share/devsim/logs/` instead. Level is controlled by the
/// `DEVSIM_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DEVSIM_LOG=debug my-host-app
/// DEVSIM_LOG=devsim_app=trace my-host-app
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| crate::error::Error::config(format!("Logging already initialized: {e}")))?;

    tracing::info!("devsim overlay logging started");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Filter used when `DEVSIM_LOG` is unset or invalid
pub fn default_filter() -> &'static str {
    "devsim=info,devsim_core=info,devsim_store=info,devsim_app=info,warn"
}

/// Get the log directory path
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("devsim").join("logs")
}

/// Get the log file path prefix for the rolling appender
pub fn current_log_file() -> PathBuf {
    log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = log_directory();
        assert!(dir.ends_with("devsim/logs"));
        assert!(current_log_file().starts_with(&dir));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter()).is_ok());
    }
}
