use crate::utils::error::{AppError, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "weather-to-postgres";
const MAX_LOG_FILES: usize = 5;

/// Creates `log_dir` if needed and returns a daily-rotated appender that
/// keeps the five most recent files.
pub fn file_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(log_dir)?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| AppError::IoError(std::io::Error::other(e)))
}

/// Installs console and file logging. Keep the returned guard alive until
/// the process exits, or buffered file lines are lost.
pub fn init_cli_logger(verbose: bool, log_dir: &Path) -> Result<WorkerGuard> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("weather_to_postgres=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("weather_to_postgres=info,sqlx=warn"))
    };

    let appender = file_appender(log_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| AppError::IoError(std::io::Error::other(e)))?;

    Ok(guard)
}
