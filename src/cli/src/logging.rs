use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    prelude::*,
    EnvFilter,
};

/// `RUST_LOG` wins over the configured `log_level`. With `log_file` set the
/// output goes to that file instead of stdout.
pub fn setup_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_file.as_deref() {
        Some(log_file) => {
            let path = Path::new(log_file);
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .context("log_file must point to a file")?
                .to_string_lossy()
                .into_owned();

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(directory)
                .with_context(|| format!("Failed to open log file {}", log_file))?;

            let file_layer = fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_timer(SystemTime)
                .with_writer(file_appender);

            tracing::subscriber::set_global_default(registry.with(file_layer))
                .context("Failed to set tracing subscriber")?;
            tracing::info!("Logging system initialized. Writing to {}", log_file);
        }
        None => {
            let stdout_layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_timer(SystemTime);

            tracing::subscriber::set_global_default(registry.with(stdout_layer))
                .context("Failed to set tracing subscriber")?;
            tracing::debug!("Logging system initialized. Writing to stdout");
        }
    }

    Ok(())
}
