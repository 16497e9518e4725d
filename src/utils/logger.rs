use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::fs::{self, File};
use chrono::Local;
use tracing::info;
use tracing_subscriber::{FmtSubscriber, EnvFilter};

const LOG_FILE_PREFIX: &str = "webpage_report";

/// Installs the global tracing subscriber, writing to a timestamped file in
/// `log_dir`. Filtering follows `RUST_LOG`.
pub fn init_logger(log_dir: &str) -> Result<PathBuf> {
    let (path, file) = create_log_file(log_dir)?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(file)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    info!("Logger initialized, writing to {}", path.display());

    Ok(path)
}

fn create_log_file(log_dir: &str) -> Result<(PathBuf, File)> {
    // Create log directory if it doesn't exist
    if !Path::new(log_dir).exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = Path::new(log_dir).join(format!("{}_{}.log", LOG_FILE_PREFIX, timestamp));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    Ok((path, file))
}
