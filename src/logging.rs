//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so logs always go to a file. Filter
//! precedence: `--log-level`, then `RUST_LOG`, then `[logging] level`.
//! Logging problems never stop the browser from starting; they are
//! reported once on stderr before the screen is taken over.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};
use crate::error::AppError;

/// Build the filter from a directive string, without consulting `RUST_LOG`.
pub fn filter_from(level: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(level).map_err(|e| AppError::LogFilter {
        filter: level.to_string(),
        message: e.to_string(),
    })
}

/// Pick the filter: an explicit flag wins and must parse; a malformed
/// `RUST_LOG` is reported and skipped; the configured level is the fallback.
pub fn select_filter(
    cli_level: Option<&str>,
    rust_log: Option<&str>,
    configured: &str,
) -> Result<EnvFilter, AppError> {
    if let Some(level) = cli_level {
        return filter_from(level);
    }
    if let Some(directive) = rust_log {
        match filter_from(directive) {
            Ok(filter) => return Ok(filter),
            Err(err) => eprintln!("shopfront: ignoring {}: {err}", EnvFilter::DEFAULT_ENV),
        }
    }
    filter_from(configured)
}

pub fn resolve_log_path(config: &LoggingConfig) -> Option<PathBuf> {
    config.file.clone().or_else(Config::default_log_path)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when there is no usable place to put one.
pub fn init_tracing(
    config: &LoggingConfig,
    cli_level: Option<&str>,
) -> Result<Option<PathBuf>, AppError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(cli_level, rust_log.as_deref(), &config.level)?;

    let Some(path) = resolve_log_path(config) else {
        return Ok(None);
    };
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "shopfront: logging disabled, cannot open '{}': {err}",
                path.display()
            );
            return Ok(None);
        }
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(Some(path))
}
