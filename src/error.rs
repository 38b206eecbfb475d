use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures. None of these come from catalog browsing itself,
/// which cannot fail; they are all about the host environment.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Failed to install signal handlers: {0}")]
    Signals(#[source] std::io::Error),

    #[error("Invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },
}
