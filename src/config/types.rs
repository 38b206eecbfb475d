use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration container.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// How the layout mode is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutOverride {
    /// Follow the terminal's orientation.
    #[default]
    Auto,
    /// Always use the split list/detail layout.
    Wide,
    /// Always use the stacked list → detail layout.
    Narrow,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub mode: LayoutOverride,
    /// Height of a terminal cell divided by its width.
    ///
    /// Used to turn a size in cells into a physical orientation.
    pub cell_aspect: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or `"shopfront=debug"`.
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    pub file: Option<PathBuf>,
}

pub const DEFAULT_CELL_ASPECT: f32 = 2.0;
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutOverride::Auto,
            cell_aspect: DEFAULT_CELL_ASPECT,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
