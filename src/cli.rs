use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, LayoutOverride};
use crate::error::AppError;

/// Browse the product catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "shopfront", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/shopfront/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Force a layout instead of following the terminal's orientation.
    #[arg(long, value_enum, value_name = "MODE")]
    pub layout: Option<LayoutOverride>,

    /// Log filter, e.g. "debug" or "shopfront=trace". Wins over RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Don't capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file and layer the command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, AppError> {
        let mut config = Config::load_from(&self.config_path())?;
        self.apply(&mut config);
        Ok(config)
    }

    /// Layer command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(layout) = self.layout {
            config.layout.mode = layout;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }
}
