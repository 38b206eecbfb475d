mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, LayoutConfig, LayoutOverride, LoggingConfig, UiConfig, DEFAULT_CELL_ASPECT,
    DEFAULT_TICK_RATE_MS,
};
