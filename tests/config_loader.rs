mod common;

use common::temp_config;
use shopfront::config::{Config, ConfigError, LayoutOverride};

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.layout.mode, LayoutOverride::Auto);
    assert_eq!(config.layout.cell_aspect, 2.0);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.mouse);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("shopfront/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let (dir, _) = temp_config("");
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[layout]
mode = "narrow"

[logging]
file = "/tmp/shop.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.layout.mode, LayoutOverride::Narrow);
    assert_eq!(config.layout.cell_aspect, 2.0);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/shop.log"))
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[layout\nmode = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_unknown_layout_mode_is_parse_error() {
    let (_dir, path) = temp_config("[layout]\nmode = \"sideways\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_non_positive_aspect() {
    let (_dir, path) = temp_config("[layout]\ncell_aspect = 0.0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("cell_aspect"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_tick_rate_out_of_range() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
    config.ui.tick_rate_ms = 10;
    assert!(config.validate().is_ok());
}
