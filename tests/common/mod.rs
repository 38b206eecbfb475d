//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use shopfront::catalog::Catalog;
use shopfront::config::LayoutConfig;
use shopfront::ui::app::App;
use shopfront::ui::render::draw;
use std::path::PathBuf;
use tempfile::TempDir;

/// 120x30 cells: landscape with the default cell aspect.
pub const WIDE: (u16, u16) = (120, 30);
/// 40x40 cells: portrait with the default cell aspect.
pub const NARROW: (u16, u16) = (40, 40);

/// App over the built-in catalog, already sized to `(cols, rows)`.
pub fn make_app((cols, rows): (u16, u16)) -> App {
    let mut app = App::new(Catalog::builtin(), &LayoutConfig::default());
    app.on_resize(cols, rows);
    app
}

pub fn row_index(app: &App, name: &str) -> usize {
    app.catalog()
        .get_all()
        .iter()
        .position(|p| p.name == name)
        .unwrap_or_else(|| panic!("{name} not in catalog"))
}

/// Draw `app` into an offscreen buffer of its own viewport size.
pub fn render_buffer(app: &App) -> Buffer {
    let viewport = app.viewport();
    let mut terminal =
        Terminal::new(TestBackend::new(viewport.cols, viewport.rows)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

/// Buffer rows as plain strings.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

/// Row number of the first line containing `needle`.
pub fn find_line(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(needle))
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Non-empty rows inside `area`, trimmed and joined with single spaces.
pub fn region_text(buffer: &Buffer, area: ratatui::layout::Rect) -> String {
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
