//! Viewport classification and screen geometry.
//!
//! Rendering and mouse hit-testing both go through the functions here so
//! a click always lands on the rectangle that was drawn.

use crate::config::LayoutOverride;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one list row card, borders included.
pub const ROW_HEIGHT: u16 = 3;
pub const BACK_BUTTON_WIDTH: u16 = 10;
const BACK_BAR_HEIGHT: u16 = 3;

/// Terminal size in cells, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn area(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.cols,
            height: self.rows,
        }
    }

    /// Physical orientation, correcting for cells being taller than wide.
    pub fn orientation(&self, cell_aspect: f32) -> Orientation {
        if self.cols == 0 || self.rows == 0 {
            return Orientation::Portrait;
        }
        let width = f32::from(self.cols);
        let height = f32::from(self.rows) * cell_aspect;
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// List and detail side by side.
    Split,
    /// One screen at a time with List/Detail navigation.
    Stacked,
}

impl LayoutMode {
    pub fn label(&self) -> &'static str {
        match self {
            LayoutMode::Split => "split",
            LayoutMode::Stacked => "stacked",
        }
    }
}

pub fn is_wide(orientation: Orientation) -> bool {
    orientation == Orientation::Landscape
}

/// Effective orientation after applying a user override.
pub fn effective_orientation(
    viewport: Viewport,
    layout: LayoutOverride,
    cell_aspect: f32,
) -> Orientation {
    match layout {
        LayoutOverride::Auto => viewport.orientation(cell_aspect),
        LayoutOverride::Wide => Orientation::Landscape,
        LayoutOverride::Narrow => Orientation::Portrait,
    }
}

pub fn layout_mode(orientation: Orientation) -> LayoutMode {
    if is_wide(orientation) {
        LayoutMode::Split
    } else {
        LayoutMode::Stacked
    }
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Split body into list pane and detail pane, 1:2.
pub fn split_panes(body: Rect) -> (Rect, Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Fill(2)])
        .split(body);
    (panes[0], panes[1])
}

/// Stacked detail screen: detail content above, Back bar below.
pub fn detail_with_back_bar(body: Rect) -> (Rect, Rect) {
    let bar_height = BACK_BAR_HEIGHT.min(body.height);
    let content = Rect {
        height: body.height.saturating_sub(bar_height),
        ..body
    };
    let bar = Rect {
        y: body.y + content.height,
        height: bar_height,
        ..body
    };
    (content, bar)
}

/// Area of the Back button inside the Back bar.
pub fn back_button_rect(bar: Rect) -> Rect {
    centered_rect_by_size(bar, BACK_BUTTON_WIDTH, bar.height)
}

/// Inside of a bordered pane.
pub fn pane_inner(pane: Rect) -> Rect {
    Rect {
        x: pane.x.saturating_add(1),
        y: pane.y.saturating_add(1),
        width: pane.width.saturating_sub(2),
        height: pane.height.saturating_sub(2),
    }
}

/// Card rectangles for `count` list rows inside `list_pane`.
///
/// Rows that don't fit are omitted; a partially visible last row is clipped.
pub fn list_row_rects(list_pane: Rect, count: usize) -> Vec<Rect> {
    let inner = pane_inner(list_pane);
    let bottom = inner.y.saturating_add(inner.height);
    let mut rows = Vec::with_capacity(count);
    let mut y = inner.y;
    for _ in 0..count {
        if y >= bottom {
            break;
        }
        rows.push(Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: ROW_HEIGHT.min(bottom - y),
        });
        y = y.saturating_add(ROW_HEIGHT);
    }
    rows
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && row >= rect.y
        && u32::from(col) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(row) < u32::from(rect.y) + u32::from(rect.height)
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
