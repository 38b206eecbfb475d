use crate::ui::view::{Screen, ViewTree};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn for_view(tree: &ViewTree) -> Self {
        let hints = match tree {
            ViewTree::Split { .. } => " ↑/↓: Move │ Enter: Select │ l: Layout │ q: Quit",
            ViewTree::Stacked(Screen::List(_)) => " ↑/↓: Move │ Enter: Open │ l: Layout │ q: Quit",
            ViewTree::Stacked(Screen::Detail { .. }) => " Esc: Back │ l: Layout │ q: Quit",
        };
        Self { hints }
    }

    pub fn hints(&self) -> &'static str {
        self.hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
