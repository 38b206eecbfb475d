use crate::ui::layout::LayoutMode;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    mode: LayoutMode,
    product_count: usize,
    selected: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(mode: LayoutMode, product_count: usize, selected: Option<&'a str>) -> Self {
        Self {
            mode,
            product_count,
            selected,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Shopfront",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} layout", self.mode.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} products", self.product_count), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.selected.unwrap_or("nothing selected").to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
