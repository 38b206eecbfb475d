use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    back_button_rect, centered_rect_by_size, detail_with_back_bar, layout_regions,
    list_row_rects, pane_inner, split_panes,
};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, CARD_BORDER, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT,
    SELECTED_TEXT,
};
use crate::ui::view::{BackButton, DetailView, ListView, Screen, ViewTree};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let tree = app.view();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let selected = app.selected().map(|p| p.name.as_str());
    let header_widget = Header::new(tree.mode(), app.catalog().len(), selected);
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, &tree, body);
    frame.render_widget(Footer::for_view(&tree).widget(footer), footer);
}

/// Paint the body region of `tree`. Geometry must match `ViewTree::hit_test`.
pub fn draw_body(frame: &mut Frame<'_>, tree: &ViewTree, body: Rect) {
    match tree {
        ViewTree::Split { list, detail } => {
            let (list_pane, detail_pane) = split_panes(body);
            draw_list(frame, list, list_pane);
            draw_detail(frame, detail, detail_pane);
        }
        ViewTree::Stacked(Screen::List(list)) => draw_list(frame, list, body),
        ViewTree::Stacked(Screen::Detail { detail, back }) => {
            let (content, bar) = detail_with_back_bar(body);
            draw_detail(frame, detail, content);
            draw_back_button(frame, back, bar);
        }
    }
}

fn pane_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_list(frame: &mut Frame<'_>, list: &ListView, pane: Rect) {
    frame.render_widget(pane_block(" Products "), pane);

    for (row, rect) in list.rows.iter().zip(list_row_rects(pane, list.rows.len())) {
        let border = if row.focused { FOCUS_BORDER } else { CARD_BORDER };
        let mut text_style = Style::default().fg(HEADER_TEXT);
        if row.selected {
            text_style = text_style.fg(SELECTED_TEXT).add_modifier(Modifier::BOLD);
        }
        let mut card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        if row.focused {
            card = card.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        let widget = Paragraph::new(Line::from(Span::styled(row.label.clone(), text_style)))
            .block(card);
        frame.render_widget(widget, rect);
    }
}

fn draw_detail(frame: &mut Frame<'_>, detail: &DetailView, pane: Rect) {
    frame.render_widget(pane_block(" Details "), pane);
    let inner = pane_inner(pane);

    match detail {
        DetailView::Placeholder => {
            let text = crate::ui::view::PLACEHOLDER_TEXT;
            // Word wrap can need one more line than the character count suggests.
            let chars = text.chars().count() as u16;
            let height = chars.div_ceil(inner.width.max(1)).saturating_add(1);
            let area = centered_rect_by_size(inner, inner.width, height);
            let widget = Paragraph::new(text)
                .style(Style::default().fg(HEADER_TEXT))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(widget, area);
        }
        DetailView::Product {
            name,
            price,
            description,
        } => {
            let lines = vec![
                Line::from(Span::styled(
                    name.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    price.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(HEADER_TEXT),
                )),
            ];
            let area = Rect {
                x: inner.x.saturating_add(1),
                width: inner.width.saturating_sub(2),
                ..inner
            };
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
        }
    }
}

fn draw_back_button(frame: &mut Frame<'_>, back: &BackButton, bar: Rect) {
    let widget = Paragraph::new(back.label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FOCUS_BORDER)),
        );
    frame.render_widget(widget, back_button_rect(bar));
}
