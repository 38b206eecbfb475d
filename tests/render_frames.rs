//! Rendering checks against an offscreen `TestBackend`.

mod common;

use common::*;
use shopfront::ui::footer::Footer;
use shopfront::ui::layout::{body_rect, pane_inner, split_panes, LayoutMode};
use shopfront::ui::view::PLACEHOLDER_TEXT;

#[test]
fn narrow_list_shows_only_names_in_order() {
    let app = make_app(NARROW);
    let lines = buffer_lines(&render_buffer(&app));

    let a = find_line(&lines, "Product A").expect("row A");
    let b = find_line(&lines, "Product B").expect("row B");
    let c = find_line(&lines, "Product C").expect("row C");
    assert!(a < b && b < c);
    assert!(find_line(&lines, "$100").is_none());
    assert!(find_line(&lines, "Price:").is_none());
    assert!(find_line(&lines, "stacked layout").is_some());
}

#[test]
fn narrow_detail_lines_in_order_with_back() {
    let mut app = make_app(NARROW);
    app.tap_row(row_index(&app, "Product B"));
    let lines = buffer_lines(&render_buffer(&app));

    let name = find_line(&lines, "Product B").expect("name");
    let price = find_line(&lines, "Price: $150").expect("price");
    let description = find_line(&lines, "This is product B").expect("description");
    let back = find_line(&lines, "Back").expect("back button");
    assert!(name < price && price < description && description < back);
    assert!(find_line(&lines, "Product A").is_none());
}

#[test]
fn wide_placeholder_sits_in_right_pane() {
    let app = make_app(WIDE);
    let lines = buffer_lines(&render_buffer(&app));

    let row = find_line(&lines, "Select a product to view details.").expect("placeholder");
    let col = lines[row]
        .find("Select a product")
        .expect("placeholder column");
    // Detail pane starts at one third of the width.
    assert!(col > usize::from(WIDE.0 / 3));
    assert!(find_line(&lines, "Product A").is_some());
}

#[test]
fn wide_selection_renders_beside_list_without_back() {
    let mut app = make_app(WIDE);
    app.tap_row(row_index(&app, "Product C"));
    let lines = buffer_lines(&render_buffer(&app));

    let price = find_line(&lines, "Price: $200").expect("price");
    let description = find_line(&lines, "Premium product C.").expect("description");
    assert!(price < description);
    assert!(find_line(&lines, "Back").is_none());
    assert!(find_line(&lines, "Select a product").is_none());
    // List pane is still on screen next to the details.
    assert!(find_line(&lines, "Product A").is_some());
}

#[test]
fn placeholder_wraps_whole_in_narrow_split_pane() {
    let app = make_app((45, 20));
    assert_eq!(app.layout_mode(), LayoutMode::Split);

    let buffer = render_buffer(&app);
    let (_, detail_pane) = split_panes(body_rect(app.viewport().area()));
    let inner = pane_inner(detail_pane);
    assert!(inner.width < PLACEHOLDER_TEXT.chars().count() as u16);
    assert_eq!(region_text(&buffer, inner), PLACEHOLDER_TEXT);
}

#[test]
fn footer_shows_hints_for_current_screen() {
    let mut app = make_app(WIDE);
    let lines = buffer_lines(&render_buffer(&app));
    let hints = Footer::for_view(&app.view()).hints().trim();
    assert!(hints.contains("Enter: Select"));
    assert_eq!(find_line(&lines, hints), Some(usize::from(WIDE.1) - 2));

    app.on_resize(NARROW.0, NARROW.1);
    app.tap_row(0);
    let lines = buffer_lines(&render_buffer(&app));
    let hints = Footer::for_view(&app.view()).hints().trim();
    assert!(hints.starts_with("Esc: Back"));
    assert_eq!(find_line(&lines, hints), Some(usize::from(NARROW.1) - 2));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let mut app = make_app((3, 2));
    app.tap_row(0);
    let _ = render_buffer(&app);
}
