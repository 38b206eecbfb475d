//! Pure view model: what the screen shows for a given state.
//!
//! [`render`] turns the current viewport, catalog, selection and
//! navigation position into a [`ViewTree`]. Nothing here touches the
//! terminal; `ui::render` paints the tree and [`ViewTree::hit_test`]
//! maps clicks back onto it.

use crate::catalog::{Catalog, Product};
use crate::config::{LayoutOverride, DEFAULT_CELL_ASPECT};
use crate::ui::layout::{
    back_button_rect, body_rect, contains, detail_with_back_bar, effective_orientation,
    layout_mode, list_row_rects, split_panes, LayoutMode, Viewport,
};
use crate::ui::nav::NavPosition;
use ratatui::layout::Rect;

pub const PLACEHOLDER_TEXT: &str = "Select a product to view details.";
pub const BACK_LABEL: &str = "Back";

/// Everything the view depends on.
#[derive(Debug, Clone, Copy)]
pub struct ViewInputs<'a> {
    pub viewport: Viewport,
    pub layout: LayoutOverride,
    pub cell_aspect: f32,
    pub catalog: &'a Catalog,
    pub selection: Option<&'a Product>,
    pub nav: NavPosition,
    /// Row holding keyboard focus.
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTree {
    Split { list: ListView, detail: DetailView },
    Stacked(Screen),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(ListView),
    Detail { detail: DetailView, back: BackButton },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Product name. Price and description never appear in the list.
    pub label: String,
    pub focused: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Placeholder,
    Product {
        name: String,
        price: String,
        description: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackButton {
    pub label: &'static str,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Row(usize),
    Back,
}

/// Build the view for `viewport` with automatic layout selection.
pub fn render(
    viewport: Viewport,
    catalog: &Catalog,
    selection: Option<&Product>,
    nav: NavPosition,
) -> ViewTree {
    render_with(&ViewInputs {
        viewport,
        layout: LayoutOverride::Auto,
        cell_aspect: DEFAULT_CELL_ASPECT,
        catalog,
        selection,
        nav,
        cursor: 0,
    })
}

pub fn render_with(inputs: &ViewInputs<'_>) -> ViewTree {
    let orientation = effective_orientation(inputs.viewport, inputs.layout, inputs.cell_aspect);
    let list = ListView::build(inputs.catalog, inputs.selection, inputs.cursor);
    let detail = DetailView::build(inputs.selection);

    match layout_mode(orientation) {
        LayoutMode::Split => ViewTree::Split { list, detail },
        LayoutMode::Stacked => match inputs.nav {
            NavPosition::List => ViewTree::Stacked(Screen::List(list)),
            NavPosition::Detail => ViewTree::Stacked(Screen::Detail {
                detail,
                back: BackButton { label: BACK_LABEL },
            }),
        },
    }
}

impl ListView {
    fn build(catalog: &Catalog, selection: Option<&Product>, cursor: usize) -> Self {
        let rows = catalog
            .get_all()
            .iter()
            .enumerate()
            .map(|(idx, product)| ListRow {
                label: product.name.clone(),
                focused: idx == cursor,
                selected: selection == Some(product),
            })
            .collect();
        Self { rows }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }
}

impl DetailView {
    fn build(selection: Option<&Product>) -> Self {
        match selection {
            None => DetailView::Placeholder,
            Some(product) => DetailView::Product {
                name: product.name.clone(),
                price: product.price_label(),
                description: product.description.clone(),
            },
        }
    }

    /// Text lines in display order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            DetailView::Placeholder => vec![PLACEHOLDER_TEXT],
            DetailView::Product {
                name,
                price,
                description,
            } => vec![name.as_str(), price.as_str(), description.as_str()],
        }
    }
}

impl ViewTree {
    pub fn mode(&self) -> LayoutMode {
        match self {
            ViewTree::Split { .. } => LayoutMode::Split,
            ViewTree::Stacked(_) => LayoutMode::Stacked,
        }
    }

    /// The list, if it is on screen.
    pub fn list(&self) -> Option<&ListView> {
        match self {
            ViewTree::Split { list, .. } | ViewTree::Stacked(Screen::List(list)) => Some(list),
            ViewTree::Stacked(Screen::Detail { .. }) => None,
        }
    }

    /// The detail view, if it is on screen.
    pub fn detail(&self) -> Option<&DetailView> {
        match self {
            ViewTree::Split { detail, .. } | ViewTree::Stacked(Screen::Detail { detail, .. }) => {
                Some(detail)
            }
            ViewTree::Stacked(Screen::List(_)) => None,
        }
    }

    pub fn back_button(&self) -> Option<&BackButton> {
        match self {
            ViewTree::Stacked(Screen::Detail { back, .. }) => Some(back),
            _ => None,
        }
    }

    /// Resolve a click at (`col`, `row`) for a tree drawn into `area`.
    pub fn hit_test(&self, area: Rect, col: u16, row: u16) -> Option<Hit> {
        let body = body_rect(area);
        match self {
            ViewTree::Split { list, .. } => {
                let (list_pane, _) = split_panes(body);
                hit_row(list_pane, list.rows.len(), col, row)
            }
            ViewTree::Stacked(Screen::List(list)) => hit_row(body, list.rows.len(), col, row),
            ViewTree::Stacked(Screen::Detail { .. }) => {
                let (_, bar) = detail_with_back_bar(body);
                contains(back_button_rect(bar), col, row).then_some(Hit::Back)
            }
        }
    }
}

fn hit_row(list_pane: Rect, count: usize, col: u16, row: u16) -> Option<Hit> {
    list_row_rects(list_pane, count)
        .into_iter()
        .position(|rect| contains(rect, col, row))
        .map(Hit::Row)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Viewport = Viewport { cols: 120, rows: 30 };
    const NARROW: Viewport = Viewport { cols: 40, rows: 40 };

    #[test]
    fn wide_without_selection_shows_placeholder() {
        let catalog = Catalog::builtin();
        let tree = render(WIDE, &catalog, None, NavPosition::List);
        assert_eq!(tree.mode(), LayoutMode::Split);
        assert_eq!(tree.detail(), Some(&DetailView::Placeholder));
        assert_eq!(
            tree.detail().map(DetailView::lines),
            Some(vec!["Select a product to view details."])
        );
    }

    #[test]
    fn split_ignores_nav_position() {
        let catalog = Catalog::builtin();
        let a = render(WIDE, &catalog, None, NavPosition::List);
        let b = render(WIDE, &catalog, None, NavPosition::Detail);
        assert_eq!(a, b);
        assert!(a.back_button().is_none());
    }

    #[test]
    fn stacked_detail_has_back_button() {
        let catalog = Catalog::builtin();
        let selected = catalog.get(0);
        let tree = render(NARROW, &catalog, selected, NavPosition::Detail);
        assert!(tree.list().is_none());
        assert_eq!(tree.back_button().map(|b| b.label), Some("Back"));
    }

    #[test]
    fn list_rows_mark_selection_and_cursor() {
        let catalog = Catalog::builtin();
        let tree = render_with(&ViewInputs {
            viewport: NARROW,
            layout: LayoutOverride::Auto,
            cell_aspect: 2.0,
            catalog: &catalog,
            selection: catalog.get(2),
            nav: NavPosition::List,
            cursor: 1,
        });
        let rows = &tree.list().map(|l| l.rows.clone()).unwrap_or_default();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].focused && !rows[1].selected);
        assert!(rows[2].selected && !rows[2].focused);
    }

    #[test]
    fn hit_test_maps_rows_and_back() {
        let catalog = Catalog::builtin();
        let area = NARROW.area();
        let list = render(NARROW, &catalog, None, NavPosition::List);
        // Body starts at y=3, pane border at y=3, first card at y=4..7.
        assert_eq!(list.hit_test(area, 5, 5), Some(Hit::Row(0)));
        assert_eq!(list.hit_test(area, 5, 8), Some(Hit::Row(1)));
        assert_eq!(list.hit_test(area, 0, 0), None);

        let detail = render(NARROW, &catalog, catalog.get(0), NavPosition::Detail);
        // Footer occupies the last 3 rows; Back bar sits right above it.
        let bar_row = NARROW.rows - 3 - 2;
        assert_eq!(detail.hit_test(area, NARROW.cols / 2, bar_row), Some(Hit::Back));
        assert_eq!(detail.hit_test(area, 0, bar_row), None);
    }
}
