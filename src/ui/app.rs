use crate::catalog::{Catalog, Product};
use crate::config::{LayoutConfig, LayoutOverride};
use crate::selection::SelectionStore;
use crate::ui::layout::{effective_orientation, layout_mode, LayoutMode, Orientation, Viewport};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavPosition, NavReducer};
use crate::ui::view::{render_with, Hit, ViewInputs, ViewTree};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller state for the catalog browser.
///
/// Owns every piece of mutable state and exposes the user actions. All
/// mutation happens on the UI thread; rendering reads through [`App::view`].
pub struct App {
    should_quit: bool,
    catalog: Catalog,
    selection: SelectionStore,
    /// Stacked-layout screen (MVI pattern).
    nav: NavPosition,
    viewport: Viewport,
    layout: LayoutOverride,
    cell_aspect: f32,
    cursor: usize,
}

impl App {
    pub fn new(catalog: Catalog, layout: &LayoutConfig) -> Self {
        Self {
            should_quit: false,
            selection: SelectionStore::new(catalog.clone()),
            catalog,
            nav: NavPosition::default(),
            viewport: Viewport::default(),
            layout: layout.mode,
            cell_aspect: layout.cell_aspect,
            cursor: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Mutable access for registering selection subscribers.
    pub fn selection_mut(&mut self) -> &mut SelectionStore {
        &mut self.selection
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selection.selected()
    }

    pub fn nav_position(&self) -> NavPosition {
        self.nav
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn layout_override(&self) -> LayoutOverride {
        self.layout
    }

    pub fn orientation(&self) -> Orientation {
        effective_orientation(self.viewport, self.layout, self.cell_aspect)
    }

    /// Recomputed from the viewport on every call; never cached.
    pub fn layout_mode(&self) -> LayoutMode {
        layout_mode(self.orientation())
    }

    pub fn view(&self) -> ViewTree {
        render_with(&ViewInputs {
            viewport: self.viewport,
            layout: self.layout,
            cell_aspect: self.cell_aspect,
            catalog: &self.catalog,
            selection: self.selection.selected(),
            nav: self.nav,
            cursor: self.cursor,
        })
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let before = self.layout_mode();
        self.viewport = Viewport::new(cols, rows);
        self.on_layout_change(before);
    }

    /// Cycle Auto → Wide → Narrow → Auto.
    pub fn cycle_layout(&mut self) {
        let before = self.layout_mode();
        self.layout = match self.layout {
            LayoutOverride::Auto => LayoutOverride::Wide,
            LayoutOverride::Wide => LayoutOverride::Narrow,
            LayoutOverride::Narrow => LayoutOverride::Auto,
        };
        tracing::debug!(layout = ?self.layout, "layout override changed");
        self.on_layout_change(before);
    }

    fn on_layout_change(&mut self, before: LayoutMode) {
        let after = self.layout_mode();
        if before == after {
            return;
        }
        tracing::debug!(from = before.label(), to = after.label(), "layout mode flipped");
        // A fresh stacked navigator always starts on the list.
        if after == LayoutMode::Stacked {
            self.dispatch_nav(NavIntent::Reset);
        }
    }

    /// Move the keyboard cursor by `delta` rows, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        let next = (self.cursor as isize + delta).rem_euclid(len);
        self.cursor = next as usize;
    }

    /// The user tapped list row `index`.
    ///
    /// Writes the selection first so the detail screen never paints empty,
    /// then opens the detail screen when the layout is stacked.
    pub fn tap_row(&mut self, index: usize) {
        if self.nav.is_detail() && self.layout_mode() == LayoutMode::Stacked {
            // The list is not on screen.
            return;
        }
        debug_assert!(
            index < self.catalog.len(),
            "tapped row {index} outside the catalog"
        );
        let Some(product) = self.catalog.get(index).cloned() else {
            return;
        };
        self.cursor = index;
        self.selection.select(product);
        if self.layout_mode() == LayoutMode::Stacked {
            self.dispatch_nav(NavIntent::Open);
        }
    }

    pub fn tap_cursor_row(&mut self) {
        self.tap_row(self.cursor);
    }

    /// Back control. Only meaningful on the stacked detail screen; the
    /// selection is left untouched.
    pub fn back(&mut self) {
        if self.layout_mode() == LayoutMode::Stacked {
            self.dispatch_nav(NavIntent::Back);
        }
    }

    /// Left click at terminal cell (`col`, `row`).
    pub fn on_click(&mut self, col: u16, row: u16) {
        match self.view().hit_test(self.viewport.area(), col, row) {
            Some(Hit::Row(index)) => self.tap_row(index),
            Some(Hit::Back) => self.back(),
            None => {}
        }
    }

    fn dispatch_nav(&mut self, intent: NavIntent) {
        let before = self.nav;
        dispatch_mvi!(self, nav, NavReducer, intent);
        if before != self.nav {
            tracing::debug!(?intent, from = ?before, to = ?self.nav, "navigation");
        }
    }
}
