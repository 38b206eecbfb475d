use crate::ui::mvi::UiState;

/// Which screen the stacked layout is showing.
///
/// Ignored in split layout, where both panes are always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPosition {
    #[default]
    List,
    Detail,
}

impl UiState for NavPosition {}

impl NavPosition {
    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail)
    }
}
