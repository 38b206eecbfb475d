use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// A list row was tapped. The selection has already been written.
    Open,
    /// The Back control was activated.
    Back,
    /// The stacked navigator was rebuilt (layout flipped back to narrow).
    Reset,
}

impl Intent for NavIntent {}
