use super::intent::Intent;
use super::state::UiState;

/// The only place where a [`UiState`] changes.
///
/// `reduce` must be pure: no I/O, no logging, no access to anything
/// outside its arguments.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
