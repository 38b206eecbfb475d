/// Marker trait for intents.
///
/// An intent is either a user action (row tapped, back pressed) or a host
/// event (terminal resized) that a reducer folds into a new state.
pub trait Intent: Send + 'static {}
