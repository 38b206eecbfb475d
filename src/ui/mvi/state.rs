/// Marker trait for reducer-owned UI state.
///
/// States are small values: cloned to transition, compared to detect
/// changes, defaulted to get the initial screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
