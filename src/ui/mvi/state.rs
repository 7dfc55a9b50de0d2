/// Marker trait for per-feature UI state.
///
/// A state value is a complete snapshot: everything the view needs to draw
/// the feature. Transitions replace the whole value (`Clone` in, new value
/// out), and `PartialEq` lets callers detect that nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
