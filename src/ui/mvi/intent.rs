//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses) and navigation events,
/// and are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
