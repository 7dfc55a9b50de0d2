//! Unidirectional data flow primitives for the UI features.
//!
//! Each dialog or panel that carries its own state (the topic form, the
//! blog editor) is built from three pieces: a [`UiState`] snapshot, an
//! [`Intent`] describing what the user asked for, and a [`Reducer`] that
//! folds intents into fresh states. Rendering only reads the state; input
//! only produces intents; nothing else touches the state in between.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
