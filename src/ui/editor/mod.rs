//! Blog editor overlay (MVI).
//!
//! A modal dialog with its own state machine, independent of the
//! catalogue: `Closed → Open(tone: None) → Open(tone: Some)`. The text
//! surface only exists once a tone is chosen, and closing discards the
//! draft unconditionally — nothing is ever written back to the catalogue.

mod dialog;
mod draft;
mod intent;
mod reducer;
mod state;

pub use dialog::render_editor_dialog;
pub use draft::Draft;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorState, Tone};
