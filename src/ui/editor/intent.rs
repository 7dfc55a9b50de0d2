use crate::ui::mvi::Intent;

use super::state::Tone;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Open a fresh overlay: tone unset, empty draft.
    Open,
    /// Close unconditionally, discarding the draft.
    Close,
    /// Pick a tone (or clear it with `None`, hiding the surface again).
    SelectTone(Option<Tone>),
    /// Step the tone: None → Formal → Casual → Friendly → None.
    CycleTone,
    /// Draft edits; all no-ops while no tone is selected.
    Input(char),
    Backspace,
    Newline,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
}

impl Intent for EditorIntent {}
