use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Open the form with empty fields.
    Open,
    /// Close the form, discarding whatever was typed.
    Close,
    /// Move focus to the other field.
    FocusNext,
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
}

impl Intent for FormIntent {}
