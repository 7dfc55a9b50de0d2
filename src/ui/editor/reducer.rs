use crate::ui::mvi::Reducer;

use super::draft::Draft;
use super::intent::EditorIntent;
use super::state::{EditorState, Tone};

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open => EditorState::Open {
                tone: None,
                draft: Draft::default(),
            },
            EditorIntent::Close => EditorState::Closed,
            EditorIntent::SelectTone(tone) => match state {
                EditorState::Open { draft, .. } => EditorState::Open { tone, draft },
                EditorState::Closed => EditorState::Closed,
            },
            EditorIntent::CycleTone => match state {
                EditorState::Open { tone, draft } => EditorState::Open {
                    tone: next_tone(tone),
                    draft,
                },
                EditorState::Closed => EditorState::Closed,
            },
            EditorIntent::Input(ch) => edit(state, |draft| draft.insert_char(ch)),
            EditorIntent::Backspace => edit(state, Draft::backspace),
            EditorIntent::Newline => edit(state, Draft::newline),
            EditorIntent::CursorLeft => edit(state, Draft::move_left),
            EditorIntent::CursorRight => edit(state, Draft::move_right),
            EditorIntent::CursorUp => edit(state, Draft::move_up),
            EditorIntent::CursorDown => edit(state, Draft::move_down),
        }
    }
}

/// Apply a draft edit, but only while the surface is visible (a tone has
/// been chosen). No content can be authored without a tone.
fn edit(state: EditorState, op: impl FnOnce(&mut Draft)) -> EditorState {
    match state {
        EditorState::Open {
            tone: Some(tone),
            mut draft,
        } => {
            op(&mut draft);
            EditorState::Open {
                tone: Some(tone),
                draft,
            }
        }
        other => other,
    }
}

fn next_tone(tone: Option<Tone>) -> Option<Tone> {
    match tone {
        None => Some(Tone::Formal),
        Some(Tone::Formal) => Some(Tone::Casual),
        Some(Tone::Casual) => Some(Tone::Friendly),
        Some(Tone::Friendly) => None,
    }
}
