//! State for the blog editor overlay.

use crate::ui::mvi::UiState;

use super::draft::Draft;

/// Writing tone for the draft. `None` at the state level means the user
/// has not picked one yet and the text surface stays hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Formal,
    Casual,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Formal, Tone::Casual, Tone::Friendly];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
        }
    }
}

/// State of the editor overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    /// Overlay is not visible. Terminal for an overlay instance;
    /// reopening starts a fresh one.
    #[default]
    Closed,

    /// Overlay is visible. The draft exists from the start but can only
    /// be edited once a tone is chosen.
    Open {
        tone: Option<Tone>,
        draft: Draft,
    },
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn tone(&self) -> Option<Tone> {
        match self {
            Self::Open { tone, .. } => *tone,
            Self::Closed => None,
        }
    }

    /// The text surface (and the Generate action) exists only while a
    /// tone is selected.
    pub fn surface_visible(&self) -> bool {
        matches!(self, Self::Open { tone: Some(_), .. })
    }

    pub fn can_generate(&self) -> bool {
        self.surface_visible()
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }
}
