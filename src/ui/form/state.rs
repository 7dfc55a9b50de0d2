use crate::ui::mvi::UiState;

/// Which input of the form currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Keywords,
}

/// State of the inline add-topic form.
///
/// The draft text is transient: it is discarded on submit or cancel and
/// never survives the form being hidden.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TopicFormState {
    #[default]
    Hidden,
    Visible {
        name: String,
        keywords: String,
        focused: FormField,
    },
}

impl UiState for TopicFormState {}

impl TopicFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Required-field gate: submission is allowed only when both fields
    /// are non-empty.
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            Self::Visible { name, keywords, .. } if !name.is_empty() && !keywords.is_empty()
        )
    }

    /// Current field values, if the form is open.
    pub fn fields(&self) -> Option<(&str, &str)> {
        match self {
            Self::Hidden => None,
            Self::Visible { name, keywords, .. } => Some((name, keywords)),
        }
    }
}
