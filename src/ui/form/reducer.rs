use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, TopicFormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = TopicFormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open => TopicFormState::Visible {
                name: String::new(),
                keywords: String::new(),
                focused: FormField::Name,
            },
            FormIntent::Close => TopicFormState::Hidden,
            FormIntent::FocusNext => match state {
                TopicFormState::Visible {
                    name,
                    keywords,
                    focused,
                } => TopicFormState::Visible {
                    name,
                    keywords,
                    focused: match focused {
                        FormField::Name => FormField::Keywords,
                        FormField::Keywords => FormField::Name,
                    },
                },
                other => other,
            },
            FormIntent::Input(ch) => match state {
                TopicFormState::Visible {
                    mut name,
                    mut keywords,
                    focused,
                } => {
                    match focused {
                        FormField::Name => name.push(ch),
                        FormField::Keywords => keywords.push(ch),
                    }
                    TopicFormState::Visible {
                        name,
                        keywords,
                        focused,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                TopicFormState::Visible {
                    mut name,
                    mut keywords,
                    focused,
                } => {
                    match focused {
                        FormField::Name => {
                            name.pop();
                        }
                        FormField::Keywords => {
                            keywords.pop();
                        }
                    }
                    TopicFormState::Visible {
                        name,
                        keywords,
                        focused,
                    }
                }
                other => other,
            },
        }
    }
}
