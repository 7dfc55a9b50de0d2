use topicdeck::ui::form::{FormField, FormIntent, FormReducer, TopicFormState};
use topicdeck::ui::mvi::Reducer;

fn open_form() -> TopicFormState {
    FormReducer::reduce(TopicFormState::Hidden, FormIntent::Open)
}

fn type_str(mut state: TopicFormState, text: &str) -> TopicFormState {
    for ch in text.chars() {
        state = FormReducer::reduce(state, FormIntent::Input(ch));
    }
    state
}

#[test]
fn open_starts_empty_and_focused_on_name() {
    let state = open_form();
    assert_eq!(
        state,
        TopicFormState::Visible {
            name: String::new(),
            keywords: String::new(),
            focused: FormField::Name,
        }
    );
}

#[test]
fn close_discards_draft() {
    let state = type_str(open_form(), "abc");
    let state = FormReducer::reduce(state, FormIntent::Close);
    assert_eq!(state, TopicFormState::Hidden);

    // Reopening starts from scratch.
    let state = FormReducer::reduce(state, FormIntent::Open);
    assert_eq!(state.fields(), Some(("", "")));
}

#[test]
fn focus_next_toggles_between_fields() {
    let state = FormReducer::reduce(open_form(), FormIntent::FocusNext);
    assert!(matches!(
        state,
        TopicFormState::Visible {
            focused: FormField::Keywords,
            ..
        }
    ));
    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    assert!(matches!(
        state,
        TopicFormState::Visible {
            focused: FormField::Name,
            ..
        }
    ));
}

#[test]
fn input_goes_to_focused_field() {
    let state = type_str(open_form(), "Rust");
    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    let state = type_str(state, "a,b");
    assert_eq!(state.fields(), Some(("Rust", "a,b")));
}

#[test]
fn backspace_trims_focused_field_and_is_safe_when_empty() {
    let state = type_str(open_form(), "ab");
    let state = FormReducer::reduce(state, FormIntent::Backspace);
    assert_eq!(state.fields(), Some(("a", "")));

    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    let state = FormReducer::reduce(state, FormIntent::Backspace);
    assert_eq!(state.fields(), Some(("a", "")));
}

#[test]
fn can_submit_only_with_both_fields_filled() {
    let state = open_form();
    assert!(!state.can_submit());

    let state = type_str(state, "T");
    assert!(!state.can_submit());

    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    let state = type_str(state, "k1,k2");
    assert!(state.can_submit());
}

#[test]
fn editing_while_hidden_is_noop() {
    let state = FormReducer::reduce(TopicFormState::Hidden, FormIntent::Input('x'));
    assert_eq!(state, TopicFormState::Hidden);
    let state = FormReducer::reduce(TopicFormState::Hidden, FormIntent::FocusNext);
    assert_eq!(state, TopicFormState::Hidden);
}
