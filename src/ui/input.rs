use crate::ui::app::{App, Focus};
use crate::ui::editor::EditorIntent;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Editor => handle_editor_key(app, key),
        Focus::Form => handle_form_key(app, key),
        Focus::Browser => handle_browser_key(app, key),
    }
}

fn handle_browser_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.move_category_selection(-1),
        KeyCode::Right => app.move_category_selection(1),
        KeyCode::Up => app.move_topic_cursor(-1),
        KeyCode::Down => app.move_topic_cursor(1),
        KeyCode::Delete => app.delete_selected_topic(),
        KeyCode::Enter => {
            if app.selected_topic().is_some() {
                app.open_editor();
            }
        }
        KeyCode::Char(ch) => match ch {
            'q' => app.request_quit(),
            'a' => app.open_topic_form(),
            'd' => app.delete_selected_topic(),
            'w' => {
                // "Write" on the highlighted topic row.
                if app.selected_topic().is_some() {
                    app.open_editor();
                }
            }
            _ => {
                if let Some(index) = ch.to_digit(10) {
                    if index > 0 {
                        app.select_category_by_index(index as usize);
                    }
                }
            }
        },
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_form(FormIntent::Close),
        KeyCode::Tab => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::Enter => {
            // No-op unless both fields are non-empty, like a native
            // required-field gate.
            app.submit_topic_form();
        }
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) => app.dispatch_form(FormIntent::Input(ch)),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 't') {
        app.dispatch_editor(EditorIntent::CycleTone);
        return;
    }
    if is_ctrl_char(key, 'g') {
        app.generate_and_close();
        return;
    }

    match key.code {
        KeyCode::Esc => app.dispatch_editor(EditorIntent::Close),
        KeyCode::Enter => app.dispatch_editor(EditorIntent::Newline),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Left => app.dispatch_editor(EditorIntent::CursorLeft),
        KeyCode::Right => app.dispatch_editor(EditorIntent::CursorRight),
        KeyCode::Up => app.dispatch_editor(EditorIntent::CursorUp),
        KeyCode::Down => app.dispatch_editor(EditorIntent::CursorDown),
        KeyCode::Char(ch) => {
            // Digit shortcuts pick a tone while none is set; once the
            // surface is visible they type into the draft.
            if app.editor().tone().is_none() {
                if let Some(tone) = tone_for_digit(ch) {
                    app.dispatch_editor(EditorIntent::SelectTone(Some(tone)));
                }
            } else {
                app.dispatch_editor(EditorIntent::Input(ch));
            }
        }
        _ => {}
    }
}

fn tone_for_digit(ch: char) -> Option<crate::ui::editor::Tone> {
    use crate::ui::editor::Tone;
    match ch {
        '1' => Some(Tone::Formal),
        '2' => Some(Tone::Casual),
        '3' => Some(Tone::Friendly),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{CatalogueStore, Category, SequenceIds, Topic};
    use crate::generate::PassthroughGenerator;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> App {
        let categories = vec![
            Category {
                name: "First".to_string(),
                topics: vec![Topic {
                    id: 1,
                    name: "A".to_string(),
                    keywords: vec![],
                }],
            },
            Category {
                name: "Custom".to_string(),
                topics: vec![],
            },
        ];
        let store =
            CatalogueStore::new(categories, "Custom", Box::new(SequenceIds::starting_at(9)));
        App::new(store, Box::new(PassthroughGenerator))
    }

    #[test]
    fn ctrl_q_quits_from_any_focus() {
        let mut app = make_app();
        app.open_editor();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }

    #[test]
    fn write_key_needs_a_topic_under_cursor() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Right)); // "Custom", empty
        handle_key(&mut app, press(KeyCode::Char('w')));
        assert!(!app.editor().is_open());

        handle_key(&mut app, press(KeyCode::Left));
        handle_key(&mut app, press(KeyCode::Char('w')));
        assert!(app.editor().is_open());
    }

    #[test]
    fn typed_text_reaches_the_form() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('T')));
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.form().fields(), Some(("T", "k")));
    }

    #[test]
    fn editor_digits_pick_tone_then_type() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('w')));
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(
            app.editor().tone(),
            Some(crate::ui::editor::Tone::Casual)
        );
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.editor().draft().map(|d| d.text()), Some("2".to_string()));
    }
}
