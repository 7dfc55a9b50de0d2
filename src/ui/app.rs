use tracing::{info, warn};

use crate::catalogue::{CatalogueStore, Topic, TopicId};
use crate::generate::ContentGenerator;
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::form::{FormIntent, FormReducer, TopicFormState};
use crate::ui::mvi::Reducer;

/// Which surface currently receives keyboard input.
///
/// Derived from dialog states rather than stored, so it can never
/// disagree with them: an open editor always wins, then the form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Browser,
    Form,
    Editor,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Owner of catalogue data and selection (not MVI; it carries the
    /// injected id source).
    catalogue: CatalogueStore,
    /// State of the add-topic form (MVI pattern).
    form: TopicFormState,
    /// State of the editor overlay (MVI pattern).
    editor: EditorState,
    /// Generation backend invoked by the editor's Generate action.
    generator: Box<dyn ContentGenerator>,
    /// Highlighted row in the topic list of the current category.
    topic_cursor: usize,
}

impl App {
    pub fn new(catalogue: CatalogueStore, generator: Box<dyn ContentGenerator>) -> Self {
        Self {
            should_quit: false,
            catalogue,
            form: TopicFormState::default(),
            editor: EditorState::default(),
            generator,
            topic_cursor: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        if self.editor.is_open() {
            Focus::Editor
        } else if self.form.is_visible() {
            Focus::Form
        } else {
            Focus::Browser
        }
    }

    pub fn catalogue(&self) -> &CatalogueStore {
        &self.catalogue
    }

    pub fn form(&self) -> &TopicFormState {
        &self.form
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn topic_cursor(&self) -> usize {
        self.topic_cursor
    }

    // ========================================================================
    // Category selection
    // ========================================================================

    /// Move the category selection by one tab, wrapping around.
    pub fn move_category_selection(&mut self, direction: i32) {
        let names: Vec<String> = self
            .catalogue
            .snapshot()
            .category_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            return;
        }

        let len = names.len();
        let current = self
            .catalogue
            .snapshot()
            .selected_position()
            .unwrap_or(0)
            .min(len - 1);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        // Names come from the catalogue itself, so this cannot miss.
        let _ = self.catalogue.select_category(&names[next]);
        self.topic_cursor = 0;
    }

    /// Jump to a tab by 1-based index (digit keys).
    pub fn select_category_by_index(&mut self, index: usize) -> bool {
        let Some(name) = self
            .catalogue
            .snapshot()
            .category_names()
            .get(index.saturating_sub(1))
            .map(|name| name.to_string())
        else {
            return false;
        };
        let _ = self.catalogue.select_category(&name);
        self.topic_cursor = 0;
        true
    }

    // ========================================================================
    // Topic cursor
    // ========================================================================

    pub fn move_topic_cursor(&mut self, direction: i32) {
        let len = self.current_topic_count();
        if len == 0 {
            self.topic_cursor = 0;
            return;
        }

        let current = self.topic_cursor.min(len - 1);
        self.topic_cursor = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// The topic under the cursor in the current category.
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.catalogue
            .snapshot()
            .current_view()
            .and_then(|category| category.topics.get(self.topic_cursor))
    }

    fn current_topic_count(&self) -> usize {
        self.catalogue
            .snapshot()
            .current_view()
            .map(|category| category.topics.len())
            .unwrap_or(0)
    }

    fn clamp_topic_cursor(&mut self) {
        let len = self.current_topic_count();
        if len == 0 {
            self.topic_cursor = 0;
        } else if self.topic_cursor >= len {
            self.topic_cursor = len - 1;
        }
    }

    /// Delete the topic under the cursor from the current category.
    ///
    /// Unknown category or id degrades to a silent no-op, matching the
    /// browser behavior; the advisory error is only logged.
    pub fn delete_selected_topic(&mut self) {
        let Some((category, id)) = self.delete_target() else {
            return;
        };
        if let Err(err) = self.catalogue.delete_topic(&category, id) {
            warn!(%err, "delete ignored");
        }
        self.clamp_topic_cursor();
    }

    fn delete_target(&self) -> Option<(String, TopicId)> {
        let category = self.catalogue.snapshot().current_view()?;
        let topic = category.topics.get(self.topic_cursor)?;
        Some((category.name.clone(), topic.id))
    }

    // ========================================================================
    // Add-topic form (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the form reducer.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_topic_form(&mut self) {
        self.dispatch_form(FormIntent::Open);
    }

    /// Submit the form if both fields pass the required-field check.
    ///
    /// On success the new topic lands in the configured target category
    /// and the form closes with its draft cleared. Returns whether a
    /// topic was added.
    pub fn submit_topic_form(&mut self) -> bool {
        if !self.form.can_submit() {
            return false;
        }
        let Some((name, keywords)) = self.form.fields() else {
            return false;
        };
        let (name, keywords) = (name.to_string(), keywords.to_string());
        match self.catalogue.add_topic(&name, &keywords) {
            Ok(id) => {
                info!(id, name = %name, "topic added");
            }
            Err(err) => {
                warn!(%err, "add ignored");
            }
        }
        self.dispatch_form(FormIntent::Close);
        self.clamp_topic_cursor();
        true
    }

    // ========================================================================
    // Editor overlay (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the editor reducer.
    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    /// Open a fresh editor overlay (the "Write" action on a topic row).
    pub fn open_editor(&mut self) {
        self.dispatch_editor(EditorIntent::Open);
    }

    /// The Generate action: hand `(tone, draft)` to the backend, then
    /// close. The overlay closes whatever the backend says; a failure is
    /// logged, never surfaced as state, and nothing is written back to
    /// the catalogue.
    pub fn generate_and_close(&mut self) {
        if !self.editor.can_generate() {
            return;
        }
        if let (Some(tone), Some(draft)) = (self.editor.tone(), self.editor.draft()) {
            match self.generator.generate(tone, draft) {
                Ok(content) => {
                    info!(tone = tone.label(), chars = content.len(), "content generated");
                }
                Err(err) => {
                    warn!(%err, "generation failed");
                }
            }
        }
        self.dispatch_editor(EditorIntent::Close);
    }
}
