//! Inline add-topic form (MVI).

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, TopicFormState};
pub use view::{render_topic_form, FORM_HEIGHT};
