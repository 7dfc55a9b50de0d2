//! Content generation seam for the editor overlay.
//!
//! The overlay hands `(tone, draft)` to a [`ContentGenerator`] when the
//! user triggers Generate. Swapping in a real backend must not touch the
//! overlay state machine, so the trait is injected into the app.

use thiserror::Error;

use crate::ui::editor::{Draft, Tone};

/// Failures from a generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation backend failed: {message}")]
    Backend { message: String },

    #[error("no generation backend available")]
    Unavailable,
}

/// Produces final content from a tone and a draft.
pub trait ContentGenerator: Send {
    fn generate(&self, tone: Tone, draft: &Draft) -> Result<String, GenerationError>;
}

/// Placeholder backend: always succeeds and returns the draft verbatim.
pub struct PassthroughGenerator;

impl ContentGenerator for PassthroughGenerator {
    fn generate(&self, _tone: Tone, draft: &Draft) -> Result<String, GenerationError> {
        Ok(draft.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_returns_draft_text() {
        let mut draft = Draft::default();
        for ch in "hello".chars() {
            draft.insert_char(ch);
        }
        let out = PassthroughGenerator
            .generate(Tone::Casual, &draft)
            .expect("passthrough never fails");
        assert_eq!(out, "hello");
    }
}
