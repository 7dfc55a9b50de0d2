use thiserror::Error;

use super::model::TopicId;

/// Lookup failures from catalogue operations.
///
/// An `Err` always means the state was left untouched; the UI treats
/// these as silent no-ops while tests can assert on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("category '{name}' not found")]
    CategoryNotFound { name: String },

    #[error("topic {id} not found in category '{category}'")]
    TopicNotFound { category: String, id: TopicId },
}
