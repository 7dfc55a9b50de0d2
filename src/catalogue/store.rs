use tracing::debug;

use super::error::CatalogueError;
use super::ids::IdSource;
use super::model::{split_keywords, Category, Topic, TopicId};

/// Snapshot of the catalogue contents plus the active tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogueState {
    pub categories: Vec<Category>,
    /// Name of the active category. A stale name means nothing renders.
    pub selected: String,
}

impl CatalogueState {
    /// The category matching the selection, or `None` for a stale
    /// selection. Callers render nothing in the `None` case.
    pub fn current_view(&self) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == self.selected)
    }

    /// Category names in tab order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Tab position of the selection, if it still exists.
    pub fn selected_position(&self) -> Option<usize> {
        self.categories.iter().position(|c| c.name == self.selected)
    }
}

/// Owner of catalogue data and selection state.
///
/// All operations are total: invalid input returns an `Err` and leaves
/// the state exactly as it was. Mutations rebuild the touched category
/// list as a new snapshot rather than editing nested vectors in place.
pub struct CatalogueStore {
    state: CatalogueState,
    ids: Box<dyn IdSource>,
    /// Category that receives newly added topics.
    target_category: String,
}

impl CatalogueStore {
    /// Seed the store. The first category becomes the initial selection.
    pub fn new(
        categories: Vec<Category>,
        target_category: impl Into<String>,
        ids: Box<dyn IdSource>,
    ) -> Self {
        let selected = categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        Self {
            state: CatalogueState {
                categories,
                selected,
            },
            ids,
            target_category: target_category.into(),
        }
    }

    pub fn snapshot(&self) -> &CatalogueState {
        &self.state
    }

    pub fn target_category(&self) -> &str {
        &self.target_category
    }

    /// Change the active category.
    ///
    /// The selection always moves, even to an unknown name: a stale
    /// selection yields an empty view rather than a failure. The `Err`
    /// is advisory so callers can tell the two apart.
    pub fn select_category(&mut self, name: &str) -> Result<(), CatalogueError> {
        let known = self.state.categories.iter().any(|c| c.name == name);
        self.state.selected = name.to_string();
        if known {
            Ok(())
        } else {
            debug!(name, "selected a category that does not exist");
            Err(CatalogueError::CategoryNotFound {
                name: name.to_string(),
            })
        }
    }

    /// Append a new topic to the target category.
    ///
    /// The id comes from the injected [`IdSource`] and the keyword string
    /// is split with [`split_keywords`]. The target is fixed by
    /// configuration and independent of the current selection.
    pub fn add_topic(&mut self, name: &str, keywords_raw: &str) -> Result<TopicId, CatalogueError> {
        if !self
            .state
            .categories
            .iter()
            .any(|c| c.name == self.target_category)
        {
            return Err(CatalogueError::CategoryNotFound {
                name: self.target_category.clone(),
            });
        }

        let id = self.ids.next_id();
        let topic = Topic {
            id,
            name: name.to_string(),
            keywords: split_keywords(keywords_raw),
        };

        let categories = self
            .state
            .categories
            .iter()
            .map(|category| {
                if category.name == self.target_category {
                    let mut topics = category.topics.clone();
                    topics.push(topic.clone());
                    Category {
                        name: category.name.clone(),
                        topics,
                    }
                } else {
                    category.clone()
                }
            })
            .collect();

        self.state = CatalogueState {
            categories,
            selected: self.state.selected.clone(),
        };
        debug!(category = %self.target_category, id, name, "added topic");
        Ok(id)
    }

    /// Remove the first topic with a matching id from the named category.
    ///
    /// Topics in other categories are untouched even when an id collides;
    /// ids are only unique within their own category.
    pub fn delete_topic(
        &mut self,
        category_name: &str,
        id: TopicId,
    ) -> Result<(), CatalogueError> {
        let Some(category) = self
            .state
            .categories
            .iter()
            .find(|c| c.name == category_name)
        else {
            return Err(CatalogueError::CategoryNotFound {
                name: category_name.to_string(),
            });
        };
        let Some(index) = category.topics.iter().position(|t| t.id == id) else {
            return Err(CatalogueError::TopicNotFound {
                category: category_name.to_string(),
                id,
            });
        };

        let categories = self
            .state
            .categories
            .iter()
            .map(|category| {
                if category.name == category_name {
                    let mut topics = category.topics.clone();
                    topics.remove(index);
                    Category {
                        name: category.name.clone(),
                        topics,
                    }
                } else {
                    category.clone()
                }
            })
            .collect();

        self.state = CatalogueState {
            categories,
            selected: self.state.selected.clone(),
        };
        debug!(category = category_name, id, "deleted topic");
        Ok(())
    }
}
