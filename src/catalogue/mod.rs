//! The catalogue domain: categories, topics and the store that owns them.
//!
//! The store is the single owner of catalogue data. Every mutation swaps
//! in a freshly built snapshot instead of editing nested collections in
//! place, so a `CatalogueState` handed to the view layer is never changed
//! behind its back.

mod error;
mod ids;
mod model;
mod store;

pub use error::CatalogueError;
pub use ids::{IdSource, SequenceIds, WallClockIds};
pub use model::{split_keywords, Category, Topic, TopicId};
pub use store::{CatalogueState, CatalogueStore};
