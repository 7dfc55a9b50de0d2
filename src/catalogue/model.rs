use serde::{Deserialize, Serialize};

/// Topic identifier. Unique within its owning category at creation time
/// only; different categories may legitimately reuse the same id.
pub type TopicId = i64;

/// A recommended subject with a display name and keyword tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub keywords: Vec<String>,
}

/// A named grouping that owns an ordered list of topics and corresponds
/// to one selectable tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// Split a comma-separated keyword string into tags.
///
/// No trimming, and empty segments are kept as empty-string keywords, so
/// `""` yields `[""]`. Callers rely on this exact shape.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
