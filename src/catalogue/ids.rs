use std::time::{SystemTime, UNIX_EPOCH};

use super::model::TopicId;

/// Source of topic ids, injected into the store so id generation can be
/// swapped without touching store logic.
pub trait IdSource: Send {
    fn next_id(&mut self) -> TopicId;
}

/// Wall-clock milliseconds since the Unix epoch.
///
/// Monotonic enough for a single-writer in-memory store; not globally
/// unique across processes, which is acceptable without persistence.
#[derive(Debug, Default)]
pub struct WallClockIds;

impl IdSource for WallClockIds {
    fn next_id(&mut self) -> TopicId {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as TopicId)
            .unwrap_or(0)
    }
}

/// Deterministic sequence, for tests and reproducible seeds.
#[derive(Debug)]
pub struct SequenceIds {
    next: TopicId,
}

impl SequenceIds {
    pub fn starting_at(next: TopicId) -> Self {
        Self { next }
    }
}

impl IdSource for SequenceIds {
    fn next_id(&mut self) -> TopicId {
        let id = self.next;
        self.next += 1;
        id
    }
}
