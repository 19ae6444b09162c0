use crate::classify::ClassifiedEvent;

/// How much of the history a joining player gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLimit {
    Unlimited,
    /// Only the newest `n` entries (`n > 0`).
    Newest(usize),
}

impl HistoryLimit {
    /// Any non-positive value means unlimited.
    pub fn from_max_messages(max_messages: i64) -> Self {
        if max_messages <= 0 {
            HistoryLimit::Unlimited
        } else {
            HistoryLimit::Newest(usize::try_from(max_messages).unwrap_or(usize::MAX))
        }
    }
}

/// Classified events recovered from archives, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    events: Vec<ClassifiedEvent>,
}

impl HistoryBuffer {
    pub fn new(events: Vec<ClassifiedEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn all(&self) -> &[ClassifiedEvent] {
        &self.events
    }

    /// The newest entries allowed by `limit`, still oldest first.
    pub fn newest(&self, limit: HistoryLimit) -> &[ClassifiedEvent] {
        match limit {
            HistoryLimit::Unlimited => &self.events,
            HistoryLimit::Newest(n) => {
                let start = self.events.len().saturating_sub(n);
                &self.events[start..]
            }
        }
    }
}
