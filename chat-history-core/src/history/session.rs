use crate::render::StyledText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEntryKind {
    /// Join/leave, advancement and death announcements.
    Game,
    /// Decorated player chat and `/me`, `/say` output.
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub kind: SessionEntryKind,
    pub text: StyledText,
}

/// Everything said or announced since startup, in arrival order.
///
/// Game and chat entries share one sequence so replay interleaves them the way they
/// happened. Append-only; never truncated.
#[derive(Debug, Clone, Default)]
pub struct SessionBuffer {
    entries: Vec<SessionEntry>,
}

impl SessionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_game(&mut self, text: StyledText) {
        self.entries.push(SessionEntry {
            kind: SessionEntryKind::Game,
            text,
        });
    }

    pub fn push_chat(&mut self, text: StyledText) {
        self.entries.push(SessionEntry {
            kind: SessionEntryKind::Chat,
            text,
        });
    }

    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
