use serde::Serialize;

/// A log line recognized as something worth replaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClassifiedEvent {
    /// Player chat, including the `<speaker>` prefix.
    Chat { payload: String },
    /// `/me` output, starting at the `*`.
    Emote { payload: String },
    JoinLeft { body: String },
    Advancement {
        kind: AdvancementKind,
        /// Text before the bracketed title, e.g. `"Bob has made the advancement "`.
        lead: String,
        /// Bracketed title, e.g. `"[Stone Age]"`.
        suffix: String,
    },
    Death { body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancementKind {
    Challenge,
    Advancement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// No `[Server thread/INFO]` marker on the line.
    MissingMarker,
    /// The line contains this blacklisted substring.
    Blacklisted(&'static str),
    /// Info line that matched none of the event patterns.
    Unrecognized,
}

/// Outcome of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Event(ClassifiedEvent),
    Discarded(DiscardReason),
}

impl Classification {
    pub fn into_event(self) -> Option<ClassifiedEvent> {
        match self {
            Classification::Event(event) => Some(event),
            Classification::Discarded(_) => None,
        }
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, Classification::Discarded(_))
    }
}

impl ClassifiedEvent {
    /// Short label used by logs and tooling.
    pub fn label(&self) -> &'static str {
        match self {
            ClassifiedEvent::Chat { .. } => "chat",
            ClassifiedEvent::Emote { .. } => "emote",
            ClassifiedEvent::JoinLeft { .. } => "join_left",
            ClassifiedEvent::Advancement {
                kind: AdvancementKind::Challenge,
                ..
            } => "challenge",
            ClassifiedEvent::Advancement {
                kind: AdvancementKind::Advancement,
                ..
            } => "advancement",
            ClassifiedEvent::Death { .. } => "death",
        }
    }
}
