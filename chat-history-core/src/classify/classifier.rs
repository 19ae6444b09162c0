use crate::classify::constants::{
    ADVANCEMENT, BLACKLIST, CHALLENGE, DEATH_MARKERS, JOINED, LEFT, LEGACY_CONSOLE_ARTIFACT,
    MESSAGE_FIELD, SERVER_INFO,
};
use crate::classify::types::{AdvancementKind, Classification, ClassifiedEvent, DiscardReason};
use std::borrow::Cow;

const CHAT_PREFIXES: &[&str] = &[
    "[Server thread/INFO]: <",
    "[Server thread/INFO] [Not Secure]: <",
];

const EMOTE_PREFIXES: &[&str] = &[
    "[Server thread/INFO]: * ",
    "[Server thread/INFO] [Not Secure]: * ",
];

/// Maps a raw log line to a typed event or a discard.
///
/// Implementations must be pure: same input, same output, no side effects.
pub trait LineClassifier: Send + Sync {
    fn classify(&self, line: &str) -> Classification;
}

/// Substring-heuristic classifier for vanilla server logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinecraftLogClassifier;

impl MinecraftLogClassifier {
    pub fn new() -> Self {
        Self
    }
}

/// Rewrites the legacy ` (Minecraft) ` console prefix to `: `.
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if line.contains(LEGACY_CONSOLE_ARTIFACT) {
        Cow::Owned(line.replace(LEGACY_CONSOLE_ARTIFACT, ": "))
    } else {
        Cow::Borrowed(line)
    }
}

impl LineClassifier for MinecraftLogClassifier {
    fn classify(&self, line: &str) -> Classification {
        let line = normalize_line(line);
        let line = line.as_ref();

        // The Not Secure marker starts with the plain one, so one check covers both.
        if !line.contains(SERVER_INFO) {
            return Classification::Discarded(DiscardReason::MissingMarker);
        }

        if let Some(entry) = find_any(line, BLACKLIST) {
            return Classification::Discarded(DiscardReason::Blacklisted(entry));
        }

        if find_any(line, CHAT_PREFIXES).is_some() {
            if let Some(start) = line.find('<') {
                return Classification::Event(ClassifiedEvent::Chat {
                    payload: line[start..].to_string(),
                });
            }
        }

        if find_any(line, EMOTE_PREFIXES).is_some() {
            if let Some(start) = line.find('*') {
                return Classification::Event(ClassifiedEvent::Emote {
                    payload: line[start..].to_string(),
                });
            }
        }

        let Some((_, body)) = line.split_once(": ") else {
            return Classification::Discarded(DiscardReason::Unrecognized);
        };

        match classify_announcement(body) {
            Some(event) => Classification::Event(event),
            None => Classification::Discarded(DiscardReason::Unrecognized),
        }
    }
}

fn classify_announcement(body: &str) -> Option<ClassifiedEvent> {
    if (body.contains(JOINED) || body.contains(LEFT))
        && !body.contains('<')
        && !body.contains('*')
    {
        return Some(ClassifiedEvent::JoinLeft {
            body: body.to_string(),
        });
    }

    if body.contains(CHALLENGE) {
        return Some(advancement(body, AdvancementKind::Challenge));
    }

    if body.contains(ADVANCEMENT) {
        return Some(advancement(body, AdvancementKind::Advancement));
    }

    if find_any(body, DEATH_MARKERS).is_some() && !body.contains(MESSAGE_FIELD) {
        return Some(ClassifiedEvent::Death {
            body: body.to_string(),
        });
    }

    None
}

/// Splits `"Bob has made the advancement [Stone Age]"` at the last `[`.
fn advancement(body: &str, kind: AdvancementKind) -> ClassifiedEvent {
    let (lead, suffix) = match body.rsplit_once('[') {
        Some((lead, title)) => (lead.to_string(), format!("[{title}")),
        None => (body.to_string(), String::new()),
    };

    ClassifiedEvent::Advancement { kind, lead, suffix }
}

fn find_any(haystack: &str, needles: &[&'static str]) -> Option<&'static str> {
    needles
        .iter()
        .copied()
        .find(|needle| haystack.contains(*needle))
}
