use crate::classify::ClassifiedEvent;
use crate::history::{HistoryBuffer, HistoryLimit, SessionBuffer, SessionEntryKind};
use crate::render::StyledText;

use pretty_assertions::assert_eq;

fn chat(n: usize) -> ClassifiedEvent {
    ClassifiedEvent::Chat {
        payload: format!("<Alice> message {n}"),
    }
}

fn history_of(n: usize) -> HistoryBuffer {
    HistoryBuffer::new((1..=n).map(chat).collect())
}

#[test]
fn newest_keeps_most_recent_entries_in_order() {
    // Arrange
    let history = history_of(5);

    // Act
    let view = history.newest(HistoryLimit::Newest(2));

    // Assert
    assert_eq!(view, &[chat(4), chat(5)]);
}

#[test]
fn newest_with_limit_above_length_returns_everything() {
    // Arrange
    let history = history_of(3);

    // Act
    let view = history.newest(HistoryLimit::Newest(10));

    // Assert
    assert_eq!(view.len(), 3);
}

#[test]
fn unlimited_returns_everything() {
    // Arrange
    let history = history_of(5);

    // Act
    let view = history.newest(HistoryLimit::Unlimited);

    // Assert
    assert_eq!(view, history.all());
}

#[test]
fn newest_never_shrinks_the_buffer() {
    // Arrange
    let history = history_of(5);

    // Act
    let _ = history.newest(HistoryLimit::Newest(1));

    // Assert
    assert_eq!(history.len(), 5);
}

#[test]
fn from_max_messages_saturates_large_values() {
    // Act
    let limit = HistoryLimit::from_max_messages(i64::MAX);

    // Assert
    assert!(matches!(limit, HistoryLimit::Newest(n) if n > 0));
}

#[test]
fn session_buffer_keeps_game_and_chat_in_arrival_order() {
    // Arrange
    let mut session = SessionBuffer::new();

    // Act
    session.push_chat(StyledText::literal("<Alice> hi"));
    session.push_game(StyledText::literal("Bob joined the game"));
    session.push_chat(StyledText::literal("<Bob> hey"));

    // Assert
    let kinds: Vec<_> = session.entries().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SessionEntryKind::Chat,
            SessionEntryKind::Game,
            SessionEntryKind::Chat
        ]
    );
    assert_eq!(session.entries()[1].text.to_string(), "Bob joined the game");
}
