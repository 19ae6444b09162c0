use crate::classify::{AdvancementKind, ClassifiedEvent};

use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn advancement_serializes_event_tag_and_kind_separately() {
    // Arrange
    let event = ClassifiedEvent::Advancement {
        kind: AdvancementKind::Challenge,
        lead: "Bob has completed the challenge ".to_string(),
        suffix: "[Arbalistic]".to_string(),
    };

    // Act
    let value = serde_json::to_value(&event).unwrap();

    // Assert
    assert_eq!(
        value,
        json!({
            "event": "advancement",
            "kind": "challenge",
            "lead": "Bob has completed the challenge ",
            "suffix": "[Arbalistic]"
        })
    );
}

#[test]
fn chat_serializes_with_payload() {
    // Arrange
    let event = ClassifiedEvent::Chat {
        payload: "<Alice> hello".to_string(),
    };

    // Act
    let line = serde_json::to_string(&event).unwrap();

    // Assert
    assert_eq!(line, r#"{"event":"chat","payload":"<Alice> hello"}"#);
}

#[test]
fn join_left_uses_snake_case_tag() {
    // Arrange
    let event = ClassifiedEvent::JoinLeft {
        body: "Bob joined the game".to_string(),
    };

    // Act
    let value = serde_json::to_value(&event).unwrap();

    // Assert
    assert_eq!(value["event"], "join_left");
    assert_eq!(value["body"], "Bob joined the game");
}
