use crate::classify::{AdvancementKind, ClassifiedEvent};
use crate::render::{Color, Span, TextStyle, render_event};

use pretty_assertions::assert_eq;

#[test]
fn chat_and_emote_render_unstyled() {
    // Arrange
    let chat = ClassifiedEvent::Chat {
        payload: "<Alice> hello".to_string(),
    };
    let emote = ClassifiedEvent::Emote {
        payload: "* Alice waves".to_string(),
    };

    // Act / Assert
    for event in [chat, emote] {
        let text = render_event(&event);
        assert_eq!(text.spans().len(), 1);
        assert!(text.spans()[0].style.is_plain());
    }
}

#[test]
fn join_left_renders_yellow() {
    // Arrange
    let event = ClassifiedEvent::JoinLeft {
        body: "Bob joined the game".to_string(),
    };

    // Act
    let text = render_event(&event);

    // Assert
    assert_eq!(
        text.spans(),
        &[Span {
            text: "Bob joined the game".to_string(),
            style: TextStyle::colored(Color::Yellow),
        }]
    );
}

#[test]
fn advancement_styles_only_the_title() {
    // Arrange
    let event = ClassifiedEvent::Advancement {
        kind: AdvancementKind::Advancement,
        lead: "Bob has made the advancement ".to_string(),
        suffix: "[Stone Age]".to_string(),
    };

    // Act
    let text = render_event(&event);

    // Assert
    assert_eq!(
        text.spans(),
        &[
            Span {
                text: "Bob has made the advancement ".to_string(),
                style: TextStyle::plain(),
            },
            Span {
                text: "[Stone Age]".to_string(),
                style: TextStyle::colored(Color::Green),
            },
        ]
    );
    assert_eq!(text.to_string(), "Bob has made the advancement [Stone Age]");
}

#[test]
fn challenge_title_is_dark_purple() {
    // Arrange
    let event = ClassifiedEvent::Advancement {
        kind: AdvancementKind::Challenge,
        lead: "Bob has completed the challenge ".to_string(),
        suffix: "[Arbalistic]".to_string(),
    };

    // Act
    let text = render_event(&event);

    // Assert
    assert_eq!(text.spans()[1].style, TextStyle::colored(Color::DarkPurple));
}

#[test]
fn death_renders_unstyled() {
    // Arrange
    let event = ClassifiedEvent::Death {
        body: "Bob was slain by Zombie".to_string(),
    };

    // Act
    let text = render_event(&event);

    // Assert
    assert_eq!(text.to_string(), "Bob was slain by Zombie");
    assert!(text.spans()[0].style.is_plain());
}
