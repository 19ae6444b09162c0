use crate::classify::{AdvancementKind, ClassifiedEvent};
use crate::render::text::{Color, StyledText, TextStyle};

/// Renders one history event the way the server originally showed it.
pub fn render_event(event: &ClassifiedEvent) -> StyledText {
    match event {
        ClassifiedEvent::Chat { payload } | ClassifiedEvent::Emote { payload } => {
            StyledText::literal(payload.as_str())
        }
        ClassifiedEvent::JoinLeft { body } => {
            StyledText::styled(body.as_str(), TextStyle::colored(Color::Yellow))
        }
        ClassifiedEvent::Advancement { kind, lead, suffix } => {
            let color = match kind {
                AdvancementKind::Challenge => Color::DarkPurple,
                AdvancementKind::Advancement => Color::Green,
            };
            StyledText::literal(lead.as_str()).append(suffix.as_str(), TextStyle::colored(color))
        }
        ClassifiedEvent::Death { body } => StyledText::literal(body.as_str()),
    }
}
