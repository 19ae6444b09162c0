use chat_history_core::render::{Color, Span, StyledText};
use owo_colors::OwoColorize;

/// Renders chat styling as ANSI escapes.
pub fn to_ansi(text: &StyledText) -> String {
    text.spans().iter().map(span_to_ansi).collect()
}

fn span_to_ansi(span: &Span) -> String {
    let colored = match span.style.color {
        Some(Color::Gray) => span.text.bright_black().to_string(),
        Some(Color::Yellow) => span.text.yellow().to_string(),
        Some(Color::DarkPurple) => span.text.purple().to_string(),
        Some(Color::Green) => span.text.green().to_string(),
        None => span.text.clone(),
    };

    if span.style.italic {
        colored.italic().to_string()
    } else {
        colored
    }
}
