use std::fmt;

/// Chat colors used by replayed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Gray,
    Yellow,
    DarkPurple,
    Green,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub italic: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            italic: false,
        }
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

/// A chat line made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::plain())
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            spans: vec![Span {
                text: text.into(),
                style,
            }],
        }
    }

    pub fn append(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style,
        });
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
