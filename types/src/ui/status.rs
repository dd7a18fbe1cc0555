//! Status text with a visual tone.

/// How a status line should be emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    /// Validation failure: error color, bold.
    Error,
    /// Completed send: success color, bold.
    Success,
}

/// A piece of status text and the tone it is shown in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    text: String,
    tone: StatusTone,
}

impl StatusLine {
    #[must_use]
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tone(&self) -> StatusTone {
        self.tone
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.tone = StatusTone::Neutral;
    }
}
