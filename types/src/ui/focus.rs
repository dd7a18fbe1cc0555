//! Keyboard focus over the page's controls.

/// A focusable control, in tab order.
///
/// Cards only exist while results are shown, so navigation takes the current
/// card count and skips the card range when it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    SkillInput,
    SearchButton,
    Card(usize),
    Email,
    Message,
    Submit,
}

impl FocusTarget {
    /// Next control in tab order, wrapping around.
    #[must_use]
    pub fn next(self, card_count: usize) -> Self {
        match self {
            Self::SkillInput => Self::SearchButton,
            Self::SearchButton if card_count > 0 => Self::Card(0),
            Self::SearchButton => Self::Email,
            Self::Card(index) if index + 1 < card_count => Self::Card(index + 1),
            Self::Card(_) => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Submit,
            Self::Submit => Self::SkillInput,
        }
    }

    /// Previous control in tab order, wrapping around.
    #[must_use]
    pub fn prev(self, card_count: usize) -> Self {
        match self {
            Self::SkillInput => Self::Submit,
            Self::SearchButton => Self::SkillInput,
            Self::Card(0) => Self::SearchButton,
            Self::Card(index) => Self::Card((index - 1).min(card_count.saturating_sub(1))),
            Self::Email if card_count > 0 => Self::Card(card_count - 1),
            Self::Email => Self::SearchButton,
            Self::Message => Self::Email,
            Self::Submit => Self::Message,
        }
    }

    /// Whether the control accepts typed text.
    #[must_use]
    pub fn is_text_field(self) -> bool {
        matches!(self, Self::SkillInput | Self::Email | Self::Message)
    }

    #[must_use]
    pub fn is_contact_field(self) -> bool {
        matches!(self, Self::Email | Self::Message | Self::Submit)
    }

    /// Clamp a card focus that no longer points at a rendered card.
    #[must_use]
    pub fn clamp_to(self, card_count: usize) -> Self {
        match self {
            Self::Card(_) if card_count == 0 => Self::SkillInput,
            Self::Card(index) if index >= card_count => Self::Card(card_count - 1),
            other => other,
        }
    }
}
