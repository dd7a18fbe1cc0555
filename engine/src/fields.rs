//! Proof-token access to the focused text field.
//!
//! Text editing only makes sense while a text field has focus. [`App::field_token`]
//! hands out a token in that case, and [`App::field_editor`] turns it into an
//! editor bound to the focused field.

use skillscout_types::sanitize_field_text;
use skillscout_types::ui::{DraftInput, FocusTarget};

use crate::App;

/// Proof that a text field has focus.
#[derive(Debug)]
pub struct FieldToken(FocusTarget);

/// Editor for the focused text field.
pub struct FieldEditor<'a> {
    app: &'a mut App,
    target: FocusTarget,
}

impl App {
    /// Get proof token if a text field is focused.
    pub fn field_token(&self) -> Option<FieldToken> {
        self.focus
            .is_text_field()
            .then_some(FieldToken(self.focus))
    }

    /// Get the field editor (requires proof token).
    pub fn field_editor(&mut self, token: FieldToken) -> FieldEditor<'_> {
        FieldEditor {
            app: self,
            target: token.0,
        }
    }
}

impl FieldEditor<'_> {
    pub fn target(&self) -> FocusTarget {
        self.target
    }

    fn multiline(&self) -> bool {
        self.target == FocusTarget::Message
    }

    fn draft_mut(&mut self) -> &mut DraftInput {
        match self.target {
            FocusTarget::Email => &mut self.app.email,
            FocusTarget::Message => &mut self.app.message,
            _ => &mut self.app.skill_input,
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if c == '\n' {
            self.enter_newline();
            return;
        }
        if c.is_control() {
            return;
        }
        self.draft_mut().enter_char(c);
    }

    /// Insert text (typically a paste), stripped of control sequences.
    pub fn enter_text(&mut self, text: &str) {
        let multiline = self.multiline();
        let clean = sanitize_field_text(text, multiline);
        self.draft_mut().enter_text(&clean);
    }

    /// Newline in the message field; a no-op elsewhere.
    pub fn enter_newline(&mut self) {
        if self.multiline() {
            self.draft_mut().enter_char('\n');
        }
    }

    pub fn delete_char(&mut self) {
        self.draft_mut().delete_char();
    }

    pub fn delete_char_forward(&mut self) {
        self.draft_mut().delete_char_forward();
    }

    pub fn delete_word_backwards(&mut self) {
        self.draft_mut().delete_word_backwards();
    }

    pub fn move_cursor_left(&mut self) {
        self.draft_mut().move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.draft_mut().move_cursor_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.draft_mut().move_cursor_home();
    }

    pub fn move_cursor_end(&mut self) {
        self.draft_mut().move_cursor_end();
    }

    pub fn clear(&mut self) {
        self.draft_mut().clear();
    }
}
