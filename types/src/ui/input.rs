//! Editable field contents.

use unicode_segmentation::UnicodeSegmentation;

/// Text of one form field plus a cursor measured in grapheme clusters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut draft = Self::default();
        draft.set_text(text);
        draft
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in graphemes from the start of the text.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn enter_char(&mut self, c: char) {
        let index = self.byte_index_at(self.cursor);
        self.text.insert(index, c);
        self.cursor = self.cursor_after_byte(index + c.len_utf8());
    }

    pub fn enter_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let index = self.byte_index_at(self.cursor);
        self.text.insert_str(index, text);
        self.cursor = self.cursor_after_byte(index + text.len());
    }

    /// Backspace.
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete.
    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Ctrl+W: remove trailing whitespace, then the word before the cursor.
    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Text before the cursor, used by the renderer to place the terminal cursor.
    #[must_use]
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_index_at(self.cursor)]
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|g| g.chars().all(char::is_whitespace))
    }

    /// Grapheme cursor just past the cluster holding the byte before `end`.
    /// Inserted marks can merge into their neighbours, so this is recounted
    /// rather than advanced.
    fn cursor_after_byte(&self, end: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .take_while(|(i, _)| *i < end)
            .count()
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::DraftInput;

    #[test]
    fn typing_appends_at_cursor() {
        let mut draft = DraftInput::default();
        for c in "rust".chars() {
            draft.enter_char(c);
        }
        assert_eq!(draft.text(), "rust");
        assert_eq!(draft.cursor(), 4);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut draft = DraftInput::new("dta");
        draft.move_cursor_left();
        draft.move_cursor_left();
        draft.enter_char('a');
        assert_eq!(draft.text(), "data");
        assert_eq!(draft.cursor(), 2);
        assert_eq!(draft.text_before_cursor(), "da");
    }

    #[test]
    fn backspace_and_delete() {
        let mut draft = DraftInput::new("abc");
        draft.delete_char();
        assert_eq!(draft.text(), "ab");
        draft.move_cursor_home();
        draft.delete_char();
        assert_eq!(draft.text(), "ab");
        draft.delete_char_forward();
        assert_eq!(draft.text(), "b");
    }

    #[test]
    fn set_text_moves_cursor_to_end_by_grapheme() {
        let draft = DraftInput::new("hello 🦀 world");
        assert_eq!(draft.cursor(), 13);
    }

    #[test]
    fn delete_word_backwards_stops_at_whitespace() {
        let mut draft = DraftInput::new("machine learning  ");
        draft.delete_word_backwards();
        assert_eq!(draft.text(), "machine ");
    }

    #[test]
    fn paste_advances_cursor_past_inserted_text() {
        let mut draft = DraftInput::new("web");
        draft.enter_text(" development");
        assert_eq!(draft.text(), "web development");
        assert_eq!(draft.cursor(), draft.grapheme_count());
    }

    #[test]
    fn combining_mark_keeps_cursor_on_its_cluster() {
        let mut draft = DraftInput::new("ab");
        draft.move_cursor_left();
        draft.enter_char('\u{301}');
        assert_eq!(draft.text(), "a\u{301}b");
        assert_eq!(draft.cursor(), 1);
        assert_eq!(draft.text_before_cursor(), "a\u{301}");

        draft.enter_text("e\u{301}");
        assert_eq!(draft.cursor(), 2);
        assert_eq!(draft.text_before_cursor(), "a\u{301}e\u{301}");
    }

    #[test]
    fn clear_resets_cursor() {
        let mut draft = DraftInput::new("abc");
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.cursor(), 0);
    }
}
