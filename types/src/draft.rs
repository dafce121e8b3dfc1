//! Grapheme-aware text buffer with a cursor.
//!
//! Backs every editable field: overlay queries, dialog inputs, contact form
//! fields and the scratch file editor.

use unicode_segmentation::UnicodeSegmentation;

/// Text plus a cursor measured in grapheme clusters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut draft = Self::default();
        draft.set_text(text.into());
        draft
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor_right();
    }

    pub fn enter_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let index = self.byte_index();
        self.text.insert_str(index, text);
        let inserted = text.graphemes(true).count();
        self.cursor = self.clamp_cursor(self.cursor.saturating_add(inserted));
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.grapheme_count();
    }

    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    /// Zero-based `(line, column)` of the cursor, column in graphemes.
    #[must_use]
    pub fn line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.byte_index()];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        (line, before[line_start..].graphemes(true).count())
    }

    /// Leading spaces and tabs of the line the cursor is on.
    #[must_use]
    pub fn current_line_indent(&self) -> &str {
        let index = self.byte_index();
        let line_start = self.text[..index].rfind('\n').map_or(0, |idx| idx + 1);
        let line = &self.text[line_start..];
        let indent_len = line
            .char_indices()
            .find(|(_, c)| *c != ' ' && *c != '\t')
            .map_or(line.len(), |(idx, _)| idx);
        &line[..indent_len]
    }

    pub fn move_line_start(&mut self) {
        let (_, col) = self.line_col();
        self.cursor -= col;
    }

    pub fn move_line_end(&mut self) {
        let (line, _) = self.line_col();
        let len = self.line_len(line);
        self.move_to(line, len);
    }

    pub fn move_cursor_up(&mut self) {
        let (line, col) = self.line_col();
        if line == 0 {
            self.cursor = 0;
            return;
        }
        self.move_to(line - 1, col);
    }

    pub fn move_cursor_down(&mut self) {
        let (line, col) = self.line_col();
        if line + 1 >= self.line_count() {
            self.move_cursor_end();
            return;
        }
        self.move_to(line + 1, col);
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_len(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .nth(line)
            .map_or(0, |text| text.graphemes(true).count())
    }

    fn move_to(&mut self, line: usize, col: usize) {
        let preceding: usize = self
            .text
            .split('\n')
            .take(line)
            .map(|text| text.graphemes(true).count() + 1)
            .sum();
        let col = col.min(self.line_len(line));
        self.cursor = self.clamp_cursor(preceding + col);
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|grapheme| grapheme.chars().all(char::is_whitespace))
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.grapheme_count())
    }
}
