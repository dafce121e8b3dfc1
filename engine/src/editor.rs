use folio_types::DraftInput;

const INDENT: &str = "  ";

/// Cursor-level edits on one scratch file. The owner writes [`text`] back to
/// the filesystem after every edit.
///
/// [`text`]: ScratchEditor::text
#[derive(Debug, Clone)]
pub struct ScratchEditor {
    name: String,
    buffer: DraftInput,
}

/// Key-level edit commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Insert(char),
    Newline,
    Indent,
    Backspace,
    Delete,
    DeleteWord,
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

impl ScratchEditor {
    #[must_use]
    pub fn open(name: impl Into<String>, content: &str) -> Self {
        let mut buffer = DraftInput::with_text(content);
        buffer.move_cursor_end();
        Self {
            name: name.into(),
            buffer,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Zero-based line and column of the cursor.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        self.buffer.line_col()
    }

    /// Apply `command`. Returns whether the text changed.
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        let before = self.buffer.text().len();
        match command {
            EditorCommand::Insert(ch) => {
                self.buffer.enter_char(ch);
                return true;
            }
            EditorCommand::Newline => {
                let indent = self.buffer.current_line_indent().to_string();
                self.buffer.enter_char('\n');
                self.buffer.enter_text(&indent);
                return true;
            }
            EditorCommand::Indent => {
                self.buffer.enter_text(INDENT);
                return true;
            }
            EditorCommand::Backspace => self.buffer.delete_char(),
            EditorCommand::Delete => self.buffer.delete_char_forward(),
            EditorCommand::DeleteWord => self.buffer.delete_word_backwards(),
            EditorCommand::Left => self.buffer.move_cursor_left(),
            EditorCommand::Right => self.buffer.move_cursor_right(),
            EditorCommand::Up => self.buffer.move_cursor_up(),
            EditorCommand::Down => self.buffer.move_cursor_down(),
            EditorCommand::LineStart => self.buffer.move_line_start(),
            EditorCommand::LineEnd => self.buffer.move_line_end(),
        }
        self.buffer.text().len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_inserts_two_spaces() {
        let mut editor = ScratchEditor::open("a.ts", "");
        assert!(editor.apply(EditorCommand::Indent));
        assert_eq!(editor.text(), "  ");
    }

    #[test]
    fn enter_keeps_indentation() {
        let mut editor = ScratchEditor::open("a.json", "{\n    \"a\": 1");
        editor.apply(EditorCommand::Newline);
        assert_eq!(editor.text(), "{\n    \"a\": 1\n    ");
        assert_eq!(editor.cursor(), (2, 4));
    }

    #[test]
    fn typing_replaces_template() {
        let mut editor = ScratchEditor::open("notes.md", "# New Document\n\n");
        while editor.apply(EditorCommand::Backspace) {}
        for ch in "# hi".chars() {
            editor.apply(EditorCommand::Insert(ch));
        }
        assert_eq!(editor.text(), "# hi");
    }

    #[test]
    fn movement_does_not_report_changes() {
        let mut editor = ScratchEditor::open("a.ts", "ab\ncd");
        assert!(!editor.apply(EditorCommand::Up));
        assert!(!editor.apply(EditorCommand::LineStart));
        assert_eq!(editor.cursor(), (0, 0));
        assert!(!editor.apply(EditorCommand::Backspace));
    }
}
