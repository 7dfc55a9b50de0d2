/// Multi-line draft buffer with a cursor.
///
/// Plain text with line structure; the smallest surface that still
/// behaves like an editor. Scoped to one overlay instance and discarded
/// when the overlay closes.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    lines: Vec<String>,
    cursor_line: usize,
    cursor_col: usize,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_col: 0,
        }
    }
}

impl Draft {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as (line, column), both zero-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Full text with `\n` separators.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn insert_char(&mut self, ch: char) {
        let line = &mut self.lines[self.cursor_line];
        let byte = byte_index(line, self.cursor_col);
        line.insert(byte, ch);
        self.cursor_col += 1;
    }

    /// Split the current line at the cursor.
    pub fn newline(&mut self) {
        let line = &mut self.lines[self.cursor_line];
        let byte = byte_index(line, self.cursor_col);
        let rest = line.split_off(byte);
        self.lines.insert(self.cursor_line + 1, rest);
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    /// Delete before the cursor; at column zero, join with the previous
    /// line.
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            let line = &mut self.lines[self.cursor_line];
            let byte = byte_index(line, self.cursor_col);
            line.remove(byte);
        } else if self.cursor_line > 0 {
            let tail = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            let line = &mut self.lines[self.cursor_line];
            self.cursor_col = line.chars().count();
            line.push_str(&tail);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].chars().count();
        }
    }

    pub fn move_right(&mut self) {
        let len = self.lines[self.cursor_line].chars().count();
        if self.cursor_col < len {
            self.cursor_col += 1;
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.clamp_col();
        }
    }

    fn clamp_col(&mut self) {
        let len = self.lines[self.cursor_line].chars().count();
        self.cursor_col = self.cursor_col.min(len);
    }
}

/// Byte offset of a char column, for multi-byte safe editing.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(draft: &mut Draft, text: &str) {
        for ch in text.chars() {
            draft.insert_char(ch);
        }
    }

    #[test]
    fn starts_empty() {
        let draft = Draft::default();
        assert!(draft.is_empty());
        assert_eq!(draft.cursor(), (0, 0));
    }

    #[test]
    fn typing_and_text() {
        let mut draft = Draft::default();
        type_str(&mut draft, "ab");
        draft.newline();
        type_str(&mut draft, "c");
        assert_eq!(draft.text(), "ab\nc");
        assert_eq!(draft.cursor(), (1, 1));
    }

    #[test]
    fn backspace_joins_lines() {
        let mut draft = Draft::default();
        type_str(&mut draft, "ab");
        draft.newline();
        type_str(&mut draft, "cd");
        draft.move_left();
        draft.move_left();
        draft.backspace();
        assert_eq!(draft.text(), "abcd");
        assert_eq!(draft.cursor(), (0, 2));
    }

    #[test]
    fn newline_splits_at_cursor() {
        let mut draft = Draft::default();
        type_str(&mut draft, "abcd");
        draft.move_left();
        draft.move_left();
        draft.newline();
        assert_eq!(draft.text(), "ab\ncd");
        assert_eq!(draft.cursor(), (1, 0));
    }

    #[test]
    fn multibyte_chars_edit_cleanly() {
        let mut draft = Draft::default();
        type_str(&mut draft, "aé");
        draft.backspace();
        assert_eq!(draft.text(), "a");
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut draft = Draft::default();
        type_str(&mut draft, "a");
        draft.newline();
        type_str(&mut draft, "long line");
        draft.move_up();
        assert_eq!(draft.cursor(), (0, 1));
    }
}
