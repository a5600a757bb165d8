use ropey::Rope;

/// Rope-backed text of the open document
pub struct Buffer {
    pub rope: Rope,
    pub modified: bool,
    pub version: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            modified: false,
            version: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            modified: false,
            version: 0,
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Replace the whole content; counts as a fresh load, not an edit
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.modified = false;
        self.version += 1;
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn insert_char(&mut self, ch: char, line: usize, col: usize) {
        let char_idx = self.char_index(line, col);
        self.rope.insert_char(char_idx, ch);
        self.touch();
    }

    pub fn insert_text(&mut self, text: &str, line: usize, col: usize) {
        let char_idx = self.char_index(line, col);
        self.rope.insert(char_idx, text);
        self.touch();
    }

    /// Remove the character before (line, col), joining lines at column 0.
    ///
    /// Returns the new cursor position, or None at the start of the buffer.
    pub fn delete_backward(&mut self, line: usize, col: usize) -> Option<(usize, usize)> {
        let char_idx = self.char_index(line, col);
        if char_idx == 0 {
            return None;
        }
        let new_pos = if col == 0 {
            let prev = line.saturating_sub(1);
            (prev, self.line_len(prev))
        } else {
            (line, col - 1)
        };
        // A CRLF pair is removed as one line break
        let start = if col == 0 && char_idx >= 2 && self.rope.slice(char_idx - 2..char_idx) == "\r\n" {
            char_idx - 2
        } else {
            char_idx - 1
        };
        self.rope.remove(start..char_idx);
        self.touch();
        Some(new_pos)
    }

    /// Remove the character at (line, col), joining with the next line at the end of a line
    pub fn delete_forward(&mut self, line: usize, col: usize) -> bool {
        let char_idx = self.char_index(line, col);
        let len = self.rope.len_chars();
        if char_idx >= len {
            return false;
        }
        let end = if char_idx + 2 <= len && self.rope.slice(char_idx..char_idx + 2) == "\r\n" {
            char_idx + 2
        } else {
            char_idx + 1
        };
        self.rope.remove(char_idx..end);
        self.touch();
        true
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line content without its line break
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx).to_string();
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        }
    }

    /// Number of characters on a line, excluding the line break
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn char_index(&self, line: usize, col: usize) -> usize {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(line) + col.min(self.line_len(line))
    }

    fn touch(&mut self) {
        self.modified = true;
        self.version += 1;
    }
}
