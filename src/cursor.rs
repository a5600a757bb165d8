use crate::buffer::Buffer;

pub struct Cursor {
    pub line: usize,
    pub col: usize,
    /// Column to return to when moving vertically through shorter lines
    pub desired_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            desired_col: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Keep the cursor on an existing line and inside that line's text
    pub fn clamp_to(&mut self, buffer: &Buffer) {
        let max_line = buffer.line_count().saturating_sub(1);
        self.line = self.line.min(max_line);
        self.col = self.col.min(buffer.line_len(self.line));
    }

    /// Move to `line`, landing as close to the desired column as the line allows
    pub fn move_to_line(&mut self, line: usize, buffer: &Buffer) {
        let max_line = buffer.line_count().saturating_sub(1);
        self.line = line.min(max_line);
        self.col = self.desired_col.min(buffer.line_len(self.line));
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new();
        assert_eq!(cursor.line, 0);
        assert_eq!(cursor.col, 0);
        assert_eq!(cursor.desired_col, 0);
    }

    #[test]
    fn test_vertical_move_keeps_desired_col() {
        let buffer = Buffer::from_text("long line\nab\nanother long line");
        let mut cursor = Cursor::new();
        cursor.col = 7;
        cursor.desired_col = 7;

        cursor.move_to_line(1, &buffer);
        assert_eq!(cursor.col, 2);

        cursor.move_to_line(2, &buffer);
        assert_eq!(cursor.col, 7);
    }

    proptest! {
        #[test]
        fn clamp_stays_inside_buffer(line in 0..50usize, col in 0..200usize, lines in 1..20usize) {
            let text = vec!["abc"; lines].join("\n");
            let buffer = Buffer::from_text(&text);
            let mut cursor = Cursor { line, col, desired_col: col };
            cursor.clamp_to(&buffer);

            prop_assert!(cursor.line < buffer.line_count());
            prop_assert!(cursor.col <= buffer.line_len(cursor.line));
        }
    }
}
