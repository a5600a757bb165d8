pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Scroll the least amount needed to bring the cursor on screen
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) {
        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + self.rows {
            self.offset_line = cursor_line + 1 - self.rows;
        }

        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if cursor_col >= self.offset_col + self.cols {
            self.offset_col = cursor_col + 1 - self.cols;
        }
    }

    /// Last buffer line that fits on screen
    pub fn last_visible_line(&self) -> usize {
        self.offset_line + self.rows - 1
    }
}
