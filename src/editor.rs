// src/editor.rs - The editing pane: one loaded document at a time

use log::{info, warn};
use std::path::{Path, PathBuf};
use syntect::highlighting::{Style, Theme};

use crate::buffer::Buffer;
use crate::command::Command;
use crate::cursor::Cursor;
use crate::services::FileService;
use crate::syntax::{HighlightCache, detect_language};
use crate::viewport::Viewport;

pub const WELCOME_TEXT: &str = "# Welcome to quill!\n\n# Select a file to start editing.";

pub struct Editor {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub viewport: Viewport,
    /// Set by the first load and replaced by later ones; saving never touches it
    pub current_path: Option<PathBuf>,
    pub language: Option<String>,
    syntax_theme: Option<&'static Theme>,
    highlight: Option<HighlightCache>,
}

impl Editor {
    pub fn new(syntax_theme: Option<&'static Theme>) -> Self {
        Self {
            buffer: Buffer::from_text(WELCOME_TEXT),
            cursor: Cursor::new(),
            viewport: Viewport::new(20, 80),
            current_path: None,
            language: None,
            syntax_theme,
            highlight: None,
        }
    }

    /// Replace the document with the content of `path`.
    ///
    /// A read failure does not abort the load: the error message becomes the buffer text
    /// and `path` still becomes the current path.
    pub fn load_file(&mut self, files: &FileService, path: &Path) {
        let content = match files.read_file(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("{}: {}", path.display(), err);
                err.to_string()
            }
        };

        self.buffer.set_text(&content);
        self.cursor.reset();
        self.viewport.offset_line = 0;
        self.viewport.offset_col = 0;
        self.current_path = Some(path.to_path_buf());

        self.language = detect_language(path);
        self.highlight = match (&self.language, self.syntax_theme) {
            (Some(language), Some(theme)) => HighlightCache::new(language, theme),
            _ => None,
        };
        info!(
            "Loaded {} ({})",
            path.display(),
            self.language.as_deref().unwrap_or("no highlighting")
        );
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Apply an editing or movement command. Commands for other panes are ignored.
    pub fn execute_command(&mut self, cmd: &Command) {
        match cmd {
            Command::MoveLeft => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.col = self.buffer.line_len(self.cursor.line);
                }
                self.cursor.desired_col = self.cursor.col;
            }
            Command::MoveRight => {
                if self.cursor.col < self.buffer.line_len(self.cursor.line) {
                    self.cursor.col += 1;
                } else if self.cursor.line + 1 < self.buffer.line_count() {
                    self.cursor.line += 1;
                    self.cursor.col = 0;
                }
                self.cursor.desired_col = self.cursor.col;
            }
            Command::MoveUp => {
                if self.cursor.line > 0 {
                    self.cursor.move_to_line(self.cursor.line - 1, &self.buffer);
                }
            }
            Command::MoveDown => {
                self.cursor.move_to_line(self.cursor.line + 1, &self.buffer);
            }
            Command::LineStart => {
                self.cursor.col = 0;
                self.cursor.desired_col = 0;
            }
            Command::LineEnd => {
                self.cursor.col = self.buffer.line_len(self.cursor.line);
                self.cursor.desired_col = self.cursor.col;
            }
            Command::PageUp => {
                let target = self.cursor.line.saturating_sub(self.viewport.rows);
                self.cursor.move_to_line(target, &self.buffer);
            }
            Command::PageDown => {
                let target = self.cursor.line + self.viewport.rows;
                self.cursor.move_to_line(target, &self.buffer);
            }
            Command::InsertChar(c) => {
                self.buffer.insert_char(*c, self.cursor.line, self.cursor.col);
                self.cursor.col += 1;
                self.cursor.desired_col = self.cursor.col;
            }
            Command::Newline => {
                self.buffer.insert_char('\n', self.cursor.line, self.cursor.col);
                self.cursor.line += 1;
                self.cursor.col = 0;
                self.cursor.desired_col = 0;
            }
            Command::DeleteBackward => {
                if let Some((line, col)) =
                    self.buffer.delete_backward(self.cursor.line, self.cursor.col)
                {
                    self.cursor.line = line;
                    self.cursor.col = col;
                    self.cursor.desired_col = col;
                }
            }
            Command::DeleteForward => {
                self.buffer.delete_forward(self.cursor.line, self.cursor.col);
            }
            _ => return,
        }

        self.cursor.clamp_to(&self.buffer);
        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor.col);
    }

    pub fn handle_resize(&mut self, rows: u16, cols: u16) {
        self.viewport.resize(rows as usize, cols as usize);
        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor.col);
    }

    /// Highlight everything up to the bottom of the viewport before a frame is drawn
    pub fn prepare_highlights(&mut self) {
        if let Some(cache) = &mut self.highlight {
            cache.ensure(&self.buffer, self.viewport.last_visible_line());
        }
    }

    /// Highlighted spans for a line, if highlighting is active and the line has been prepared
    pub fn highlighted_line(&self, line_idx: usize) -> Option<&[(Style, String)]> {
        self.highlight.as_ref()?.line(line_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{DEFAULT_SYNTAX_THEME, resolve_theme};
    use std::fs;
    use tempfile::TempDir;

    fn editor() -> Editor {
        Editor::new(resolve_theme(DEFAULT_SYNTAX_THEME))
    }

    #[test]
    fn test_starts_with_welcome_and_no_path() {
        let editor = editor();
        assert!(editor.current_path.is_none());
        assert_eq!(editor.text(), WELCOME_TEXT);
    }

    #[test]
    fn test_load_sets_path_and_language() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.py");
        fs::write(&path, "print('hi')\n").unwrap();

        let mut editor = editor();
        editor.load_file(&FileService::new(), &path);

        assert_eq!(editor.current_path.as_deref(), Some(path.as_path()));
        assert_eq!(editor.text(), "print('hi')\n");
        assert_eq!(editor.language.as_deref(), Some("Python"));
        assert!(!editor.buffer.modified);
    }

    #[test]
    fn test_load_failure_shows_error_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.rs");

        let mut editor = editor();
        editor.load_file(&FileService::new(), &path);

        assert!(editor.text().starts_with("Error reading file:"));
        assert_eq!(editor.current_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_unknown_extension_disables_highlighting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.zzz");
        fs::write(&path, "abc").unwrap();

        let mut editor = editor();
        editor.load_file(&FileService::new(), &path);
        editor.prepare_highlights();

        assert!(editor.language.is_none());
        assert!(editor.highlighted_line(0).is_none());
    }

    #[test]
    fn test_typing_and_newline() {
        let mut editor = editor();
        editor.buffer.set_text("");
        for c in "ab".chars() {
            editor.execute_command(&Command::InsertChar(c));
        }
        editor.execute_command(&Command::Newline);
        editor.execute_command(&Command::InsertChar('c'));

        assert_eq!(editor.text(), "ab\nc");
        assert_eq!((editor.cursor.line, editor.cursor.col), (1, 1));
        assert!(editor.buffer.modified);
    }

    #[test]
    fn test_backspace_across_lines() {
        let mut editor = editor();
        editor.buffer.set_text("ab\ncd");
        editor.execute_command(&Command::MoveDown);
        editor.execute_command(&Command::DeleteBackward);

        assert_eq!(editor.text(), "abcd");
        assert_eq!((editor.cursor.line, editor.cursor.col), (0, 2));
    }

    #[test]
    fn test_movement_wraps_at_line_edges() {
        let mut editor = editor();
        editor.buffer.set_text("ab\ncd");
        editor.execute_command(&Command::LineEnd);
        editor.execute_command(&Command::MoveRight);
        assert_eq!((editor.cursor.line, editor.cursor.col), (1, 0));

        editor.execute_command(&Command::MoveLeft);
        assert_eq!((editor.cursor.line, editor.cursor.col), (0, 2));
    }

    #[test]
    fn test_non_editor_commands_are_ignored() {
        let mut editor = editor();
        let before = editor.text();
        editor.execute_command(&Command::SaveFile);
        editor.execute_command(&Command::SelectNext);
        assert_eq!(editor.text(), before);
    }
}
