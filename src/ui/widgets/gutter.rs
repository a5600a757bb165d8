// ui/widgets/gutter.rs - Gutter widget for line numbers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::Theme;

pub const GUTTER_WIDTH: u16 = 5;

/// Gutter widget that shows line numbers
pub struct Gutter<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.theme.ui.gutter_fg)
            .bg(self.theme.general.background);

        for i in 0..area.height as usize {
            let line_idx = self.editor.viewport.offset_line + i;
            let text = if line_idx < self.editor.buffer.line_count() {
                format!("{:>4} ", line_idx + 1)
            } else {
                " ".repeat(GUTTER_WIDTH as usize)
            };

            let line_widget = Line::from(Span::styled(text, style));
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
