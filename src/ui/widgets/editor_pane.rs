// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::{Theme, syntect_to_ratatui};

/// Editor pane widget that renders the text editor content
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    fn plain_style(&self) -> Style {
        Style::default()
            .fg(self.theme.general.foreground)
            .bg(self.theme.general.background)
    }

    /// Spans for one line, with the first `offset_col` characters scrolled away
    fn line_spans(&self, line_idx: usize, line: String) -> Vec<Span<'static>> {
        let offset_col = self.editor.viewport.offset_col;
        let background = self.theme.general.background;

        let Some(highlighted) = self.editor.highlighted_line(line_idx) else {
            let visible: String = line.chars().skip(offset_col).collect();
            return vec![Span::styled(visible, self.plain_style())];
        };

        let mut skip = offset_col;
        let mut spans = Vec::with_capacity(highlighted.len());
        for (style, piece) in highlighted {
            let len = piece.chars().count();
            if skip >= len {
                skip -= len;
                continue;
            }
            let visible: String = piece.chars().skip(skip).collect();
            skip = 0;
            spans.push(Span::styled(
                visible,
                syntect_to_ratatui(*style).bg(background),
            ));
        }
        spans
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear entire editor area to prevent character artifacts during file switching
        buf.set_style(area, self.plain_style());
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_char(' ');
            }
        }

        for i in 0..area.height as usize {
            let line_idx = self.editor.viewport.offset_line + i;
            let line_widget = match self.editor.buffer.line(line_idx) {
                Some(line) => Line::from(self.line_spans(line_idx, line)),
                None => Line::from(Span::styled(
                    "~",
                    Style::default()
                        .fg(self.theme.ui.gutter_fg)
                        .bg(self.theme.general.background),
                )),
            };
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
