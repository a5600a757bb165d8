// ui/widgets/key_bar.rs - Bottom line listing the global bindings

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::mode::Focus;
use crate::ui::theme::Theme;

const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("^Q", "Quit"),
    ("^S", "Save"),
    ("^P", "Search"),
    ("Esc", "Cancel"),
];

pub struct KeyBar<'a> {
    pub focus: Focus,
    pub theme: &'a Theme,
}

impl<'a> KeyBar<'a> {
    pub fn new(focus: Focus, theme: &'a Theme) -> Self {
        Self { focus, theme }
    }

    fn bindings(&self) -> Vec<(&'static str, &'static str)> {
        let mut keys = GLOBAL_KEYS.to_vec();
        match self.focus {
            Focus::Tree => {
                keys.push(("Tab", "Editor"));
                keys.push(("q", "Quit"));
            }
            Focus::Editor => keys.push(("Tab", "Files")),
            Focus::Search => keys.push(("Enter", "Open")),
        }
        keys
    }
}

impl Widget for KeyBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = Style::default()
            .bg(self.theme.ui.key_bar_bg)
            .fg(self.theme.ui.key_bar_fg);
        buf.set_style(area, bar);

        let mut spans = Vec::new();
        for (key, label) in self.bindings() {
            spans.push(Span::styled(
                format!(" {} ", key),
                bar.fg(self.theme.ui.key_fg),
            ));
            spans.push(Span::styled(format!("{} ", label), bar));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
