// ui/widgets/title_bar.rs - Top line with the app name and the open file

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::ui::theme::Theme;

pub struct TitleBar<'a> {
    pub title: String,
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: String, theme: &'a Theme) -> Self {
        Self { title, theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.ui.title_bar_bg)
            .fg(self.theme.ui.title_bar_fg);
        buf.set_style(area, style);

        // Centered, falling back to left aligned when the title is wider than the bar
        let width = self.title.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let line = Line::from(self.title).style(style);
        buf.set_line(x, area.y, &line, area.width.saturating_sub(x - area.x));
    }
}
