// ui/theme.rs - Colors for the panes and bars

use ratatui::style::{Color, Modifier, Style};
use syntect::highlighting::{FontStyle, Style as SyntectStyle, Theme as SyntectTheme};

use crate::services::FileStatus;

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub title_bar_bg: Color,
    pub title_bar_fg: Color,
    pub key_bar_bg: Color,
    pub key_bar_fg: Color,
    pub key_fg: Color,
    pub status_fg: Color,
    pub border_fg: Color,
    pub border_focused_fg: Color,
    pub gutter_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub directory_fg: Color,
    pub dim_fg: Color,
    pub git_untracked: Color,
    pub git_changed: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::Rgb(248, 248, 242), // Light gray for better contrast
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            title_bar_bg: Color::Blue,
            title_bar_fg: Color::White,
            key_bar_bg: Color::DarkGray,
            key_bar_fg: Color::White,
            key_fg: Color::Yellow,
            status_fg: Color::Cyan,
            border_fg: Color::DarkGray,
            border_focused_fg: Color::Cyan,
            gutter_fg: Color::DarkGray,
            selection_bg: Color::Rgb(68, 71, 90),
            selection_fg: Color::White,
            directory_fg: Color::Rgb(139, 233, 253),
            dim_fg: Color::Gray,
            git_untracked: Color::Green,
            git_changed: Color::Yellow,
        }
    }
}

impl Theme {
    /// Take the editor background and foreground from the syntax theme when it defines them
    pub fn with_syntax_theme(mut self, syntax_theme: Option<&SyntectTheme>) -> Self {
        if let Some(settings) = syntax_theme.map(|t| &t.settings) {
            if let Some(bg) = settings.background {
                self.general.background = Color::Rgb(bg.r, bg.g, bg.b);
            }
            if let Some(fg) = settings.foreground {
                self.general.foreground = Color::Rgb(fg.r, fg.g, fg.b);
            }
        }
        self
    }

    /// Tag color for a git status: untracked in one color, every other status in another
    pub fn git_status_color(&self, status: FileStatus) -> Color {
        match status {
            FileStatus::Untracked => self.ui.git_untracked,
            _ => self.ui.git_changed,
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let fg = if focused {
            self.ui.border_focused_fg
        } else {
            self.ui.border_fg
        };
        Style::default().fg(fg)
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.ui.selection_bg)
            .fg(self.ui.selection_fg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Convert a highlighted span style to a terminal style. The background stays with the pane.
pub fn syntect_to_ratatui(style: SyntectStyle) -> Style {
    let fg = style.foreground;
    let mut result = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        result = result.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        result = result.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        result = result.add_modifier(Modifier::UNDERLINED);
    }
    result
}
