// ui/widgets/command_panel.rs - Status line, or search input with ranked results

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::command_panel::{CommandPanel, PanelMode};
use crate::services::SearchResult;
use crate::ui::theme::Theme;

pub struct CommandPanelWidget<'a> {
    pub panel: &'a CommandPanel,
    pub theme: &'a Theme,
}

impl<'a> CommandPanelWidget<'a> {
    pub fn new(panel: &'a CommandPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }

    /// Rows the panel wants: a bordered status line, or input plus one row per result
    pub fn desired_height(panel: &CommandPanel) -> u16 {
        match panel.mode() {
            PanelMode::Status => 2,
            PanelMode::Search => 2 + panel.results().len().max(1) as u16,
        }
    }

    fn result_line(&self, result: &SearchResult, selected: bool) -> Line<'static> {
        let entry = &result.entry;
        let mut spans = vec![
            Span::styled(
                entry.name.clone(),
                Style::default().fg(self.theme.general.foreground),
            ),
            Span::styled(
                format!("  {}", entry.parent.display()),
                Style::default().fg(self.theme.ui.dim_fg),
            ),
        ];
        if let Some(status) = self.panel.status_for(&entry.path) {
            spans.push(Span::styled(
                format!(" ({})", status.code()),
                Style::default().fg(self.theme.git_status_color(status)),
            ));
        }

        let line = Line::from(spans);
        if selected {
            line.style(self.theme.selection_style())
        } else {
            line
        }
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let input = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.ui.key_fg)),
            Span::styled(
                self.panel.query().to_string(),
                Style::default().fg(self.theme.general.foreground),
            ),
        ]);
        Paragraph::new(input).render(chunks[0], buf);

        let results = self.panel.results();
        let lines: Vec<Line> = if results.is_empty() && !self.panel.query().is_empty() {
            vec![Line::from(Span::styled(
                "No matching files",
                Style::default().fg(self.theme.ui.dim_fg),
            ))]
        } else {
            results
                .iter()
                .enumerate()
                .map(|(idx, result)| self.result_line(result, idx == self.panel.selected))
                .collect()
        };
        Paragraph::new(lines).render(chunks[1], buf);
    }
}

impl Widget for CommandPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let search = self.panel.mode() == PanelMode::Search;
        let mut block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border_style(search))
            .style(Style::default().bg(self.theme.general.background));
        if search {
            block = block.title(format!(" Search ({} files) ", self.panel.file_count()));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if search {
            self.render_search(inner, buf);
        } else {
            let status = Line::from(Span::styled(
                self.panel.status_text().to_string(),
                Style::default().fg(self.theme.ui.status_fg),
            ));
            Paragraph::new(status).render(inner, buf);
        }
    }
}

/// Terminal position of the search input caret, if the panel is searching
pub fn search_cursor(panel: &CommandPanel, area: Rect) -> Option<(u16, u16)> {
    if panel.mode() != PanelMode::Search || area.height < 2 {
        return None;
    }
    let col = 2 + panel.query().chars().count() as u16;
    Some((area.x + col.min(area.width.saturating_sub(1)), area.y + 1))
}
