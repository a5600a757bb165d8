// ui/widgets/dir_tree.rs - Sidebar listing the project tree with git status tags

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::dir_tree::{DirTree, TreeRow};
use crate::ui::theme::Theme;

pub struct DirTreeWidget<'a> {
    pub tree: &'a DirTree,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl<'a> DirTreeWidget<'a> {
    pub fn new(tree: &'a DirTree, theme: &'a Theme, focused: bool) -> Self {
        Self {
            tree,
            theme,
            focused,
        }
    }

    fn row_line(&self, row: &TreeRow, selected: bool) -> Line<'static> {
        let marker = match (row.is_dir, row.expanded) {
            (true, true) => "▾ ",
            (true, false) => "▸ ",
            (false, _) => "  ",
        };
        let name_fg = if row.is_dir {
            self.theme.ui.directory_fg
        } else {
            self.theme.general.foreground
        };

        let mut spans = vec![
            Span::raw("  ".repeat(row.depth)),
            Span::raw(marker),
            Span::styled(row.name.clone(), Style::default().fg(name_fg)),
        ];
        if let Some(status) = row.status {
            spans.push(Span::styled(
                format!(" {}", status.code()),
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
}

impl Widget for DirTreeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(self.theme.border_style(self.focused))
            .style(Style::default().bg(self.theme.general.background));

        let height = block.inner(area).height as usize;
        let lines: Vec<Line> = self
            .tree
            .rows()
            .iter()
            .enumerate()
            .skip(self.tree.scroll_offset)
            .take(height)
            .map(|(idx, row)| self.row_line(row, self.focused && idx == self.tree.selected))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
