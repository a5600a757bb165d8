// ui/renderer.rs - Ratatui-based renderer for the editor shell

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::Stdout;

use crate::app::App;
use crate::mode::Focus;
use crate::ui::theme::Theme;
use crate::ui::widgets::command_panel::{CommandPanelWidget, search_cursor};
use crate::ui::widgets::dir_tree::DirTreeWidget;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::{GUTTER_WIDTH, Gutter};
use crate::ui::widgets::key_bar::KeyBar;
use crate::ui::widgets::title_bar::TitleBar;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub title: Rect,
    pub tree: Rect,
    pub gutter: Rect,
    pub editor: Rect,
    pub panel: Rect,
    pub key_bar: Rect,
}

impl FrameLayout {
    pub fn new(area: Rect, tree_width: u16, panel_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(1),    // Tree and editor
                Constraint::Length(1), // Key bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(tree_width), Constraint::Min(1)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(panel_height)])
            .split(columns[1]);

        let editor = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(1)])
            .split(right[0]);

        Self {
            title: rows[0],
            tree: columns[0],
            gutter: editor[0],
            editor: editor[1],
            panel: right[1],
            key_bar: rows[2],
        }
    }
}

/// Ratatui-based renderer for the editor shell
pub struct TuiRenderer<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    theme: Theme,
    tree_width: u16,
}

impl TuiRenderer {
    /// Create a renderer drawing to stdout
    pub fn new(theme: Theme, tree_width: u16) -> std::io::Result<Self> {
        Self::with_backend(CrosstermBackend::new(std::io::stdout()), theme, tree_width)
    }
}

impl<B: Backend> TuiRenderer<B> {
    pub fn with_backend(backend: B, theme: Theme, tree_width: u16) -> std::io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            theme,
            tree_width,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Draw the whole screen
    pub fn draw(&mut self, app: &mut App) -> std::io::Result<()> {
        let theme = &self.theme;
        let tree_width = self.tree_width;

        self.terminal.draw(|f| {
            let panel_height = CommandPanelWidget::desired_height(&app.command_panel);
            let layout = FrameLayout::new(f.size(), tree_width, panel_height);

            app.editor
                .handle_resize(layout.editor.height, layout.editor.width);
            app.editor.prepare_highlights();
            app.dir_tree
                .scroll_to_selected(layout.tree.height as usize);

            f.render_widget(TitleBar::new(app.title(), theme), layout.title);
            f.render_widget(
                DirTreeWidget::new(&app.dir_tree, theme, app.focus == Focus::Tree),
                layout.tree,
            );
            f.render_widget(Gutter::new(&app.editor, theme), layout.gutter);
            f.render_widget(EditorPane::new(&app.editor, theme), layout.editor);
            f.render_widget(
                CommandPanelWidget::new(&app.command_panel, theme),
                layout.panel,
            );
            f.render_widget(KeyBar::new(app.focus, theme), layout.key_bar);

            match app.focus {
                Focus::Editor => {
                    let row = app
                        .editor
                        .cursor
                        .line
                        .saturating_sub(app.editor.viewport.offset_line)
                        as u16;
                    let col = app
                        .editor
                        .cursor
                        .col
                        .saturating_sub(app.editor.viewport.offset_col)
                        as u16;
                    if row < layout.editor.height && col < layout.editor.width {
                        f.set_cursor(layout.editor.x + col, layout.editor.y + row);
                    }
                }
                Focus::Search => {
                    if let Some((x, y)) = search_cursor(&app.command_panel, layout.panel) {
                        f.set_cursor(x, y);
                    }
                }
                Focus::Tree => {}
            }
        })?;
        Ok(())
    }
}
