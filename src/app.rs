// src/app.rs - Composition root: services, panes, focus and the event queue

use anyhow::Context;
use crossterm::event::KeyEvent;
use log::{debug, info};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::command_panel::CommandPanel;
use crate::config::QuillConfig;
use crate::dir_tree::DirTree;
use crate::editor::Editor;
use crate::event::AppEvent;
use crate::keymap::key_to_command;
use crate::mode::Focus;
use crate::services::{FileEntry, FileService, GitService, StatusMap};
use crate::syntax::resolve_theme;

pub const APP_NAME: &str = "quill";

/// Everything gathered from disk and git before the first frame
struct Startup {
    files: FileService,
    entries: Vec<FileEntry>,
    git: GitService,
    statuses: StatusMap,
    branch: String,
}

pub struct App {
    pub base_path: PathBuf,
    files: FileService,
    git: GitService,
    pub editor: Editor,
    pub dir_tree: DirTree,
    pub command_panel: CommandPanel,
    pub focus: Focus,
    /// Focus to return to when the search panel closes
    previous_focus: Focus,
    pending: VecDeque<AppEvent>,
    /// Path shown under the app name; set on every open
    pub sub_title: Option<String>,
    /// Most recent status message
    pub last_status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the app, running the project walk and the git queries on the blocking pool
    pub async fn bootstrap(base_path: PathBuf, config: &QuillConfig) -> anyhow::Result<Self> {
        let walk_root = base_path.clone();
        let walk = tokio::task::spawn_blocking(move || {
            let files = FileService::new();
            let entries = files.list_project_files(&walk_root);
            (files, entries)
        });

        let git_root = base_path.clone();
        let repo = tokio::task::spawn_blocking(move || {
            let git = GitService::new(&git_root);
            let statuses = git.file_statuses();
            let branch = git.current_branch();
            (git, statuses, branch)
        });

        let ((files, entries), (git, statuses, branch)) =
            tokio::try_join!(walk, repo).context("Startup scan failed")?;

        Ok(Self::assemble(
            base_path,
            config,
            Startup {
                files,
                entries,
                git,
                statuses,
                branch,
            },
        ))
    }

    /// Build the app on the calling thread
    pub fn new(base_path: PathBuf, config: &QuillConfig) -> Self {
        let files = FileService::new();
        let entries = files.list_project_files(&base_path);
        let git = GitService::new(&base_path);
        let statuses = git.file_statuses();
        let branch = git.current_branch();

        Self::assemble(
            base_path,
            config,
            Startup {
                files,
                entries,
                git,
                statuses,
                branch,
            },
        )
    }

    fn assemble(base_path: PathBuf, config: &QuillConfig, startup: Startup) -> Self {
        info!(
            "Opened {} ({} files, branch {})",
            base_path.display(),
            startup.entries.len(),
            startup.branch
        );

        let dir_tree = DirTree::new(&base_path, startup.statuses.clone());
        let command_panel = CommandPanel::new(
            startup.entries,
            startup.statuses,
            &startup.branch,
            config.search_limit,
        );
        let editor = Editor::new(resolve_theme(&config.syntax_theme));

        let mut app = Self {
            base_path,
            files: startup.files,
            git: startup.git,
            editor,
            dir_tree,
            command_panel,
            focus: Focus::Tree,
            previous_focus: Focus::Tree,
            pending: VecDeque::new(),
            sub_title: None,
            last_status: None,
            should_quit: false,
        };

        let mounted = app.command_panel.mount_event();
        app.post(mounted);
        app.dispatch_pending();
        app
    }

    pub fn files(&self) -> &FileService {
        &self.files
    }

    pub fn git(&self) -> &GitService {
        &self.git
    }

    /// Title bar text: app name, open file and a modified marker
    pub fn title(&self) -> String {
        let mut title = APP_NAME.to_string();
        if let Some(sub_title) = &self.sub_title {
            title.push_str(" - ");
            title.push_str(sub_title);
        }
        if self.editor.buffer.modified {
            title.push_str(" [+]");
        }
        title
    }

    /// Route a key press and drain any events it produced
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if let Some(cmd) = key_to_command(key_event, self.focus) {
            self.execute(cmd);
        }
        self.dispatch_pending();
    }

    pub fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.should_quit = true,
            Command::SaveFile => self.save(),
            Command::ActivateSearch => self.activate_search(),
            Command::CancelSearch => self.cancel_search(),
            Command::CycleFocus => self.focus = self.focus.next(),
            cmd => match self.focus {
                Focus::Tree => self.execute_tree(cmd),
                Focus::Editor => self.editor.execute_command(&cmd),
                Focus::Search => self.execute_search(cmd),
            },
        }
    }

    fn execute_tree(&mut self, cmd: Command) {
        match cmd {
            Command::SelectPrev => self.dir_tree.select_prev(),
            Command::SelectNext => self.dir_tree.select_next(),
            Command::Expand => self.dir_tree.expand_selected(),
            Command::Collapse => self.dir_tree.collapse_selected(),
            Command::Activate => {
                if let Some(event) = self.dir_tree.activate() {
                    self.post(event);
                }
            }
            _ => {}
        }
    }

    fn execute_search(&mut self, cmd: Command) {
        match cmd {
            Command::InsertChar(c) => self.command_panel.push_char(&self.files, c),
            Command::DeleteBackward => self.command_panel.pop_char(&self.files),
            Command::SelectPrev => self.command_panel.select_prev(),
            Command::SelectNext => self.command_panel.select_next(),
            Command::Activate => {
                if let Some(event) = self.command_panel.select() {
                    self.focus = self.previous_focus;
                    self.post(event);
                }
            }
            _ => {}
        }
    }

    pub fn activate_search(&mut self) {
        if self.command_panel.activate_search() {
            self.previous_focus = self.focus;
            self.focus = Focus::Search;
        }
    }

    pub fn cancel_search(&mut self) {
        if self.command_panel.cancel_search() {
            self.focus = self.previous_focus;
        }
    }

    /// Write the editor text to the current path and report the outcome as a status message
    pub fn save(&mut self) {
        let Some(path) = self.editor.current_path.clone() else {
            debug!("Save requested with no file open");
            return;
        };
        let name = display_name(&path);

        let event = match self.files.write_file(&path, &self.editor.text()) {
            Ok(()) => {
                self.editor.buffer.modified = false;
                info!("Saved {}", path.display());
                AppEvent::status(format!("Saved: {}", name))
            }
            Err(_) => AppEvent::status(format!("Error saving: {}", name)),
        };
        self.post(event);
    }

    pub fn post(&mut self, event: AppEvent) {
        self.pending.push_back(event);
    }

    /// Handle queued events in order, including any posted while handling
    pub fn dispatch_pending(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::OpenFile { path } => {
                self.editor.load_file(&self.files, &path);
                self.dir_tree.select_path(&path);
                self.sub_title = Some(path.display().to_string());
                self.post(AppEvent::status(format!("Opened: {}", display_name(&path))));
            }
            AppEvent::UpdateStatus { text } => {
                info!("Status: {}", text);
                // TODO: render last_status in the key bar once it has a message slot
                self.last_status = Some(text);
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
