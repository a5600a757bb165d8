// src/command_panel.rs - Bottom panel: status line or fuzzy file search

use log::debug;
use std::path::Path;

use crate::event::AppEvent;
use crate::services::{FileEntry, FileService, FileStatus, SearchResult, StatusMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Status,
    Search,
}

pub struct CommandPanel {
    mode: PanelMode,
    /// Loaded once at startup; the project is not rescanned while searching
    files: Vec<FileEntry>,
    statuses: StatusMap,
    status_text: String,
    query: String,
    results: Vec<SearchResult>,
    pub selected: usize,
    limit: usize,
}

impl CommandPanel {
    pub fn new(files: Vec<FileEntry>, statuses: StatusMap, branch: &str, limit: usize) -> Self {
        Self {
            mode: PanelMode::Status,
            files,
            statuses,
            status_text: format!("Branch: {}", branch),
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            limit,
        }
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn status_for(&self, path: &Path) -> Option<FileStatus> {
        self.statuses.get(path).copied()
    }

    /// The status message published once when the panel is mounted
    pub fn mount_event(&self) -> AppEvent {
        AppEvent::status(self.status_text.clone())
    }

    /// Switch display mode. Returns false when already in `target`.
    ///
    /// Leaving search mode drops the query and the result list.
    pub fn transition(&mut self, target: PanelMode) -> bool {
        if self.mode == target {
            return false;
        }
        if self.mode == PanelMode::Search {
            self.query.clear();
            self.results.clear();
            self.selected = 0;
        }
        debug!("Command panel {:?} -> {:?}", self.mode, target);
        self.mode = target;
        true
    }

    pub fn activate_search(&mut self) -> bool {
        self.transition(PanelMode::Search)
    }

    pub fn cancel_search(&mut self) -> bool {
        self.transition(PanelMode::Status)
    }

    pub fn push_char(&mut self, service: &FileService, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(service, query);
    }

    pub fn pop_char(&mut self, service: &FileService) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(service, query);
    }

    /// Replace the query and rerun the search. Ignored outside search mode.
    pub fn set_query(&mut self, service: &FileService, query: impl Into<String>) {
        if self.mode != PanelMode::Search {
            return;
        }
        self.query = query.into();
        self.results = service.fuzzy_search(&self.query, &self.files, self.limit);
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Pick the highlighted result: returns the open request and goes back to status mode
    pub fn select(&mut self) -> Option<AppEvent> {
        if self.mode != PanelMode::Search {
            return None;
        }
        let path = self.results.get(self.selected)?.entry.path.clone();
        self.transition(PanelMode::Status);
        Some(AppEvent::open_file(path))
    }
}
