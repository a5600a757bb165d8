// src/dir_tree.rs - Expandable directory tree annotated with git status

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::event::AppEvent;
use crate::services::{FileStatus, StatusMap};

struct TreeNode {
    path: PathBuf,
    name: String,
    is_dir: bool,
    expanded: bool,
    /// None until the directory is expanded for the first time
    children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            is_dir,
            expanded: false,
            children: None,
        }
    }

    fn expand(&mut self) {
        if !self.is_dir {
            return;
        }
        if self.children.is_none() {
            self.children = Some(read_children(&self.path));
        }
        self.expanded = true;
    }
}

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: PathBuf,
    pub name: String,
    pub depth: usize,
    pub is_dir: bool,
    pub expanded: bool,
    pub status: Option<FileStatus>,
}

pub struct DirTree {
    root: TreeNode,
    statuses: StatusMap,
    rows: Vec<TreeRow>,
    pub selected: usize,
    pub scroll_offset: usize,
}

impl DirTree {
    /// Build the tree with the root expanded. `statuses` is captured once and not refreshed.
    pub fn new(root: &Path, statuses: StatusMap) -> Self {
        let mut root = TreeNode::new(root.to_path_buf(), true);
        root.expand();
        let mut tree = Self {
            root,
            statuses,
            rows: Vec::new(),
            selected: 0,
            scroll_offset: 0,
        };
        tree.rebuild_rows();
        tree
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected)
    }

    pub fn status_for(&self, path: &Path) -> Option<FileStatus> {
        self.statuses.get(path).copied()
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection to `path` if it is currently visible
    pub fn select_path(&mut self, path: &Path) -> bool {
        match self.rows.iter().position(|r| r.path == path) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    /// Keep the selected row inside a window of `height` rows
    pub fn scroll_to_selected(&mut self, height: usize) {
        let height = height.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }

    pub fn expand_selected(&mut self) {
        self.set_selected_expanded(true);
    }

    /// Collapse the selected directory, or jump to the parent row of a file or closed directory
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row().cloned() else {
            return;
        };
        if row.is_dir && row.expanded {
            self.set_selected_expanded(false);
            return;
        }
        if let Some(parent) = row.path.parent() {
            self.select_path(parent);
        }
    }

    /// Enter on a row: directories toggle, files ask to be opened
    pub fn activate(&mut self) -> Option<AppEvent> {
        let row = self.selected_row()?.clone();
        if row.is_dir {
            self.set_selected_expanded(!row.expanded);
            None
        } else {
            Some(AppEvent::open_file(row.path))
        }
    }

    fn set_selected_expanded(&mut self, expanded: bool) {
        let Some(path) = self.selected_row().map(|r| r.path.clone()) else {
            return;
        };
        let Some(node) = find_node_mut(&mut self.root, &path) else {
            return;
        };
        if !node.is_dir {
            return;
        }
        if expanded {
            node.expand();
        } else {
            node.expanded = false;
        }
        self.rebuild_rows();
    }

    fn rebuild_rows(&mut self) {
        let mut rows = Vec::new();
        flatten(&self.root, 0, &self.statuses, &mut rows);
        self.rows = rows;
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }
}

fn find_node_mut<'a>(node: &'a mut TreeNode, path: &Path) -> Option<&'a mut TreeNode> {
    if node.path == path {
        return Some(node);
    }
    node.children
        .as_mut()?
        .iter_mut()
        .find(|child| path.starts_with(&child.path))
        .and_then(|child| find_node_mut(child, path))
}

fn flatten(node: &TreeNode, depth: usize, statuses: &StatusMap, rows: &mut Vec<TreeRow>) {
    rows.push(TreeRow {
        path: node.path.clone(),
        name: node.name.clone(),
        depth,
        is_dir: node.is_dir,
        expanded: node.expanded,
        status: statuses.get(&node.path).copied(),
    });
    if node.expanded
        && let Some(children) = &node.children
    {
        for child in children {
            flatten(child, depth + 1, statuses, rows);
        }
    }
}

/// Directory entries, directories first, then by name ignoring case
fn read_children(dir: &Path) -> Vec<TreeNode> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Cannot list {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    let mut children: Vec<TreeNode> = entries
        .flatten()
        .map(|entry| {
            let path = entry.path();
            let is_dir = path.is_dir();
            TreeNode::new(path, is_dir)
        })
        .collect();

    children.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    children
}
