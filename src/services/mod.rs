// services/mod.rs - Filesystem and git services shared by the widgets

pub mod file;
pub mod git;

pub use file::{FileEntry, FileError, FileService, SearchResult};
pub use git::{FileStatus, GitService, StatusMap};
