// event.rs - Messages passed from widgets to the app

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Load the file into the editor
    OpenFile { path: PathBuf },
    /// Publish a one-line status message
    UpdateStatus { text: String },
}

impl AppEvent {
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        AppEvent::OpenFile { path: path.into() }
    }

    pub fn status(text: impl Into<String>) -> Self {
        AppEvent::UpdateStatus { text: text.into() }
    }
}
