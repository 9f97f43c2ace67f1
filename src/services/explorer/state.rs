use crate::models::clipboard::Clipboard;
use crate::models::file_entry::FileEntry;
use crate::services::fs::tree::DirTree;
use std::path::{Path, PathBuf};

/// Everything the browser remembers between two user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Canonical and always a directory.
    pub cwd: PathBuf,
    pub show_hidden: bool,
    pub query: String,
    /// Current listing with hidden flag and query already applied.
    pub entries: Vec<FileEntry>,
    pub selection: Option<PathBuf>,
    pub clipboard: Clipboard,
    pub tree: DirTree,
    pub status: String,
}

impl AppState {
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        let selected = self.selection.as_deref()?;
        self.entries.iter().find(|e| e.path == selected)
    }

    pub fn entry(&self, path: &Path) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn listing_status(&self) -> String {
        format!("{} | {} items", self.cwd.display(), self.entries.len())
    }
}
