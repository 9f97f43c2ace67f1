use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Dir,
    File,
}

/// A row of the file listing. Display fields are derived once, when the
/// directory is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: FileKind,
    /// `DIR`, uppercased extension, or `FILE`.
    pub type_label: String,
    /// Empty for directories and when stat failed.
    pub size: String,
    /// Empty when stat failed.
    pub modified: String,
}

impl FileEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
