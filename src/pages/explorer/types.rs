use gpui::{Pixels, Point};
use std::path::PathBuf;

/// The modal currently covering the page.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Error { title: String, message: String },
    ConfirmDelete(PathBuf),
    ConfirmOverwrite(Vec<PathBuf>),
    NewFolder,
    Rename(PathBuf),
}

impl Dialog {
    pub fn title(&self) -> String {
        match self {
            Dialog::Error { title, .. } => title.clone(),
            Dialog::ConfirmDelete(_) => "Delete".to_string(),
            Dialog::ConfirmOverwrite(_) => "Overwrite files".to_string(),
            Dialog::NewFolder => "New folder".to_string(),
            Dialog::Rename(_) => "Rename".to_string(),
        }
    }

    /// Whether the dialog takes text through the shared dialog input.
    pub fn takes_text(&self) -> bool {
        matches!(self, Dialog::NewFolder | Dialog::Rename(_))
    }
}

#[derive(Clone, Copy)]
pub struct ContextMenu {
    pub position: Point<Pixels>,
}
