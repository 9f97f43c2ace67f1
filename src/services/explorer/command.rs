use super::state::AppState;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(PathBuf),
    NavigateParent,
    Refresh,
    SetQuery(String),
    ToggleHidden,
    Select(Option<PathBuf>),
    ExpandNode(PathBuf),
    CollapseNode(PathBuf),
    /// Directory: navigate into it. File: hand it to the system launcher.
    Open(PathBuf),
    OpenSelected,
    PromptNewFolder,
    NewFolder(String),
    PromptRename,
    Rename(String),
    RequestDelete,
    Delete { confirmed: bool },
    Copy,
    Cut,
    Paste,
    /// Paste after the user accepted the listed overwrites.
    PasteConfirmed,
    FocusPathBar,
    FocusSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PathBar,
    Search,
}

/// Something the UI has to carry out after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowError { title: String, message: String },
    ConfirmDelete(PathBuf),
    ConfirmOverwrite(Vec<PathBuf>),
    PromptNewFolder { initial: String },
    PromptRename { path: PathBuf, initial: String },
    Focus(Field),
    Opened(PathBuf),
    TreeChanged,
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn error_message(&self) -> Option<&str> {
        self.effects.iter().find_map(|e| match e {
            Effect::ShowError { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }
}
