use super::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    FocusPathBar,
    FocusSearch,
    Refresh,
    Delete,
    Rename,
    NewFolder,
    Copy,
    Cut,
    Paste,
    Parent,
    ToggleHidden,
}

/// Chords in gpui keystroke syntax.
pub const BINDINGS: &[(&str, Shortcut)] = &[
    ("ctrl-l", Shortcut::FocusPathBar),
    ("ctrl-f", Shortcut::FocusSearch),
    ("f5", Shortcut::Refresh),
    ("delete", Shortcut::Delete),
    ("f2", Shortcut::Rename),
    ("ctrl-n", Shortcut::NewFolder),
    ("ctrl-c", Shortcut::Copy),
    ("ctrl-x", Shortcut::Cut),
    ("ctrl-v", Shortcut::Paste),
    ("alt-up", Shortcut::Parent),
    ("ctrl-h", Shortcut::ToggleHidden),
];

impl Shortcut {
    pub fn command(self) -> Command {
        match self {
            Shortcut::FocusPathBar => Command::FocusPathBar,
            Shortcut::FocusSearch => Command::FocusSearch,
            Shortcut::Refresh => Command::Refresh,
            Shortcut::Delete => Command::RequestDelete,
            Shortcut::Rename => Command::PromptRename,
            Shortcut::NewFolder => Command::PromptNewFolder,
            Shortcut::Copy => Command::Copy,
            Shortcut::Cut => Command::Cut,
            Shortcut::Paste => Command::Paste,
            Shortcut::Parent => Command::NavigateParent,
            Shortcut::ToggleHidden => Command::ToggleHidden,
        }
    }

    /// Chords a focused text field should keep for itself.
    pub fn edits_text(self) -> bool {
        matches!(
            self,
            Shortcut::Copy | Shortcut::Cut | Shortcut::Paste | Shortcut::Delete | Shortcut::ToggleHidden
        )
    }
}

/// Resolves a key press. The platform key (cmd on macOS) counts as ctrl.
pub fn lookup(key: &str, ctrl: bool, alt: bool, platform: bool) -> Option<Shortcut> {
    let mut chord = String::new();
    if ctrl || platform {
        chord.push_str("ctrl-");
    }
    if alt {
        chord.push_str("alt-");
    }
    chord.push_str(&key.to_lowercase());
    BINDINGS
        .iter()
        .find(|(binding, _)| *binding == chord)
        .map(|(_, shortcut)| *shortcut)
}
