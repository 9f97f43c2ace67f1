//! Command handling for the browser window.
//!
//! [`Explorer::handle`] takes the current [`AppState`] and a [`Command`] and
//! returns the next state together with the [`Effect`]s the UI has to carry
//! out. A failing command returns the previous state untouched plus a
//! [`Effect::ShowError`].

pub mod command;
pub mod keymap;
pub mod state;

pub use command::{Command, Effect, Field, Transition};
pub use state::AppState;

use crate::core::config::{ConflictPolicy, ExplorerConfig};
use crate::core::errors::{Error, Result};
use crate::models::clipboard::{ClipOp, Clipboard};
use crate::services::fs::backend::FsBackend;
use crate::services::fs::launcher::Launcher;
use crate::services::fs::listing::{list_dir, ListParams};
use crate::services::fs::ops;
use crate::services::fs::tree::DirTree;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const APP_TITLE: &str = "PaddlMs Explorer";
pub const NEW_FOLDER_NAME: &str = "new_folder";

pub struct Explorer<F, L> {
    fs: F,
    launcher: L,
    config: ExplorerConfig,
}

impl<F: FsBackend, L: Launcher> Explorer<F, L> {
    pub fn new(fs: F, launcher: L, config: ExplorerConfig) -> Self {
        Self {
            fs,
            launcher,
            config,
        }
    }

    /// State for a fresh window browsing the configured start directory.
    pub fn initial_state(&self, roots: Vec<PathBuf>) -> Result<AppState> {
        let cwd = self.resolve_dir(&self.config.start_dir)?;
        let mut state = AppState {
            cwd,
            show_hidden: self.config.show_hidden,
            query: String::new(),
            entries: Vec::new(),
            selection: None,
            clipboard: Clipboard::default(),
            tree: DirTree::new(roots),
            status: String::new(),
        };
        state = self.relist(state)?;
        state.tree.reveal(&self.fs, &state.cwd, state.show_hidden);
        Ok(state)
    }

    pub fn handle(&self, state: &AppState, command: Command) -> Transition {
        match self.apply(state, command) {
            Ok(transition) => transition,
            Err(e) => {
                warn!(error = %e, "command failed");
                Transition::new(state.clone()).with(Effect::ShowError {
                    title: APP_TITLE.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    fn apply(&self, state: &AppState, command: Command) -> Result<Transition> {
        let mut next = state.clone();
        match command {
            Command::Navigate(path) => self.navigate(next, &path),
            Command::NavigateParent => match state.cwd.parent() {
                Some(parent) => self.navigate(next, parent),
                None => Ok(Transition::new(next)),
            },
            Command::Refresh => Ok(Transition::new(self.relist(next)?)),
            Command::SetQuery(query) => {
                next.query = query;
                Ok(Transition::new(self.relist(next)?))
            }
            Command::ToggleHidden => {
                next.show_hidden = !next.show_hidden;
                next = self.relist(next)?;
                next.tree.reload(&self.fs, next.show_hidden);
                Ok(Transition::new(next).with(Effect::TreeChanged))
            }
            Command::Select(path) => {
                next.selection = path;
                Ok(Transition::new(next))
            }
            Command::ExpandNode(path) => {
                next.tree.expand(&self.fs, &path, next.show_hidden);
                Ok(Transition::new(next).with(Effect::TreeChanged))
            }
            Command::CollapseNode(path) => {
                next.tree.collapse(&path);
                Ok(Transition::new(next).with(Effect::TreeChanged))
            }
            Command::Open(path) => self.open(next, &path),
            Command::OpenSelected => match state.selection.clone() {
                Some(path) => self.open(next, &path),
                None => Ok(Transition::new(next)),
            },
            Command::PromptNewFolder => Ok(Transition::new(next).with(Effect::PromptNewFolder {
                initial: NEW_FOLDER_NAME.to_string(),
            })),
            Command::NewFolder(name) => {
                if name.trim().is_empty() {
                    return Ok(Transition::new(next));
                }
                let created = ops::create_dir(&self.fs, &next.cwd, &name)?;
                next.selection = Some(created);
                self.after_change(next)
            }
            Command::PromptRename => match state.selected_entry() {
                Some(entry) => Ok(Transition::new(next).with(Effect::PromptRename {
                    path: entry.path.clone(),
                    initial: entry.name.clone(),
                })),
                None => Ok(Transition::new(next)),
            },
            Command::Rename(new_name) => {
                let Some(path) = state.selection.clone() else {
                    return Ok(Transition::new(next));
                };
                if new_name.is_empty() {
                    return Ok(Transition::new(next));
                }
                match ops::rename(&self.fs, &path, &new_name)? {
                    Some(target) => {
                        next.selection = Some(target);
                        self.after_change(next)
                    }
                    None => Ok(Transition::new(next)),
                }
            }
            Command::RequestDelete => match state.selection.clone() {
                Some(path) => Ok(Transition::new(next).with(Effect::ConfirmDelete(path))),
                None => Ok(Transition::new(next)),
            },
            Command::Delete { confirmed } => {
                let Some(path) = state.selection.clone() else {
                    return Ok(Transition::new(next));
                };
                if !confirmed {
                    return Ok(Transition::new(next));
                }
                ops::delete(&self.fs, &path)?;
                next.selection = None;
                next.clipboard.remove_all(&[path]);
                self.after_change(next)
            }
            Command::Copy => Ok(self.put_on_clipboard(next, ClipOp::Copy)),
            Command::Cut => Ok(self.put_on_clipboard(next, ClipOp::Cut)),
            Command::Paste => {
                if next.clipboard.is_empty() {
                    return Ok(Transition::new(next));
                }
                if self.config.conflict_policy == ConflictPolicy::Confirm {
                    let conflicts =
                        ops::paste_conflicts(&self.fs, next.clipboard.items(), &next.cwd);
                    if !conflicts.is_empty() {
                        return Ok(Transition::new(next).with(Effect::ConfirmOverwrite(conflicts)));
                    }
                }
                self.paste(next)
            }
            Command::PasteConfirmed => self.paste(next),
            Command::FocusPathBar => Ok(Transition::new(next).with(Effect::Focus(Field::PathBar))),
            Command::FocusSearch => Ok(Transition::new(next).with(Effect::Focus(Field::Search))),
        }
    }

    fn navigate(&self, mut next: AppState, path: &Path) -> Result<Transition> {
        let requested = expand_home(path);
        let requested = if requested.is_relative() {
            next.cwd.join(requested)
        } else {
            requested
        };
        next.cwd = self.resolve_dir(&requested)?;
        next.selection = None;
        next = self.relist(next)?;
        next.tree.reveal(&self.fs, &next.cwd, next.show_hidden);
        info!(cwd = %next.cwd.display(), "navigated");
        Ok(Transition::new(next).with(Effect::TreeChanged))
    }

    fn open(&self, mut next: AppState, path: &Path) -> Result<Transition> {
        let md = self.fs.metadata(path).map_err(|e| Error::from_io(e, path))?;
        if md.is_dir {
            return self.navigate(next, path);
        }
        self.launcher
            .open(path)
            .map_err(|e| Error::from_io(e, path))?;
        info!(path = %path.display(), "opened with default application");
        next.status = format!("Opened {}", path.display());
        Ok(Transition::new(next).with(Effect::Opened(path.to_path_buf())))
    }

    fn put_on_clipboard(&self, mut next: AppState, op: ClipOp) -> Transition {
        let Some(path) = next.selection.clone() else {
            return Transition::new(next);
        };
        let dropped = next
            .clipboard
            .put(path.clone(), op, self.config.clipboard_mode);
        let verb = match op {
            ClipOp::Copy => "Copied",
            ClipOp::Cut => "Cut",
        };
        next.status = if self.config.warn_on_clipboard_replace && !dropped.is_empty() {
            format!(
                "{} {} (replaced {} pending item(s))",
                verb,
                path.display(),
                dropped.len()
            )
        } else {
            format!("{} {}", verb, path.display())
        };
        Transition::new(next)
    }

    fn paste(&self, mut next: AppState) -> Result<Transition> {
        let Some(op) = next.clipboard.op() else {
            return Ok(Transition::new(next));
        };
        let items = next.clipboard.items().to_vec();
        let report = ops::paste(&self.fs, &items, &next.cwd, op);
        if op == ClipOp::Cut {
            next.clipboard.remove_all(&report.done);
        }
        let mut transition = self.after_change(next)?;
        if !report.failed.is_empty() {
            let message = report
                .failed
                .iter()
                .map(|(_, e)| e.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            warn!(failed = report.failed.len(), "paste incomplete");
            transition = transition.with(Effect::ShowError {
                title: APP_TITLE.to_string(),
                message,
            });
        }
        Ok(transition)
    }

    /// Relists and reloads the tree after the filesystem changed under cwd.
    fn after_change(&self, next: AppState) -> Result<Transition> {
        let mut next = self.relist(next)?;
        next.tree.reload(&self.fs, next.show_hidden);
        Ok(Transition::new(next).with(Effect::TreeChanged))
    }

    fn relist(&self, mut next: AppState) -> Result<AppState> {
        next.entries = list_dir(
            &self.fs,
            ListParams {
                path: &next.cwd,
                query: &next.query,
                show_hidden: next.show_hidden,
            },
        )?;
        if let Some(selected) = next.selection.as_deref() {
            if next.entry(selected).is_none() {
                next.selection = None;
            }
        }
        next.status = next.listing_status();
        Ok(next)
    }

    fn resolve_dir(&self, path: &Path) -> Result<PathBuf> {
        let resolved = self
            .fs
            .canonicalize(path)
            .map_err(|e| Error::from_io(e, path))?;
        let md = self
            .fs
            .metadata(&resolved)
            .map_err(|e| Error::from_io(e, &resolved))?;
        if !md.is_dir {
            return Err(Error::NotADirectory { path: resolved });
        }
        Ok(resolved)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fs::LocalFs;
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use tempfile::{tempdir, TempDir};

    #[derive(Default)]
    struct RecordingLauncher {
        opened: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn open(&self, path: &Path) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::Other, "no handler registered"));
            }
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn setup() -> (TempDir, Explorer<LocalFs, RecordingLauncher>, AppState) {
        let tmp = tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        let config = ExplorerConfig {
            start_dir: root.clone(),
            ..ExplorerConfig::default()
        };
        let explorer = Explorer::new(LocalFs, RecordingLauncher::default(), config);
        let state = explorer.initial_state(vec![root]).unwrap();
        (tmp, explorer, state)
    }

    #[test]
    fn initial_state_lists_start_dir() {
        let (_tmp, _explorer, state) = setup();
        assert!(state.entries.is_empty());
        assert!(state.status.ends_with("| 0 items"));
        assert_eq!(state.tree.visible_rows().len(), 1);
    }

    #[test]
    fn focus_commands_name_their_field() {
        let (_tmp, explorer, state) = setup();
        let t = explorer.handle(&state, Command::FocusSearch);
        assert_eq!(t.effects, vec![Effect::Focus(Field::Search)]);
        let t = explorer.handle(&state, Command::FocusPathBar);
        assert_eq!(t.effects, vec![Effect::Focus(Field::PathBar)]);
    }

    #[test]
    fn selection_commands_without_selection_do_nothing() {
        let (_tmp, explorer, state) = setup();
        for cmd in [
            Command::PromptRename,
            Command::RequestDelete,
            Command::Copy,
            Command::OpenSelected,
            Command::Delete { confirmed: true },
        ] {
            let t = explorer.handle(&state, cmd);
            assert!(t.effects.is_empty());
            assert_eq!(t.state, state);
        }
    }

    #[test]
    fn open_file_uses_launcher() {
        let (_tmp, explorer, state) = setup();
        let file = state.cwd.join("doc.txt");
        fs::write(&file, "x").unwrap();

        let t = explorer.handle(&state, Command::Open(file.clone()));
        assert_eq!(t.effects, vec![Effect::Opened(file.clone())]);
        assert_eq!(*explorer.launcher.opened.borrow(), vec![file]);
    }

    #[test]
    fn open_failure_is_reported() {
        let tmp = tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        let file = root.join("x.bin");
        fs::write(&file, "x").unwrap();
        let config = ExplorerConfig {
            start_dir: root.clone(),
            ..ExplorerConfig::default()
        };
        let launcher = RecordingLauncher {
            fail: true,
            ..RecordingLauncher::default()
        };
        let explorer = Explorer::new(LocalFs, launcher, config);
        let state = explorer.initial_state(vec![root]).unwrap();

        let t = explorer.handle(&state, Command::Open(file));
        assert!(t.error_message().unwrap().contains("no handler registered"));
        assert_eq!(t.state, state);
    }

    #[test]
    fn open_directory_navigates() {
        let (_tmp, explorer, state) = setup();
        let sub = state.cwd.join("sub");
        fs::create_dir(&sub).unwrap();

        let t = explorer.handle(&state, Command::Open(sub.clone()));
        assert_eq!(t.state.cwd, sub);
        assert!(explorer.launcher.opened.borrow().is_empty());
    }

    #[test]
    fn relative_navigation_resolves_against_cwd() {
        let (_tmp, explorer, state) = setup();
        fs::create_dir_all(state.cwd.join("a/b")).unwrap();

        let t = explorer.handle(&state, Command::Navigate(PathBuf::from("a/b")));
        assert_eq!(t.state.cwd, state.cwd.join("a").join("b"));

        let t = explorer.handle(&t.state, Command::NavigateParent);
        assert_eq!(t.state.cwd, state.cwd.join("a"));
    }

    #[test]
    fn navigating_to_a_file_is_refused() {
        let (_tmp, explorer, state) = setup();
        let file = state.cwd.join("plain.txt");
        fs::write(&file, "x").unwrap();

        let t = explorer.handle(&state, Command::Navigate(file));
        assert!(t.error_message().unwrap().contains("not a directory"));
        assert_eq!(t.state.cwd, state.cwd);
    }

    #[test]
    fn warn_on_replace_reports_dropped_items() {
        let tmp = tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        fs::write(root.join("a"), "a").unwrap();
        fs::write(root.join("b"), "b").unwrap();
        let config = ExplorerConfig {
            start_dir: root.clone(),
            warn_on_clipboard_replace: true,
            ..ExplorerConfig::default()
        };
        let explorer = Explorer::new(LocalFs, RecordingLauncher::default(), config);
        let state = explorer.initial_state(vec![root.clone()]).unwrap();

        let t = explorer.handle(&state, Command::Select(Some(root.join("a"))));
        let t = explorer.handle(&t.state, Command::Copy);
        assert_eq!(t.state.status, format!("Copied {}", root.join("a").display()));
        let t = explorer.handle(&t.state, Command::Select(Some(root.join("b"))));
        let t = explorer.handle(&t.state, Command::Cut);
        assert!(t.state.status.contains("replaced 1 pending item(s)"));
        assert_eq!(t.state.clipboard.items(), [root.join("b")]);
    }

    #[test]
    fn expand_home_replaces_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/docs")), home.join("docs"));
        }
        assert_eq!(expand_home(Path::new("/abs")), PathBuf::from("/abs"));
    }
}
