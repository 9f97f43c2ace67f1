use crate::core::config::ClipboardMode;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOp {
    Copy,
    Cut,
}

/// Paths waiting for a paste, all under one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    items: Vec<PathBuf>,
    op: Option<ClipOp>,
}

impl Clipboard {
    pub fn items(&self) -> &[PathBuf] {
        &self.items
    }

    pub fn op(&self) -> Option<ClipOp> {
        self.op
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Puts `path` on the clipboard. Returns the paths that were dropped to
    /// make room for it.
    pub fn put(&mut self, path: PathBuf, op: ClipOp, mode: ClipboardMode) -> Vec<PathBuf> {
        let appends = mode == ClipboardMode::Multi && self.op == Some(op);
        if appends {
            if !self.items.contains(&path) {
                self.items.push(path);
            }
            return Vec::new();
        }
        let mut dropped = std::mem::take(&mut self.items);
        dropped.retain(|p| p != &path);
        self.items.push(path);
        self.op = Some(op);
        dropped
    }

    /// Drops the given paths; the operation goes with the last of them.
    pub fn remove_all(&mut self, done: &[PathBuf]) {
        self.items.retain(|p| !done.contains(p));
        if self.items.is_empty() {
            self.op = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode_replaces() {
        let mut clip = Clipboard::default();
        assert!(clip.put("/a".into(), ClipOp::Copy, ClipboardMode::Single).is_empty());
        let dropped = clip.put("/b".into(), ClipOp::Cut, ClipboardMode::Single);
        assert_eq!(dropped, vec![PathBuf::from("/a")]);
        assert_eq!(clip.items(), [PathBuf::from("/b")]);
        assert_eq!(clip.op(), Some(ClipOp::Cut));
    }

    #[test]
    fn same_path_again_is_not_reported_as_dropped() {
        let mut clip = Clipboard::default();
        clip.put("/a".into(), ClipOp::Copy, ClipboardMode::Single);
        assert!(clip.put("/a".into(), ClipOp::Cut, ClipboardMode::Single).is_empty());
        assert_eq!(clip.op(), Some(ClipOp::Cut));
    }

    #[test]
    fn multi_mode_appends_same_operation_only() {
        let mut clip = Clipboard::default();
        clip.put("/a".into(), ClipOp::Copy, ClipboardMode::Multi);
        clip.put("/b".into(), ClipOp::Copy, ClipboardMode::Multi);
        clip.put("/b".into(), ClipOp::Copy, ClipboardMode::Multi);
        assert_eq!(clip.items().len(), 2);

        let dropped = clip.put("/c".into(), ClipOp::Cut, ClipboardMode::Multi);
        assert_eq!(dropped.len(), 2);
        assert_eq!(clip.items(), [PathBuf::from("/c")]);
    }

    #[test]
    fn removing_last_item_clears_operation() {
        let mut clip = Clipboard::default();
        clip.put("/a".into(), ClipOp::Cut, ClipboardMode::Multi);
        clip.put("/b".into(), ClipOp::Cut, ClipboardMode::Multi);

        clip.remove_all(&[PathBuf::from("/a")]);
        assert_eq!(clip.op(), Some(ClipOp::Cut));
        assert_eq!(clip.items(), [PathBuf::from("/b")]);

        clip.remove_all(&[PathBuf::from("/b")]);
        assert!(clip.is_empty());
        assert_eq!(clip.op(), None);
    }
}
