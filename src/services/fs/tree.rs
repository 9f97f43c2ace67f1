use crate::models::file_entry::is_hidden_name;
use crate::models::tree_node::{TreeNode, TreeRow};
use crate::services::fs::backend::FsBackend;
use crate::services::fs::listing::compare_names;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Direct subdirectories of `path`, case-insensitively sorted.
///
/// A node may point at a directory that has since been removed or was never
/// readable, so errors yield an empty list instead of failing.
pub fn list_subdirs(fs: &dyn FsBackend, path: &Path, show_hidden: bool) -> Vec<PathBuf> {
    let items = match fs.read_dir(path) {
        Ok(items) => items,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "tree node not expandable");
            return Vec::new();
        }
    };
    let mut dirs: Vec<_> = items
        .into_iter()
        .filter(|item| item.is_dir)
        .filter(|item| show_hidden || !is_hidden_name(&item.name))
        .collect();
    dirs.sort_by(|a, b| compare_names(&a.name, &b.name));
    dirs.into_iter().map(|item| item.path).collect()
}

/// Roots shown at the top of the tree: drive letters on Windows, `/` and the
/// home directory elsewhere.
pub fn default_roots(fs: &dyn FsBackend) -> Vec<PathBuf> {
    #[cfg(target_os = "windows")]
    let candidates: Vec<PathBuf> = (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|p| fs.exists(p))
        .collect();
    #[cfg(not(target_os = "windows"))]
    let candidates: Vec<PathBuf> = std::iter::once(PathBuf::from("/"))
        .chain(dirs::home_dir())
        .map(|p| fs.canonicalize(&p).unwrap_or(p))
        .collect();

    let mut roots: Vec<PathBuf> = Vec::new();
    for root in candidates {
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirTree {
    pub roots: Vec<TreeNode>,
}

impl DirTree {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().map(TreeNode::root).collect(),
        }
    }

    /// Reloads the children of `path` from disk. Roots may nest (`/` and the
    /// home directory), so every node with that path is expanded. Returns
    /// false when no node has it.
    pub fn expand(&mut self, fs: &dyn FsBackend, path: &Path, show_hidden: bool) -> bool {
        self.for_each_node(path, |node| reload_node(fs, node, show_hidden))
    }

    pub fn collapse(&mut self, path: &Path) -> bool {
        self.for_each_node(path, |node| {
            node.expanded = false;
            node.children.clear();
        })
    }

    /// Expands every node from the closest root down to `target`.
    pub fn reveal(&mut self, fs: &dyn FsBackend, target: &Path, show_hidden: bool) {
        let Some(mut node) = self
            .roots
            .iter_mut()
            .filter(|r| target.starts_with(&r.path))
            .max_by_key(|r| r.path.components().count())
        else {
            return;
        };
        loop {
            // Expanded siblings keep their subtrees; only stale nodes re-read.
            let on_path = node.children.iter().any(|c| target.starts_with(&c.path));
            if !node.expanded {
                load_children(fs, node, show_hidden);
            } else if node.path != target && !on_path {
                reload_node(fs, node, show_hidden);
            }
            if node.path == target {
                return;
            }
            match node
                .children
                .iter_mut()
                .find(|c| target.starts_with(&c.path))
            {
                Some(next) => node = next,
                None => return,
            }
        }
    }

    /// Re-reads every expanded node, keeping expansion where the directory
    /// is still listed.
    pub fn reload(&mut self, fs: &dyn FsBackend, show_hidden: bool) {
        for root in &mut self.roots {
            if root.expanded {
                reload_node(fs, root, show_hidden);
            }
        }
    }

    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for root in &self.roots {
            push_rows(root, 0, &mut rows);
        }
        rows
    }

    fn for_each_node(&mut self, path: &Path, mut f: impl FnMut(&mut TreeNode)) -> bool {
        let mut found = false;
        for root in &mut self.roots {
            if let Some(node) = root.find_mut(path) {
                f(node);
                found = true;
            }
        }
        found
    }
}

fn load_children(fs: &dyn FsBackend, node: &mut TreeNode, show_hidden: bool) {
    node.children = list_subdirs(fs, &node.path, show_hidden)
        .into_iter()
        .map(TreeNode::child)
        .collect();
    node.expanded = true;
}

fn reload_node(fs: &dyn FsBackend, node: &mut TreeNode, show_hidden: bool) {
    let previous = std::mem::take(&mut node.children);
    load_children(fs, node, show_hidden);
    for child in &mut node.children {
        let was_expanded = previous
            .iter()
            .any(|old| old.path == child.path && old.expanded);
        if was_expanded {
            reload_node(fs, child, show_hidden);
        }
    }
}

fn push_rows(node: &TreeNode, depth: usize, rows: &mut Vec<TreeRow>) {
    rows.push(TreeRow {
        path: node.path.clone(),
        label: node.label.clone(),
        depth,
        expanded: node.expanded,
    });
    if node.expanded {
        for child in &node.children {
            push_rows(child, depth + 1, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fs::LocalFs;
    use std::fs;
    use tempfile::tempdir;

    fn labels(tree: &DirTree) -> Vec<(usize, String)> {
        tree.visible_rows()
            .into_iter()
            .map(|r| (r.depth, r.label))
            .collect()
    }

    #[test]
    fn subdirs_only_sorted_and_hidden_aware() {
        let tmp = tempdir().unwrap();
        for d in ["beta", "Alpha", ".cache"] {
            fs::create_dir(tmp.path().join(d)).unwrap();
        }
        fs::write(tmp.path().join("file.txt"), "x").unwrap();

        let dirs = list_subdirs(&LocalFs, tmp.path(), false);
        let names: Vec<_> = dirs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Alpha", "beta"]);

        assert_eq!(list_subdirs(&LocalFs, tmp.path(), true).len(), 3);
    }

    #[test]
    fn unreadable_or_missing_directory_yields_nothing() {
        let tmp = tempdir().unwrap();
        assert!(list_subdirs(&LocalFs, &tmp.path().join("missing"), false).is_empty());
    }

    #[test]
    fn expand_reloads_and_collapse_discards() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        fs::create_dir(root.join("one")).unwrap();

        let mut tree = DirTree::new(vec![root.clone()]);
        assert!(tree.expand(&LocalFs, &root, false));
        assert_eq!(tree.visible_rows().len(), 2);

        fs::create_dir(root.join("two")).unwrap();
        tree.collapse(&root);
        assert_eq!(tree.visible_rows().len(), 1);
        assert!(tree.roots[0].children.is_empty());

        tree.expand(&LocalFs, &root, false);
        assert_eq!(
            labels(&tree)[1..],
            [(1, "one".to_string()), (1, "two".to_string())]
        );
    }

    #[test]
    fn reveal_opens_every_ancestor() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        let deep = root.join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir(root.join("z")).unwrap();

        let mut tree = DirTree::new(vec![root.clone()]);
        tree.reveal(&LocalFs, &deep, false);

        assert_eq!(
            labels(&tree)[1..],
            [
                (1, "a".to_string()),
                (2, "b".to_string()),
                (3, "c".to_string()),
                (1, "z".to_string()),
            ]
        );
    }

    #[test]
    fn reload_keeps_expansion_and_applies_hidden_flag() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        fs::create_dir_all(root.join("a").join(".inner")).unwrap();
        fs::create_dir(root.join(".top")).unwrap();

        let mut tree = DirTree::new(vec![root.clone()]);
        tree.reveal(&LocalFs, &root.join("a"), false);
        assert_eq!(tree.visible_rows().len(), 2);

        tree.reload(&LocalFs, true);
        assert_eq!(
            labels(&tree)[1..],
            [
                (1, ".top".to_string()),
                (1, "a".to_string()),
                (2, ".inner".to_string()),
            ]
        );
    }

    #[test]
    fn nested_roots_expand_the_clicked_node_too() {
        let tmp = tempdir().unwrap();
        let outer = tmp.path().to_path_buf();
        let home = outer.join("home");
        fs::create_dir_all(home.join("docs")).unwrap();

        let mut tree = DirTree::new(vec![outer.clone(), home.clone()]);
        tree.expand(&LocalFs, &outer, false);
        assert!(tree.expand(&LocalFs, &home, false));

        let rows = tree.visible_rows();
        let home_rows: Vec<_> = rows.iter().filter(|r| r.path == home).collect();
        assert_eq!(home_rows.len(), 2);
        assert!(home_rows.iter().all(|r| r.expanded));
        assert_eq!(
            rows.iter().filter(|r| r.path == home.join("docs")).count(),
            2
        );

        tree.collapse(&home);
        assert!(tree.visible_rows().iter().all(|r| r.path != home.join("docs")));
    }

    #[test]
    fn reveal_keeps_expanded_siblings() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        fs::create_dir_all(root.join("a").join("a1")).unwrap();
        fs::create_dir_all(root.join("b").join("b1")).unwrap();

        let mut tree = DirTree::new(vec![root.clone()]);
        tree.reveal(&LocalFs, &root.join("a"), false);
        tree.expand(&LocalFs, &root.join("a"), false);
        tree.reveal(&LocalFs, &root.join("b"), false);

        assert_eq!(
            labels(&tree)[1..],
            [
                (1, "a".to_string()),
                (2, "a1".to_string()),
                (1, "b".to_string()),
                (2, "b1".to_string()),
            ]
        );
    }

    #[test]
    fn expand_unknown_path_is_reported() {
        let tmp = tempdir().unwrap();
        let mut tree = DirTree::new(vec![tmp.path().to_path_buf()]);
        assert!(!tree.expand(&LocalFs, Path::new("/definitely/not/in/tree"), false));
    }
}
