use std::path::{Path, PathBuf};

/// One directory in the navigation tree. `children` is only meaningful
/// while `expanded` is set; collapsing drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub path: PathBuf,
    pub label: String,
    pub expanded: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn root(path: PathBuf) -> Self {
        let label = path.display().to_string();
        Self {
            path,
            label,
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn child(path: PathBuf) -> Self {
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            label,
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn find_mut(&mut self, path: &Path) -> Option<&mut TreeNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children.iter_mut().find_map(|c| c.find_mut(path))
    }
}

/// Flattened view of the expanded part of the tree, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: PathBuf,
    pub label: String,
    pub depth: usize,
    pub expanded: bool,
}
