use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// One raw directory entry, before any stat call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirItem {
    pub name: String,
    pub path: PathBuf,
    /// Follows symlinks, so a link to a directory counts as a directory.
    pub is_dir: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsMetadata {
    pub is_dir: bool,
    pub is_file: bool,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

/// Filesystem operations the browser needs, and nothing more.
///
/// Every call is synchronous. The GUI runs them on its only thread, so a
/// stalled mount blocks the window until the call returns.
pub trait FsBackend {
    /// Lists direct children of `path`, unsorted.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirItem>>;

    /// Stats `path`, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<FsMetadata>;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn exists(&self, path: &Path) -> bool;

    /// Creates exactly one directory; fails if anything exists at `path`.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Removes a file, a symlink, or a directory with all its contents.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Copies one file, replacing `to` if it exists.
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Copies a directory tree into `to`, merging with whatever is already there.
    fn copy_tree(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Files under `root`, relative to it.
    fn tree_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;
}

/// The host filesystem through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FsBackend for LocalFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirItem>> {
        let mut items = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            // A broken link or an unreadable entry is listed as a plain file.
            let is_dir = fs::metadata(&path).map(|md| md.is_dir()).unwrap_or(false);
            items.push(DirItem {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            });
        }
        Ok(items)
    }

    fn metadata(&self, path: &Path) -> io::Result<FsMetadata> {
        let md = fs::metadata(path)?;
        Ok(FsMetadata {
            is_dir: md.is_dir(),
            is_file: md.is_file(),
            len: md.len(),
            modified: md.modified().ok(),
        })
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let md = fs::symlink_metadata(path)?;
        if md.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> io::Result<()> {
        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry.map_err(io::Error::from)?;
            let rel = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            let target = to.join(rel);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                fs::copy(entry.path(), &target)?;
            }
        }
        Ok(())
    }

    fn tree_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_dir() {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(root) {
                files.push(rel.to_path_buf());
            }
        }
        Ok(files)
    }
}
