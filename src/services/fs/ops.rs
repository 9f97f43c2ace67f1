use crate::core::errors::{Error, Result};
use crate::models::clipboard::ClipOp;
use crate::services::fs::backend::FsBackend;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;

/// Rejects names that would escape the target directory.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR)
        || name.contains('\0');
    if invalid {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Creates `parent/name`, never touching an existing entry.
pub fn create_dir(fs: &dyn FsBackend, parent: &Path, name: &str) -> Result<PathBuf> {
    validate_name(name)?;
    let target = parent.join(name);
    if fs.exists(&target) {
        return Err(Error::AlreadyExists { path: target });
    }
    fs.create_dir(&target)
        .map_err(|e| Error::from_io(e, &target))?;
    info!(path = %target.display(), "created directory");
    Ok(target)
}

/// Renames `path` within its directory. `Ok(None)` when the name is unchanged.
pub fn rename(fs: &dyn FsBackend, path: &Path, new_name: &str) -> Result<Option<PathBuf>> {
    if path.file_name() == Some(OsStr::new(new_name)) {
        return Ok(None);
    }
    validate_name(new_name)?;
    let parent = path
        .parent()
        .ok_or_else(|| Error::OperationFailed(format!("cannot rename {}", path.display())))?;
    let target = parent.join(new_name);
    // A case-only rename on a case-insensitive volume resolves to the same entry.
    if fs.exists(&target) && !same_entry(fs, path, &target) {
        return Err(Error::AlreadyExists { path: target });
    }
    fs.rename(path, &target)
        .map_err(|e| Error::from_io(e, path))?;
    info!(from = %path.display(), to = %target.display(), "renamed");
    Ok(Some(target))
}

/// Removes a file or a whole directory tree. There is no undo.
pub fn delete(fs: &dyn FsBackend, path: &Path) -> Result<()> {
    fs.remove(path).map_err(|e| Error::from_io(e, path))?;
    info!(path = %path.display(), "deleted");
    Ok(())
}

/// Destination files a paste of `items` into `dest_dir` would overwrite.
pub fn paste_conflicts(fs: &dyn FsBackend, items: &[PathBuf], dest_dir: &Path) -> Vec<PathBuf> {
    let mut conflicts = Vec::new();
    for src in items {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dst = dest_dir.join(name);
        if !fs.exists(&dst) || same_entry(fs, src, &dst) {
            continue;
        }
        match fs.metadata(src) {
            Ok(md) if md.is_dir => {
                for rel in fs.tree_files(src).unwrap_or_default() {
                    let target = dst.join(&rel);
                    if fs.exists(&target) {
                        conflicts.push(target);
                    }
                }
            }
            Ok(_) => conflicts.push(dst),
            Err(_) => {}
        }
    }
    conflicts
}

/// Copies `src` into `dest_dir` under its own name, merging into an existing
/// directory of the same name. A cut removes the source only after the copy
/// succeeded.
pub fn paste_one(fs: &dyn FsBackend, src: &Path, dest_dir: &Path, op: ClipOp) -> Result<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| Error::OperationFailed(format!("cannot paste {}", src.display())))?;
    let md = fs.metadata(src).map_err(|e| Error::from_io(e, src))?;
    let dst = dest_dir.join(name);

    if md.is_dir {
        let src_real = fs.canonicalize(src).map_err(|e| Error::from_io(e, src))?;
        let dest_real = fs
            .canonicalize(dest_dir)
            .map_err(|e| Error::from_io(e, dest_dir))?;
        if dest_real.starts_with(&src_real) {
            return Err(Error::OperationFailed(format!(
                "cannot paste {} into itself",
                src.display()
            )));
        }
        if dest_real.join(name) == src_real || same_entry(fs, src, &dst) {
            return Err(Error::OperationFailed(format!(
                "{} is already in {}",
                src.display(),
                dest_dir.display()
            )));
        }
        fs.copy_tree(src, &dst)
            .map_err(|e| Error::from_io(e, &dst))?;
    } else {
        if fs.exists(&dst) && same_entry(fs, src, &dst) {
            return Err(Error::OperationFailed(format!(
                "{} is already in {}",
                src.display(),
                dest_dir.display()
            )));
        }
        fs.copy_file(src, &dst)
            .map_err(|e| Error::from_io(e, &dst))?;
    }

    if op == ClipOp::Cut {
        fs.remove(src).map_err(|e| Error::from_io(e, src))?;
    }
    info!(from = %src.display(), to = %dst.display(), ?op, "pasted");
    Ok(dst)
}

#[derive(Debug, Default)]
pub struct PasteReport {
    /// Sources pasted successfully.
    pub done: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, Error)>,
}

pub fn paste(fs: &dyn FsBackend, items: &[PathBuf], dest_dir: &Path, op: ClipOp) -> PasteReport {
    let mut report = PasteReport::default();
    for src in items {
        match paste_one(fs, src, dest_dir, op) {
            Ok(_) => report.done.push(src.clone()),
            Err(e) => report.failed.push((src.clone(), e)),
        }
    }
    report
}

fn same_entry(fs: &dyn FsBackend, a: &Path, b: &Path) -> bool {
    match (fs.canonicalize(a), fs.canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use crate::services::fs::LocalFs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn create_dir_refuses_existing_name() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("taken"), "keep me").unwrap();

        let err = create_dir(&LocalFs, tmp.path(), "taken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(tmp.path().join("taken")).unwrap(), "keep me");

        let made = create_dir(&LocalFs, tmp.path(), "fresh").unwrap();
        assert!(made.is_dir());
    }

    #[test]
    fn invalid_names_are_rejected() {
        let tmp = tempdir().unwrap();
        for name in ["", ".", "..", "a/b"] {
            assert!(
                matches!(create_dir(&LocalFs, tmp.path(), name), Err(Error::InvalidName(_))),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn rename_same_name_is_noop() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("same.txt");
        fs::write(&file, "x").unwrap();
        assert_eq!(rename(&LocalFs, &file, "same.txt").unwrap(), None);
        assert!(file.exists());
    }

    #[test]
    fn rename_refuses_to_clobber() {
        let tmp = tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        let err = rename(&LocalFs, &a, "b.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&b).unwrap(), "b");
    }

    #[test]
    fn delete_is_recursive() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("tree");
        fs::create_dir_all(dir.join("x")).unwrap();
        fs::write(dir.join("x/f"), "f").unwrap();
        delete(&LocalFs, &dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn paste_into_itself_is_refused() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("loop");
        fs::create_dir_all(dir.join("inner")).unwrap();

        let err = paste_one(&LocalFs, &dir, &dir.join("inner"), ClipOp::Copy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
        assert!(!dir.join("inner/loop").exists());
    }

    #[test]
    fn directory_pasted_into_its_own_parent_is_refused() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("A");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("data.txt"), "precious").unwrap();

        for op in [ClipOp::Copy, ClipOp::Cut] {
            let err = paste_one(&LocalFs, &dir, tmp.path(), op).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OperationFailed);
            assert_eq!(fs::read_to_string(dir.join("data.txt")).unwrap(), "precious");
        }
    }

    #[test]
    fn cut_onto_itself_keeps_the_file() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("stay.txt");
        fs::write(&file, "data").unwrap();

        assert!(paste_one(&LocalFs, &file, tmp.path(), ClipOp::Cut).is_err());
        assert_eq!(fs::read_to_string(&file).unwrap(), "data");
    }

    #[test]
    fn conflicts_list_files_that_would_be_overwritten() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        fs::create_dir_all(src.join("A")).unwrap();
        fs::write(src.join("A/shared.txt"), "new").unwrap();
        fs::write(src.join("A/only_src.txt"), "new").unwrap();
        fs::write(src.join("loose.txt"), "new").unwrap();
        fs::create_dir_all(dest.join("A")).unwrap();
        fs::write(dest.join("A/shared.txt"), "old").unwrap();

        let items = vec![src.join("A"), src.join("loose.txt")];
        assert_eq!(
            paste_conflicts(&LocalFs, &items, &dest),
            vec![dest.join("A").join("shared.txt")]
        );
    }

    #[test]
    fn paste_report_splits_successes_and_failures() {
        let tmp = tempdir().unwrap();
        let good = tmp.path().join("good.txt");
        fs::write(&good, "g").unwrap();
        let missing = tmp.path().join("missing.txt");
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let report = paste(&LocalFs, &[good.clone(), missing.clone()], &dest, ClipOp::Copy);
        assert_eq!(report.done, vec![good]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, missing);
        assert_eq!(report.failed[0].1.kind(), ErrorKind::NotFound);
    }
}
