use crate::core::errors::{Error, Result};
use crate::models::file_entry::{is_hidden_name, FileEntry, FileKind};
use crate::services::fs::backend::{DirItem, FsBackend};
use crate::services::fs::format::{format_modified, human_bytes, local_offset, type_label};
use std::cmp::Ordering;
use std::path::Path;
use time::UtcOffset;
use tracing::debug;

/// Text shown in an empty search field; treated as no query.
pub const SEARCH_PLACEHOLDER: &str = "Search…";

pub struct ListParams<'a> {
    pub path: &'a Path,
    pub query: &'a str,
    pub show_hidden: bool,
}

/// Lists `params.path`: directories first, then case-insensitive name order.
///
/// Fails only when the directory itself cannot be read. A failed stat on a
/// single entry leaves its size and modified fields empty.
pub fn list_dir(fs: &dyn FsBackend, params: ListParams<'_>) -> Result<Vec<FileEntry>> {
    let items = fs
        .read_dir(params.path)
        .map_err(|e| Error::from_io(e, params.path))?;
    let offset = local_offset();

    let mut entries: Vec<FileEntry> = items
        .into_iter()
        .filter(|item| params.show_hidden || !is_hidden_name(&item.name))
        .filter(|item| matches_query(&item.name, params.query))
        .map(|item| to_entry(fs, item, offset))
        .collect();
    sort_entries(&mut entries);

    debug!(
        path = %params.path.display(),
        count = entries.len(),
        "listed directory"
    );
    Ok(entries)
}

/// Case-insensitive substring match; an empty query or the placeholder
/// matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() || query == SEARCH_PLACEHOLDER {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| match b.is_dir().cmp(&a.is_dir()) {
        Ordering::Equal => compare_names(&a.name, &b.name),
        kind_order => kind_order,
    });
}

/// Case-insensitive, with the raw name as tie-breaker so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn to_entry(fs: &dyn FsBackend, item: DirItem, offset: UtcOffset) -> FileEntry {
    let (size, modified) = match fs.metadata(&item.path) {
        Ok(md) => {
            let size = if md.is_file {
                human_bytes(md.len)
            } else {
                String::new()
            };
            let modified = md
                .modified
                .map(|t| format_modified(t, offset))
                .unwrap_or_default();
            (size, modified)
        }
        Err(e) => {
            debug!(path = %item.path.display(), error = %e, "stat failed");
            (String::new(), String::new())
        }
    };

    FileEntry {
        type_label: type_label(&item.name, item.is_dir),
        kind: if item.is_dir {
            FileKind::Dir
        } else {
            FileKind::File
        },
        name: item.name,
        path: item.path,
        size,
        modified,
    }
}
