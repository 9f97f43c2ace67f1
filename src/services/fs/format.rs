use std::path::Path;
use std::time::SystemTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const MODIFIED_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

pub fn human_bytes(size: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if size < 1024 {
        return format!("{} B", size);
    }
    let mut value = size as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Local time when the offset can be determined, UTC otherwise.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn format_modified(modified: SystemTime, offset: UtcOffset) -> String {
    OffsetDateTime::from(modified)
        .to_offset(offset)
        .format(MODIFIED_FORMAT)
        .unwrap_or_default()
}

/// `DIR`, the uppercased extension, or `FILE` when there is none.
pub fn type_label(name: &str, is_dir: bool) -> String {
    if is_dir {
        return "DIR".to_string();
    }
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| e.to_uppercase())
        .unwrap_or_else(|| "FILE".to_string())
}
