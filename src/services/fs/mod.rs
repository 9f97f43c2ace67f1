pub mod backend;
pub mod format;
pub mod launcher;
pub mod listing;
pub mod ops;
pub mod tree;

pub use backend::{DirItem, FsBackend, FsMetadata, LocalFs};
pub use launcher::{Launcher, SystemLauncher};
