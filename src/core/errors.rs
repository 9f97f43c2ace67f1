use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    NotFound { path: PathBuf, source: io::Error },
    #[error("{}: {source}", path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },
    #[error("{}: already exists", path.display())]
    AlreadyExists { path: PathBuf },
    #[error("{}: not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("{0}")]
    OperationFailed(String),
}

/// Four-way classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    OperationFailed,
}

impl Error {
    /// Classifies an OS error raised while touching `path`.
    pub fn from_io(source: io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            io::ErrorKind::AlreadyExists => Error::AlreadyExists { path },
            _ => Error::OperationFailed(format!("{}: {}", path.display(), source)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Error::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Error::NotADirectory { .. } | Error::InvalidName(_) | Error::OperationFailed(_) => {
                ErrorKind::OperationFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_io_errors_by_kind() {
        let err = Error::from_io(io::Error::from(io::ErrorKind::NotFound), "/nope");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = Error::from_io(io::Error::from(io::ErrorKind::PermissionDenied), "/root");
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);

        let err = Error::from_io(io::Error::from(io::ErrorKind::AlreadyExists), "/tmp/x");
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);

        let err = Error::from_io(io::Error::new(io::ErrorKind::Other, "disk on fire"), "/tmp/x");
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn message_keeps_path_and_os_text() {
        let err = Error::from_io(
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            "/data/missing",
        );
        assert_eq!(err.to_string(), "/data/missing: No such file or directory");
    }
}
