//! errors.rs - Custom error types for the wordscrub-core library.
//!
//! Every failure during a run is fatal: the walker stops at the first error
//! and hands it back to the caller, which decides how to report it.
//!
//! License: MIT OR APACHE 2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `wordscrub-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("Failed to read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("Path not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Failed to stat '{}': {}", .path.display(), .source)]
    Stat { path: PathBuf, source: io::Error },

    #[error("Failed to list directory '{}': {}", .path.display(), .source)]
    ListDir { path: PathBuf, source: io::Error },

    #[error("Failed to write '{}': {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },

    #[error("Invalid blocklist '{}': {}", .path.display(), .message)]
    Blocklist { path: PathBuf, message: String },

    #[error("A pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ScrubError {
    /// Classifies a failed `stat` call by its I/O error kind.
    pub fn from_stat(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ScrubError::NotFound { path },
            io::ErrorKind::PermissionDenied => ScrubError::PermissionDenied { path },
            _ => ScrubError::Stat { path, source },
        }
    }

    /// The path the failing operation was working on, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ScrubError::Read { path, .. }
            | ScrubError::NotFound { path }
            | ScrubError::PermissionDenied { path }
            | ScrubError::Stat { path, .. }
            | ScrubError::ListDir { path, .. }
            | ScrubError::Write { path, .. }
            | ScrubError::Blocklist { path, .. } => Some(path),
            ScrubError::Task(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stat_classifies_kinds() {
        let missing = ScrubError::from_stat(
            PathBuf::from("nope.txt"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(missing, ScrubError::NotFound { .. }));

        let denied = ScrubError::from_stat(
            PathBuf::from("locked"),
            io::Error::new(io::ErrorKind::PermissionDenied, "no"),
        );
        assert!(matches!(denied, ScrubError::PermissionDenied { .. }));

        let other = ScrubError::from_stat(
            PathBuf::from("weird"),
            io::Error::new(io::ErrorKind::Other, "boom"),
        );
        assert!(matches!(other, ScrubError::Stat { .. }));
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ScrubError::NotFound { path: PathBuf::from("corpus/missing.txt") };
        assert_eq!(err.to_string(), "Path not found: 'corpus/missing.txt'");
        assert_eq!(err.path(), Some(&PathBuf::from("corpus/missing.txt")));
    }
}
