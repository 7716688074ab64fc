//! Error types for the version selector engine.
//!
//! Every failure the engine can produce is a variant of [`SelectorError`].
//! The engine never terminates the process itself; the binary maps these
//! values to a message and a non-zero exit status.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Main error type for the version selector.
#[derive(Debug, Error)]
pub enum SelectorError {
    // Configuration errors (recovered by rebuilding)
    #[error("Configuration file not found: {0}")]
    ConfigMissing(PathBuf),

    #[error("Failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    #[error("Failed to serialize configuration: {message}")]
    ConfigSerialize {
        message: String,
        #[source]
        source: Option<toml::ser::Error>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // Discovery errors
    #[error("Invalid directory pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to traverse {root}: {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Editor discovery timed out after {0:?}")]
    ScanTimedOut(Duration),

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Extraction errors
    #[error("No ProjectVersion.txt found at {0}")]
    ProjectVersionMissing(PathBuf),

    #[error("{0} does not contain m_EditorVersion")]
    EditorVersionMissing(PathBuf),

    // Resolution errors
    #[error("Editor version {version} is not installed (run with --reload to rescan)")]
    VersionNotFound { version: String },

    // Collaborator errors
    #[error("Failed to launch {executable}: {message}")]
    LaunchFailed { executable: PathBuf, message: String },

    #[error("Failed to read recent projects: {message}")]
    RecentProjects { message: String },

    #[error("{feature} is not supported on this platform")]
    UnsupportedPlatform { feature: String },
}

/// Result type alias for selector operations.
pub type Result<T> = std::result::Result<T, SelectorError>;

impl From<std::io::Error> for SelectorError {
    fn from(err: std::io::Error) -> Self {
        SelectorError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<toml::ser::Error> for SelectorError {
    fn from(err: toml::ser::Error) -> Self {
        SelectorError::ConfigSerialize {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl SelectorError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SelectorError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether startup may recover from this error by rebuilding the registry.
    ///
    /// Only failures to read the persisted configuration qualify. Discovery
    /// (including an unlistable installation root), extraction and resolution
    /// failures are always terminal.
    pub fn is_recoverable_by_rebuild(&self) -> bool {
        matches!(
            self,
            SelectorError::ConfigMissing(_)
                | SelectorError::ConfigRead { .. }
                | SelectorError::ConfigParse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectorError::VersionNotFound {
            version: "2021.1.0f1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Editor version 2021.1.0f1 is not installed (run with --reload to rescan)"
        );
    }

    #[test]
    fn test_io_with_path_keeps_path() {
        let err = SelectorError::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "/opt/Unity",
        );
        match err {
            SelectorError::Io { path, .. } => assert_eq!(path, Some(PathBuf::from("/opt/Unity"))),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(SelectorError::ConfigMissing(PathBuf::from("config.toml")).is_recoverable_by_rebuild());
        assert!(!SelectorError::VersionNotFound {
            version: "5.6".into()
        }
        .is_recoverable_by_rebuild());
        assert!(!SelectorError::ScanTimedOut(Duration::from_secs(1)).is_recoverable_by_rebuild());
    }

    #[test]
    fn test_storage_read_is_recoverable_but_plain_io_is_not() {
        let denied = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

        let read = SelectorError::ConfigRead {
            path: PathBuf::from("config.toml"),
            source: denied(),
        };
        assert!(read.is_recoverable_by_rebuild());

        let unlistable_root = SelectorError::io_with_path(denied(), "/opt");
        assert!(!unlistable_root.is_recoverable_by_rebuild());
    }
}
