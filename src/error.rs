//! Errors from repository initialization

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop `wyag init`. Each variant names the path it failed on.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("directory already exists: {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("conf path is occupied by a directory: {path}")]
    ConflictingEntry { path: PathBuf },

    #[error("invalid conf file format {path}: {source}")]
    MalformedConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unsupported repository format version {version} in {path}")]
    UnsupportedFormatVersion { path: PathBuf, version: i64 },

    #[error("failed to {action} {path}: {source}")]
    Io {
        action: IoAction,
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to encode default conf: {0}")]
    EncodeConfig(#[source] serde_json::Error),
}

/// Which filesystem call an `InitError::Io` came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Stat,
    CreateDir,
    Read,
    Write,
}

impl std::fmt::Display for IoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IoAction::Stat => "stat path",
            IoAction::CreateDir => "create directory",
            IoAction::Read => "read conf file",
            IoAction::Write => "write conf file",
        };
        f.write_str(s)
    }
}

impl InitError {
    pub(crate) fn io(action: IoAction, path: impl Into<PathBuf>, source: io::Error) -> Self {
        InitError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_names_action_and_path() {
        let err = InitError::io(
            IoAction::CreateDir,
            "/tmp/x/.wyag",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("failed to create directory /tmp/x/.wyag: "));
    }

    #[test]
    fn test_io_keeps_source() {
        use std::error::Error as _;

        let err = InitError::io(
            IoAction::Read,
            "conf",
            io::Error::other("disk on fire"),
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn test_version_message() {
        let err = InitError::UnsupportedFormatVersion {
            path: PathBuf::from("/r/.wyag/conf"),
            version: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported repository format version 3 in /r/.wyag/conf"
        );
    }
}
