//! Error types for the filesystem capability layer.

use serde::{Deserialize, Serialize};

/// Errors from filesystem operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsError {
    /// Path not found
    NotFound,

    /// Path already exists
    AlreadyExists,

    /// Not a directory
    NotADirectory,

    /// Not a file
    NotAFile,

    /// Directory not empty
    DirectoryNotEmpty,

    /// Invalid path format
    InvalidPath(String),

    /// The host does not provide this capability
    CapabilityUnavailable(&'static str),

    /// I/O error from the host backend
    Io(String),
}

impl FsError {
    /// Create an invalid path error with message.
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an I/O error with message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Whether this error means the host bridge is absent rather than that
    /// the operation itself failed.
    pub fn is_capability_unavailable(&self) -> bool {
        matches!(self, Self::CapabilityUnavailable(_))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "path not found"),
            Self::AlreadyExists => write!(f, "path already exists"),
            Self::NotADirectory => write!(f, "not a directory"),
            Self::NotAFile => write!(f, "not a file"),
            Self::DirectoryNotEmpty => write!(f, "directory not empty"),
            Self::InvalidPath(msg) => write!(f, "invalid path: {}", msg),
            Self::CapabilityUnavailable(what) => {
                write!(f, "host capability unavailable: {}", what)
            }
            Self::Io(msg) => write!(f, "i/o error: {}", msg),
        }
    }
}

impl std::error::Error for FsError {}

#[cfg(not(target_arch = "wasm32"))]
impl From<std::io::Error> for FsError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound,
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists,
            _ => FsError::Io(e.to_string()),
        }
    }
}
