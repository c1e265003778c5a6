//! Error types for the desktop shell
//!
//! Window and drag state machines never fail: operations on stale ids or in
//! the wrong state are no-ops by design, because event-ordering races are
//! expected in UI code. Errors exist only at the edges - filesystem-backed
//! actions and snapshot serialization.

use nimbus_vfs::FsError;

/// Errors that can occur in shell operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// A filesystem-backed action failed
    Fs(FsError),

    /// No application definition registered for the given id
    AppNotFound(String),

    /// Snapshot serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fs(e) => write!(f, "filesystem error: {}", e),
            Self::AppNotFound(id) => write!(f, "application not found: {}", id),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fs(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FsError> for ShellError {
    fn from(e: FsError) -> Self {
        Self::Fs(e)
    }
}

/// Result type alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
