//! Service trait for the filesystem capability layer.
//!
//! Defines the interface the shell's file manager and desktop icon layer
//! program against. Strategies take `&self`; backends that need mutation
//! use interior mutability so a single resolved strategy can be shared by
//! every component for the lifetime of the shell.

use crate::error::FsError;
use crate::types::DirEntry;

/// Options for the host file-open dialog.
#[derive(Clone, Debug, Default)]
pub struct DialogOptions {
    /// Dialog title
    pub title: Option<String>,
    /// Select directories instead of files
    pub directory: bool,
    /// Allow selecting more than one entry
    pub multiple: bool,
}

/// Filesystem capability interface.
pub trait FsCapability {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    // ========== Directory Operations ==========

    /// List directory contents.
    fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, FsError>;

    /// Create a directory.
    fn create_dir(&self, path: &str) -> Result<(), FsError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), FsError>;

    // ========== Entry Operations ==========

    /// Delete a file, or a directory and all of its contents.
    fn delete(&self, path: &str) -> Result<(), FsError>;

    /// Rename/move a file or directory.
    fn rename(&self, from: &str, to: &str) -> Result<(), FsError>;

    /// Copy a file. An existing destination is overwritten.
    fn copy(&self, from: &str, to: &str) -> Result<(), FsError>;

    /// Copy a directory recursively. Existing destination files are
    /// overwritten.
    fn copy_dir(&self, from: &str, to: &str) -> Result<(), FsError>;

    // ========== File Operations ==========

    /// Read a file.
    fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError>;

    /// Write a file (create or overwrite).
    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), FsError>;

    // ========== Metadata Operations ==========

    /// Check whether a path exists.
    fn exists(&self, path: &str) -> Result<bool, FsError>;

    /// Get metadata for a path.
    fn stat(&self, path: &str) -> Result<DirEntry, FsError>;

    // ========== Host Dialogs ==========

    /// Open the host file dialog and return the selected paths.
    ///
    /// Strategies without a windowing host report the capability as
    /// unavailable rather than failing the operation.
    fn open_file_dialog(&self, _options: &DialogOptions) -> Result<Vec<String>, FsError> {
        Err(FsError::CapabilityUnavailable("file dialogs"))
    }
}
