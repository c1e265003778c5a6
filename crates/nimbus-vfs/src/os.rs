//! Host-backed filesystem strategy over `std::fs`.
//!
//! Paths are passed through to the host filesystem unchanged. Error mapping
//! happens once via `From<std::io::Error>` so the shell sees the same
//! `FsError` taxonomy from every strategy.

use std::fs;
use std::path::Path;

use crate::error::FsError;
use crate::service::FsCapability;
use crate::types::{DirEntry, EntryKind};

/// Host filesystem strategy.
pub struct OsFs;

impl Default for OsFs {
    fn default() -> Self {
        Self::new()
    }
}

impl OsFs {
    /// Create the host-backed strategy.
    pub fn new() -> Self {
        Self
    }

    /// Check whether the host filesystem is usable at all.
    pub fn available() -> bool {
        fs::read_dir(".").is_ok()
    }

    fn entry_from_path(path: &Path, meta: &fs::Metadata) -> DirEntry {
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        DirEntry {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_string_lossy().into_owned(),
            kind,
            size: if meta.is_dir() { 0 } else { meta.len() },
            modified_at: modified_ms(meta),
        }
    }

    fn copy_dir_inner(from: &Path, to: &Path) -> Result<(), FsError> {
        fs::create_dir_all(to)?;
        for entry in fs::read_dir(from)? {
            let entry = entry?;
            let dest = to.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                Self::copy_dir_inner(&entry.path(), &dest)?;
            } else {
                fs::copy(entry.path(), &dest)?;
            }
        }
        Ok(())
    }
}

fn modified_ms(meta: &fs::Metadata) -> u64 {
    meta.modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl FsCapability for OsFs {
    fn name(&self) -> &'static str {
        "os"
    }

    fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            entries.push(Self::entry_from_path(&entry.path(), &meta));
        }
        Ok(entries)
    }

    fn create_dir(&self, path: &str) -> Result<(), FsError> {
        fs::create_dir(path)?;
        Ok(())
    }

    fn create_dir_all(&self, path: &str) -> Result<(), FsError> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), FsError> {
        let meta = fs::metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), FsError> {
        if Path::new(to).exists() {
            return Err(FsError::AlreadyExists);
        }
        fs::rename(from, to)?;
        Ok(())
    }

    fn copy(&self, from: &str, to: &str) -> Result<(), FsError> {
        let meta = fs::metadata(from)?;
        if meta.is_dir() {
            return Err(FsError::NotAFile);
        }
        fs::copy(from, to)?;
        Ok(())
    }

    fn copy_dir(&self, from: &str, to: &str) -> Result<(), FsError> {
        let meta = fs::metadata(from)?;
        if !meta.is_dir() {
            return Err(FsError::NotADirectory);
        }
        let from_path = Path::new(from);
        let to_path = Path::new(to);
        if to_path.starts_with(from_path) {
            return Err(FsError::invalid_path("cannot copy a directory into itself"));
        }
        Self::copy_dir_inner(from_path, to_path)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let meta = fs::metadata(path)?;
        if meta.is_dir() {
            return Err(FsError::NotAFile);
        }
        Ok(fs::read(path)?)
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), FsError> {
        fs::write(path, content)?;
        Ok(())
    }

    fn exists(&self, path: &str) -> Result<bool, FsError> {
        Ok(Path::new(path).exists())
    }

    fn stat(&self, path: &str) -> Result<DirEntry, FsError> {
        let meta = fs::metadata(path)?;
        Ok(Self::entry_from_path(Path::new(path), &meta))
    }
}
