//! Listing metadata types for the capability layer.

use serde::{Deserialize, Serialize};

/// Kind of a directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// A single entry in a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name (final path component)
    pub name: String,
    /// Full path of the entry
    pub path: String,
    /// File or directory
    pub kind: EntryKind,
    /// Size in bytes (0 for directories)
    pub size: u64,
    /// Modification timestamp (backend-defined epoch, milliseconds)
    pub modified_at: u64,
}

impl DirEntry {
    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_predicates() {
        let entry = DirEntry {
            name: String::from("photo.png"),
            path: String::from("/Pictures/photo.png"),
            kind: EntryKind::File,
            size: 1024,
            modified_at: 0,
        };
        assert!(entry.is_file());
        assert!(!entry.is_directory());
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = DirEntry {
            name: String::from("Documents"),
            path: String::from("/home/Documents"),
            kind: EntryKind::Directory,
            size: 0,
            modified_at: 42,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: DirEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
