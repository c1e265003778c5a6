//! In-memory filesystem strategy.
//!
//! Provides a BTreeMap-backed hierarchy that doesn't persist data. Used as
//! the fallback when the host exposes no filesystem bridge, and by tests.

use core::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::FsError;
use crate::path::{filename, join_path, normalize_path, parent_path};
use crate::service::FsCapability;
use crate::types::{DirEntry, EntryKind};

/// Metadata record for one path.
#[derive(Clone, Debug)]
struct EntryRecord {
    kind: EntryKind,
    size: u64,
    modified_at: u64,
}

/// Purely virtual filesystem.
pub struct MemoryFs {
    /// Metadata storage (path -> record)
    records: RefCell<BTreeMap<String, EntryRecord>>,
    /// Content storage (path -> content)
    content: RefCell<BTreeMap<String, Vec<u8>>>,
    /// Logical clock for modification timestamps
    now: RefCell<u64>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    /// Create a new empty in-memory filesystem containing only the root.
    pub fn new() -> Self {
        let fs = Self {
            records: RefCell::new(BTreeMap::new()),
            content: RefCell::new(BTreeMap::new()),
            now: RefCell::new(1000),
        };

        fs.records.borrow_mut().insert(
            String::from("/"),
            EntryRecord {
                kind: EntryKind::Directory,
                size: 0,
                modified_at: 1000,
            },
        );

        fs
    }

    /// Get the logical timestamp and advance it.
    fn tick(&self) -> u64 {
        let mut now = self.now.borrow_mut();
        let current = *now;
        *now += 1;
        current
    }

    /// Set the logical clock (for testing).
    pub fn set_now(&self, timestamp: u64) {
        *self.now.borrow_mut() = timestamp;
    }

    fn require_directory(&self, path: &str) -> Result<(), FsError> {
        match self.records.borrow().get(path) {
            Some(r) if r.kind == EntryKind::Directory => Ok(()),
            Some(_) => Err(FsError::NotADirectory),
            None => Err(FsError::NotFound),
        }
    }

    fn entry_at(&self, path: &str) -> Result<DirEntry, FsError> {
        let records = self.records.borrow();
        let record = records.get(path).ok_or(FsError::NotFound)?;
        Ok(DirEntry {
            name: String::from(filename(path)),
            path: String::from(path),
            kind: record.kind,
            size: record.size,
            modified_at: record.modified_at,
        })
    }

    /// Prefix under which all descendants of `path` live.
    fn child_prefix(path: &str) -> String {
        if path == "/" {
            String::from("/")
        } else {
            format!("{}/", path)
        }
    }
}

impl FsCapability for MemoryFs {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        let path = normalize_path(path)?;
        self.require_directory(&path)?;

        let prefix = Self::child_prefix(&path);
        let entries: Vec<DirEntry> = self
            .records
            .borrow()
            .iter()
            .filter(|(k, _)| {
                if *k == &path || !k.starts_with(&prefix) {
                    return false;
                }
                // Must be a direct child (no more slashes after prefix)
                !k[prefix.len()..].contains('/')
            })
            .map(|(k, record)| DirEntry {
                name: String::from(filename(k)),
                path: k.clone(),
                kind: record.kind,
                size: record.size,
                modified_at: record.modified_at,
            })
            .collect();

        Ok(entries)
    }

    fn create_dir(&self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;

        if self.records.borrow().contains_key(&path) {
            return Err(FsError::AlreadyExists);
        }
        self.require_directory(&parent_path(&path))?;

        let now = self.tick();
        self.records.borrow_mut().insert(
            path,
            EntryRecord {
                kind: EntryKind::Directory,
                size: 0,
                modified_at: now,
            },
        );

        Ok(())
    }

    fn create_dir_all(&self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;

        let mut current = String::new();
        for component in path.split('/') {
            if component.is_empty() {
                continue;
            }
            current = join_path(&current, component);

            let exists = self.records.borrow().contains_key(&current);
            if exists {
                // An intermediate file blocks the whole chain
                self.require_directory(&current)?;
            } else {
                let now = self.tick();
                self.records.borrow_mut().insert(
                    current.clone(),
                    EntryRecord {
                        kind: EntryKind::Directory,
                        size: 0,
                        modified_at: now,
                    },
                );
            }
        }

        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;

        if path == "/" {
            return Err(FsError::invalid_path("cannot delete root"));
        }
        if !self.records.borrow().contains_key(&path) {
            return Err(FsError::NotFound);
        }

        // Collect the entry and all descendants
        let prefix = Self::child_prefix(&path);
        let to_remove: Vec<String> = self
            .records
            .borrow()
            .keys()
            .filter(|k| *k == &path || k.starts_with(&prefix))
            .cloned()
            .collect();

        let mut records = self.records.borrow_mut();
        let mut content = self.content.borrow_mut();
        for p in to_remove {
            records.remove(&p);
            content.remove(&p);
        }

        Ok(())
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), FsError> {
        let from = normalize_path(from)?;
        let to = normalize_path(to)?;

        if from == "/" {
            return Err(FsError::invalid_path("cannot rename root"));
        }
        if !self.records.borrow().contains_key(&from) {
            return Err(FsError::NotFound);
        }
        if self.records.borrow().contains_key(&to) {
            return Err(FsError::AlreadyExists);
        }
        self.require_directory(&parent_path(&to))?;

        // Move the entry and every descendant to the new prefix
        let prefix = Self::child_prefix(&from);
        let moved: Vec<String> = self
            .records
            .borrow()
            .keys()
            .filter(|k| *k == &from || k.starts_with(&prefix))
            .cloned()
            .collect();

        let now = self.tick();
        let mut records = self.records.borrow_mut();
        let mut content = self.content.borrow_mut();
        for old in moved {
            let new = format!("{}{}", to, &old[from.len()..]);
            if let Some(mut record) = records.remove(&old) {
                record.modified_at = now;
                records.insert(new.clone(), record);
            }
            if let Some(data) = content.remove(&old) {
                content.insert(new, data);
            }
        }

        Ok(())
    }

    fn copy(&self, from: &str, to: &str) -> Result<(), FsError> {
        let from = normalize_path(from)?;
        let to = normalize_path(to)?;

        match self.records.borrow().get(&from) {
            Some(r) if r.kind == EntryKind::File => {}
            Some(_) => return Err(FsError::NotAFile),
            None => return Err(FsError::NotFound),
        }

        let data = self.read_file(&from)?;
        self.write_file(&to, &data)
    }

    fn copy_dir(&self, from: &str, to: &str) -> Result<(), FsError> {
        let from = normalize_path(from)?;
        let to = normalize_path(to)?;

        self.require_directory(&from)?;
        if to == from || to.starts_with(&Self::child_prefix(&from)) {
            return Err(FsError::invalid_path("cannot copy a directory into itself"));
        }

        self.create_dir_all(&to)?;

        let prefix = Self::child_prefix(&from);
        let descendants: Vec<(String, EntryRecord)> = self
            .records
            .borrow()
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(k, r)| (k.clone(), r.clone()))
            .collect();

        for (old, record) in descendants {
            let new = format!("{}{}", to, &old[from.len()..]);
            match record.kind {
                EntryKind::Directory => self.create_dir_all(&new)?,
                EntryKind::File => {
                    let data = self.read_file(&old)?;
                    self.write_file(&new, &data)?;
                }
            }
        }

        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let path = normalize_path(path)?;

        match self.records.borrow().get(&path) {
            Some(r) if r.kind == EntryKind::File => {}
            Some(_) => return Err(FsError::NotAFile),
            None => return Err(FsError::NotFound),
        }

        self.content
            .borrow()
            .get(&path)
            .cloned()
            .ok_or(FsError::NotFound)
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), FsError> {
        let path = normalize_path(path)?;

        self.require_directory(&parent_path(&path))?;
        if let Some(existing) = self.records.borrow().get(&path) {
            if existing.kind == EntryKind::Directory {
                return Err(FsError::NotAFile);
            }
        }

        let now = self.tick();
        self.records.borrow_mut().insert(
            path.clone(),
            EntryRecord {
                kind: EntryKind::File,
                size: content.len() as u64,
                modified_at: now,
            },
        );
        self.content.borrow_mut().insert(path, content.to_vec());

        Ok(())
    }

    fn exists(&self, path: &str) -> Result<bool, FsError> {
        let path = normalize_path(path)?;
        Ok(self.records.borrow().contains_key(&path))
    }

    fn stat(&self, path: &str) -> Result<DirEntry, FsError> {
        let path = normalize_path(path)?;
        self.entry_at(&path)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
