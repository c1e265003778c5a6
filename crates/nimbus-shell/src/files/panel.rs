//! File-manager panel state
//!
//! Holds the current directory listing and participates in the drag
//! protocol from both ends: its entries are drag sources, and a drop from
//! the desktop copies the backing file into the listed directory.
//!
//! Filesystem calls go through begin/complete pairs so the panel can show
//! a loading state while a host-backed strategy completes out of band; the
//! in-memory strategy completes in the same tick through [`FilePanel::refresh`].

use nimbus_vfs::{join_path, DirEntry, FsCapability, FsError};

use crate::drag::{DragData, DragSource};

/// Directory listing panel.
pub struct FilePanel {
    /// Directory currently listed
    path: String,
    /// Cached listing, directories first
    entries: Vec<DirEntry>,
    /// A refresh is in flight
    loading: bool,
    /// Last operation failure, user-presentable
    error: Option<String>,
}

impl FilePanel {
    /// Create a panel rooted at a directory. The listing is empty until
    /// the first refresh.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// The listed directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The cached listing.
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Whether a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last failure message, cleared by the next successful refresh.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark a refresh as in flight.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the result of a refresh. On failure the previous listing is
    /// kept so the panel never goes blank over a transient error.
    pub fn complete_refresh(&mut self, result: Result<Vec<DirEntry>, FsError>) {
        self.loading = false;
        match result {
            Ok(mut entries) => {
                entries.sort_by(|a, b| {
                    b.is_directory()
                        .cmp(&a.is_directory())
                        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                });
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(path = %self.path, error = %e, "directory refresh failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Refresh the listing through a same-tick strategy.
    pub fn refresh(&mut self, fs: &dyn FsCapability) -> Result<(), FsError> {
        self.begin_refresh();
        let result = fs.read_dir(&self.path);
        let outcome = result.as_ref().map(|_| ()).map_err(|e| e.clone());
        self.complete_refresh(result);
        outcome
    }

    /// Change directory and refresh.
    pub fn navigate(&mut self, path: impl Into<String>, fs: &dyn FsCapability) -> Result<(), FsError> {
        self.path = path.into();
        self.entries.clear();
        self.refresh(fs)
    }

    /// Copy a dropped desktop entry into the listed directory.
    ///
    /// The destination is the listed directory joined with the source
    /// name; an existing entry of that name is overwritten (last write
    /// wins). Purely virtual entities with no backing path are rejected
    /// before any filesystem call.
    pub fn accept_drop(&mut self, data: &DragData, fs: &dyn FsCapability) -> Result<(), FsError> {
        if data.path.is_empty() {
            return Err(FsError::invalid_path("dropped entity has no backing path"));
        }

        let dest = join_path(&self.path, &data.name);
        if data.is_directory {
            fs.copy_dir(&data.path, &dest)?;
        } else {
            fs.copy(&data.path, &dest)?;
        }
        tracing::debug!(from = %data.path, to = %dest, "drop copied into panel directory");
        self.refresh(fs)
    }

    /// Build the drag payload for one listed entry.
    pub fn drag_data(&self, name: &str) -> Option<DragData> {
        let entry = self.entries.iter().find(|e| e.name == name)?;
        Some(DragData {
            name: entry.name.clone(),
            path: entry.path.clone(),
            is_directory: entry.is_directory(),
            source: DragSource::FileManager,
        })
    }
}
