//! State snapshot serialization
//!
//! Serializes the desktop icon layout, open window geometry, and the panel
//! directory so a session can be rebuilt. The format is plain JSON; where
//! it is stored is the embedder's concern. Drag state is never captured -
//! a session exists only while a drag is physically in progress.

use serde::{Deserialize, Serialize};

use crate::desktop::DesktopIcon;
use crate::engine::ShellEngine;
use crate::error::{ShellError, ShellResult};
use crate::math::{Size, Vec2};

/// Persisted form of one open window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedWindow {
    pub app_id: String,
    pub title: String,
    pub position: Vec2,
    pub size: Size,
    pub minimized: bool,
    pub maximized: bool,
}

/// A restorable snapshot of shell state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Desktop icons with their grid positions
    pub icons: Vec<DesktopIcon>,
    /// Open windows, back to front, so restore preserves stacking
    pub windows: Vec<PersistedWindow>,
    /// Directory listed by the file panel
    pub panel_path: String,
}

impl Snapshot {
    /// Capture the current shell state.
    pub fn capture(engine: &ShellEngine) -> Self {
        let windows = engine
            .windows
            .windows_by_z()
            .into_iter()
            .map(|w| PersistedWindow {
                app_id: w.app_id.clone(),
                title: w.title.clone(),
                position: w.position,
                size: w.size,
                minimized: w.minimized,
                maximized: w.maximized,
            })
            .collect();

        Self {
            icons: engine.icons.icons().to_vec(),
            windows,
            panel_path: String::from(engine.panel.path()),
        }
    }

    /// Rebuild shell state from this snapshot.
    ///
    /// Windows whose app is no longer registered are skipped; a maximized
    /// window restores into the current usable area rather than its old
    /// one.
    pub fn apply(self, engine: &mut ShellEngine) -> ShellResult<()> {
        engine.icons.restore_icons(self.icons);

        for persisted in self.windows {
            let id = match engine.open_app(&persisted.app_id) {
                Ok(id) => id,
                Err(ShellError::AppNotFound(app)) => {
                    tracing::warn!(app = %app, "snapshot window skipped, app not registered");
                    continue;
                }
                Err(e) => return Err(e),
            };
            engine.windows.set_title(id, persisted.title);
            engine.windows.set_position(id, persisted.position);
            engine.windows.set_size(id, persisted.size);
            if persisted.maximized {
                engine.toggle_maximize(id);
            }
            if persisted.minimized {
                engine.windows.minimize(id);
            }
        }

        if let Err(e) = engine.navigate_panel(self.panel_path) {
            tracing::warn!(error = %e, "snapshot panel directory unavailable");
        }
        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> ShellResult<String> {
        serde_json::to_string(self).map_err(|e| ShellError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> ShellResult<Self> {
        serde_json::from_str(json).map_err(|e| ShellError::SerializationError(e.to_string()))
    }
}
