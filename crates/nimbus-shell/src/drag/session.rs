//! Drag session state

use crate::desktop::IconId;
use crate::math::Vec2;

/// Which surface a drag originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Desktop,
    FileManager,
}

/// The entity being dragged.
#[derive(Clone, Debug, PartialEq)]
pub struct DragData {
    /// Display name of the entry
    pub name: String,
    /// Backing path; empty for purely virtual entities
    pub path: String,
    /// Folder rather than file
    pub is_directory: bool,
    /// Originating surface
    pub source: DragSource,
}

/// UI surface classification under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// Desktop background (or an icon on it)
    Desktop,
    /// The file-manager panel
    FileManager,
    /// Any window chrome or content
    Window,
    /// The dock
    Dock,
    /// The menu bar
    MenuBar,
}

/// Actionable drop target for the current pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Desktop background: create or reposition an icon
    Desktop,
    /// File-manager panel: copy into the current directory
    FileManager,
    /// A folder icon on the desktop: move into that folder
    FolderIcon(IconId),
}

/// The process-wide drag session. Exists if and only if a drag is in
/// progress.
#[derive(Clone, Debug)]
pub struct DragSession {
    /// What is being dragged
    pub data: DragData,
    /// Current pointer position, updated on every move
    pub pointer: Vec2,
    /// Pointer position at drag initiation
    pub start: Vec2,
    /// Current drop-target classification, recomputed on every move
    pub target: Option<DropTarget>,
}
