//! Drop-target resolution
//!
//! Maps (drag source, surface under pointer) to the actionable outcome.
//! Windows, the dock, and the menu bar are never drop targets: a drag
//! released over them ends with no effect and the dragged item keeps its
//! prior state, since nothing mutates until a target resolves.

use super::session::{DragSource, DropTarget, Surface};

/// Resolve the actionable drop target for a pointer surface.
///
/// The folder-icon refinement is layered on top of this by the engine:
/// when the icon layer reports a hovered folder, that wins over the
/// generic desktop-background target.
pub fn classify(source: DragSource, surface: Surface) -> Option<DropTarget> {
    match (source, surface) {
        // A file-manager entry dropped in the open becomes a desktop icon
        (DragSource::FileManager, Surface::Desktop) => Some(DropTarget::Desktop),
        // A desktop icon dropped on the panel copies into its directory
        (DragSource::Desktop, Surface::FileManager) => Some(DropTarget::FileManager),
        // A desktop icon dropped in the open repositions in place
        (DragSource::Desktop, Surface::Desktop) => Some(DropTarget::Desktop),
        _ => None,
    }
}
