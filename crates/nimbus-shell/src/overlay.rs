//! Drag preview overlay
//!
//! The floating preview that follows the pointer during a drag. It is also
//! the element hit testing must see through: `set_hidden` is the style
//! toggle the probe guard flips around each query.

use crate::drag::{DragData, OverlayVisibility};
use crate::math::Vec2;

/// State of the drag preview overlay.
#[derive(Default)]
pub struct DragOverlay {
    preview: Option<DragData>,
    position: Vec2,
    hidden_for_probe: bool,
}

impl DragOverlay {
    /// Create an inactive overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin showing a preview for the dragged entity.
    pub fn begin(&mut self, data: DragData, position: Vec2) {
        self.preview = Some(data);
        self.position = position;
    }

    /// Move the preview with the pointer.
    pub fn follow(&mut self, position: Vec2) {
        if self.preview.is_some() {
            self.position = position;
        }
    }

    /// Stop showing the preview.
    pub fn clear(&mut self) {
        self.preview = None;
        self.hidden_for_probe = false;
    }

    /// Current preview payload, if a drag is active.
    pub fn preview(&self) -> Option<&DragData> {
        self.preview.as_ref()
    }

    /// Current preview position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the overlay should currently be rendered.
    pub fn is_shown(&self) -> bool {
        self.preview.is_some() && !self.hidden_for_probe
    }
}

impl OverlayVisibility for DragOverlay {
    fn set_hidden(&mut self, hidden: bool) {
        self.hidden_for_probe = hidden;
    }
}
