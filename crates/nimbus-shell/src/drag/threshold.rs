//! Click-vs-drag disambiguation
//!
//! A pointer-down does not start a drag by itself. It arms a pending
//! gesture; only once the pointer travels past a fixed threshold in either
//! axis does the drag begin. A release before that is a plain click. The
//! desktop icon layer and the file-manager panel both run their presses
//! through this.

use crate::math::{Vec2, SHELL_STYLE};

/// Pending-drag detector for one surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragArm {
    pending: Option<Vec2>,
}

impl DragArm {
    /// Create an idle detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-down.
    pub fn press(&mut self, pos: Vec2) {
        self.pending = Some(pos);
    }

    /// Feed a pointer-move. Returns the armed start position once the
    /// movement exceeds the threshold, at which point the caller starts
    /// the real drag and the detector disarms.
    pub fn motion(&mut self, pos: Vec2) -> Option<Vec2> {
        let start = self.pending?;
        let dx = (pos.x - start.x).abs();
        let dy = (pos.y - start.y).abs();
        if dx > SHELL_STYLE.drag_threshold || dy > SHELL_STYLE.drag_threshold {
            self.pending = None;
            Some(start)
        } else {
            None
        }
    }

    /// Feed a pointer-up. Returns true when the press never became a drag,
    /// i.e. the gesture was a click.
    pub fn release(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a press is armed but the threshold has not been crossed.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
