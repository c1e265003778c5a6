//! Drag coordinator state machine
//!
//! Idle -> Dragging -> Idle. All transitions are tolerant of event-ordering
//! races: operations invalid in the current state are no-ops, never panics.
//! Side effects belong to the caller - `end_drag` hands back the final
//! session and the caller performs the drop action, so cancellation can
//! never leave a half-applied drop.

use crate::math::Vec2;

use super::session::{DragData, DragSession, DropTarget};

/// Owner of the at-most-one drag session.
#[derive(Default)]
pub struct DragCoordinator {
    session: Option<DragSession>,
}

impl DragCoordinator {
    /// Create an idle coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Begin a drag session.
    ///
    /// Starting while a session is already active replaces it. A stuck
    /// session (a missed pointer-up) would otherwise wedge every future
    /// drag, so the newest gesture wins.
    pub fn start_drag(&mut self, data: DragData, start: Vec2) {
        if let Some(old) = &self.session {
            tracing::warn!(
                replaced = %old.data.name,
                starting = %data.name,
                "drag started while another was active; replacing"
            );
        }
        tracing::debug!(name = %data.name, source = ?data.source, "drag started");
        self.session = Some(DragSession {
            data,
            pointer: start,
            start,
            target: None,
        });
    }

    /// Update the pointer position. No-op while idle.
    pub fn update_pointer(&mut self, pos: Vec2) {
        if let Some(session) = &mut self.session {
            session.pointer = pos;
        }
    }

    /// Record the drop-target classification for the current pointer
    /// position. No-op while idle.
    pub fn set_target(&mut self, target: Option<DropTarget>) {
        if let Some(session) = &mut self.session {
            session.target = target;
        }
    }

    /// End the drag, returning the final session for the caller to act on.
    /// Returns None while idle.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        let session = self.session.take();
        if let Some(s) = &session {
            tracing::debug!(name = %s.data.name, target = ?s.target, "drag ended");
        }
        session
    }

    /// Discard the drag without acting on it (Escape). No-op while idle.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(name = %session.data.name, "drag cancelled");
        }
    }
}
