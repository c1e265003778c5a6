//! Window frame interaction
//!
//! The draggable/resizable chrome around one window's content. The frame
//! tracks live geometry during a move or resize and reports the final
//! result to the window manager on stop, so a drag that never finishes
//! (e.g. cancelled mid-flight) leaves the manager untouched.
//!
//! Moves and resizes are refused while the window is maximized; only the
//! title bar acts as a move handle, so interactive content inside the
//! window (a file grid, for instance) never drags the window with it.

use crate::math::{Size, Vec2};

use super::{WindowId, WindowManager, WindowRegion};

/// In-flight frame interaction.
#[derive(Clone, Debug)]
enum FrameDrag {
    /// Moving the window by its title bar
    Move {
        window_id: WindowId,
        /// Offset from window origin to the pointer
        offset: Vec2,
        live_position: Vec2,
        /// Size is fixed for the whole move; kept for rendering
        size: Size,
    },
    /// Resizing the window by a handle
    Resize {
        window_id: WindowId,
        handle: WindowRegion,
        /// Window position at start
        start_pos: Vec2,
        /// Window size at start
        start_size: Size,
        /// Pointer position at start
        start_pointer: Vec2,
        live_position: Vec2,
        live_size: Size,
    },
}

/// Per-shell frame interaction state (at most one window is being moved or
/// resized at a time).
#[derive(Default)]
pub struct WindowFrame {
    drag: Option<FrameDrag>,
}

impl WindowFrame {
    /// Create an idle frame controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a move or resize is in progress.
    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// The window currently being moved/resized.
    pub fn dragged_window(&self) -> Option<WindowId> {
        match &self.drag {
            Some(FrameDrag::Move { window_id, .. }) => Some(*window_id),
            Some(FrameDrag::Resize { window_id, .. }) => Some(*window_id),
            None => None,
        }
    }

    /// Live geometry of the dragged window, for rendering mid-drag.
    pub fn live_geometry(&self) -> Option<(WindowId, Vec2, Size)> {
        match &self.drag {
            Some(FrameDrag::Move {
                window_id,
                live_position,
                size,
                ..
            }) => Some((*window_id, *live_position, *size)),
            Some(FrameDrag::Resize {
                window_id,
                live_position,
                live_size,
                ..
            }) => Some((*window_id, *live_position, *live_size)),
            None => None,
        }
    }

    /// Start moving a window from a title-bar press. Refused while
    /// maximized or when the id is stale.
    pub fn begin_move(
        &mut self,
        manager: &WindowManager,
        id: WindowId,
        pointer: Vec2,
    ) -> bool {
        let window = match manager.get(id) {
            Some(w) if !w.maximized => w,
            _ => return false,
        };
        self.drag = Some(FrameDrag::Move {
            window_id: id,
            offset: pointer - window.position,
            live_position: window.position,
            size: window.size,
        });
        true
    }

    /// Start resizing a window from a handle press. Refused while
    /// maximized, for non-resize regions, or when the id is stale.
    pub fn begin_resize(
        &mut self,
        manager: &WindowManager,
        id: WindowId,
        handle: WindowRegion,
        pointer: Vec2,
    ) -> bool {
        if !handle.is_resize() {
            return false;
        }
        let window = match manager.get(id) {
            Some(w) if !w.maximized => w,
            _ => return false,
        };
        self.drag = Some(FrameDrag::Resize {
            window_id: id,
            handle,
            start_pos: window.position,
            start_size: window.size,
            start_pointer: pointer,
            live_position: window.position,
            live_size: window.size,
        });
        true
    }

    /// Advance the interaction with a new pointer position. Returns true
    /// when the pointer was consumed.
    pub fn update(&mut self, manager: &WindowManager, pointer: Vec2) -> bool {
        match &mut self.drag {
            Some(FrameDrag::Move {
                offset,
                live_position,
                ..
            }) => {
                *live_position = pointer - *offset;
                true
            }
            Some(FrameDrag::Resize {
                window_id,
                handle,
                start_pos,
                start_size,
                start_pointer,
                live_position,
                live_size,
            }) => {
                let (min_size, max_size) = match manager.get(*window_id) {
                    Some(w) => (w.min_size, w.max_size),
                    None => return true,
                };
                let delta = pointer - *start_pointer;
                let (pos, size) =
                    calculate_resize(*handle, *start_pos, *start_size, delta, min_size, max_size);
                *live_position = pos;
                *live_size = size;
                true
            }
            None => false,
        }
    }

    /// Finish the interaction, reporting the final geometry to the
    /// manager. Returns the affected window id. Stale ids fall through as
    /// no-ops inside the manager.
    pub fn finish(&mut self, manager: &mut WindowManager, pointer: Vec2) -> Option<WindowId> {
        self.update(manager, pointer);
        match self.drag.take() {
            Some(FrameDrag::Move {
                window_id,
                live_position,
                ..
            }) => {
                manager.set_position(window_id, live_position);
                Some(window_id)
            }
            Some(FrameDrag::Resize {
                window_id,
                live_position,
                live_size,
                ..
            }) => {
                // Resizing from a north/west handle shifts the origin, so
                // both are reported
                manager.set_position(window_id, live_position);
                manager.set_size(window_id, live_size);
                Some(window_id)
            }
            None => None,
        }
    }

    /// Abandon the interaction without reporting anything.
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

/// Compute the geometry resulting from dragging a resize handle.
///
/// The edge opposite the handle stays fixed, including when the size clamps
/// against the window's min/max constraints.
pub fn calculate_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min_size: Size,
    max_size: Option<Size>,
) -> (Vec2, Size) {
    let (grow_e, grow_w) = match handle {
        WindowRegion::ResizeE | WindowRegion::ResizeNE | WindowRegion::ResizeSE => (true, false),
        WindowRegion::ResizeW | WindowRegion::ResizeNW | WindowRegion::ResizeSW => (false, true),
        _ => (false, false),
    };
    let (grow_s, grow_n) = match handle {
        WindowRegion::ResizeS | WindowRegion::ResizeSE | WindowRegion::ResizeSW => (true, false),
        WindowRegion::ResizeN | WindowRegion::ResizeNE | WindowRegion::ResizeNW => (false, true),
        _ => (false, false),
    };

    let (x, width) = resize_axis(
        start_pos.x,
        start_size.width,
        delta.x,
        grow_e,
        grow_w,
        min_size.width,
        max_size.map(|m| m.width),
    );
    let (y, height) = resize_axis(
        start_pos.y,
        start_size.height,
        delta.y,
        grow_s,
        grow_n,
        min_size.height,
        max_size.map(|m| m.height),
    );

    (Vec2::new(x, y), Size::new(width, height))
}

/// One axis of the resize: `positive` grows toward +axis (east/south),
/// `negative` grows toward -axis (west/north) and moves the origin.
fn resize_axis(
    start: f32,
    length: f32,
    delta: f32,
    positive: bool,
    negative: bool,
    min: f32,
    max: Option<f32>,
) -> (f32, f32) {
    let mut new_len = if positive {
        length + delta
    } else if negative {
        length - delta
    } else {
        length
    };

    new_len = new_len.max(min);
    if let Some(max) = max {
        new_len = new_len.min(max);
    }

    let new_start = if negative {
        // Far edge stays put
        start + (length - new_len)
    } else {
        start
    };

    (new_start, new_len)
}
