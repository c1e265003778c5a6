//! Per-window region hit testing

use crate::math::{Rect, Vec2, SHELL_STYLE};

use super::Window;

/// Region of a window for hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    TitleBar,
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    ResizeN,
    ResizeS,
    ResizeE,
    ResizeW,
    ResizeNE,
    ResizeNW,
    ResizeSE,
    ResizeSW,
}

impl WindowRegion {
    /// Check if this region is a resize handle.
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeN
                | WindowRegion::ResizeS
                | WindowRegion::ResizeE
                | WindowRegion::ResizeW
                | WindowRegion::ResizeNE
                | WindowRegion::ResizeNW
                | WindowRegion::ResizeSE
                | WindowRegion::ResizeSW
        )
    }
}

const BUTTON_SIZE: f32 = 14.0;
const BUTTON_SPACING: f32 = 8.0;
const BUTTON_MARGIN: f32 = 10.0;
// Corner handles get a larger hit area for easier diagonal targeting
const CORNER_HANDLE_SIZE: f32 = 12.0;

fn button_rect(window: &Window, slot: f32) -> Rect {
    let x = window.position.x + window.size.width
        - BUTTON_MARGIN
        - BUTTON_SIZE * (slot + 1.0)
        - BUTTON_SPACING * slot;
    let y = window.position.y + (SHELL_STYLE.title_bar_height - BUTTON_SIZE) / 2.0;
    Rect::new(x, y, BUTTON_SIZE, BUTTON_SIZE)
}

impl Window {
    /// Find which region of this window a point hits, if any.
    ///
    /// Buttons take priority over the title bar, corners over edges, and
    /// the title bar over the north edge handle so dragging works across
    /// the full bar width. Resize handles are suppressed while maximized.
    pub fn region_at(&self, pos: Vec2) -> Option<WindowRegion> {
        let rect = self.rect();
        if !rect.contains(pos) {
            return None;
        }

        // Title bar buttons first
        if button_rect(self, 0.0).contains(pos) {
            return Some(WindowRegion::CloseButton);
        }
        if button_rect(self, 1.0).contains(pos) {
            return Some(WindowRegion::MaximizeButton);
        }
        if button_rect(self, 2.0).contains(pos) {
            return Some(WindowRegion::MinimizeButton);
        }

        if !self.maximized {
            let edge = SHELL_STYLE.resize_handle_size;
            let left = rect.x;
            let right = rect.right();
            let top = rect.y;
            let bottom = rect.bottom();

            let in_left_corner = pos.x < left + CORNER_HANDLE_SIZE;
            let in_right_corner = pos.x > right - CORNER_HANDLE_SIZE;
            let in_top_corner = pos.y < top + CORNER_HANDLE_SIZE;
            let in_bottom_corner = pos.y > bottom - CORNER_HANDLE_SIZE;

            // Corners take priority for diagonal resize
            if in_top_corner && in_left_corner {
                return Some(WindowRegion::ResizeNW);
            }
            if in_top_corner && in_right_corner {
                return Some(WindowRegion::ResizeNE);
            }
            if in_bottom_corner && in_left_corner {
                return Some(WindowRegion::ResizeSW);
            }
            if in_bottom_corner && in_right_corner {
                return Some(WindowRegion::ResizeSE);
            }

            // Title bar before edge handles, so dragging works on the bar
            if self.title_bar_rect().contains(pos) {
                return Some(WindowRegion::TitleBar);
            }

            if pos.y < top + edge {
                return Some(WindowRegion::ResizeN);
            }
            if pos.y > bottom - edge {
                return Some(WindowRegion::ResizeS);
            }
            if pos.x < left + edge {
                return Some(WindowRegion::ResizeW);
            }
            if pos.x > right - edge {
                return Some(WindowRegion::ResizeE);
            }
        } else if self.title_bar_rect().contains(pos) {
            return Some(WindowRegion::TitleBar);
        }

        Some(WindowRegion::Content)
    }
}
