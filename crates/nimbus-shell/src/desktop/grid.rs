//! Icon grid snapping
//!
//! Maps arbitrary pointer coordinates (in usable-area space, below the menu
//! bar) to the nearest grid cell, clamped so an icon's full bounding box
//! stays inside the usable area - never under the menu bar, dock, or off
//! screen. Pure functions of the input and the viewport size.

use crate::math::{Size, Vec2, SHELL_STYLE};

/// Snapping grid for one viewport size.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    viewport: Size,
}

impl GridLayout {
    /// Create a grid for a viewport.
    pub fn new(viewport: Size) -> Self {
        Self { viewport }
    }

    /// The viewport this grid was built for.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Usable desktop area: full width, height minus menu bar and dock.
    pub fn usable_size(&self) -> Size {
        Size::new(
            self.viewport.width,
            self.viewport.height - SHELL_STYLE.menu_bar_height - SHELL_STYLE.dock_height,
        )
    }

    /// Highest valid cell index in each axis.
    pub fn max_cell(&self) -> (u32, u32) {
        let usable = self.usable_size();
        (
            max_index(usable.width, SHELL_STYLE.icon_width),
            max_index(usable.height, SHELL_STYLE.icon_height),
        )
    }

    /// Cell index nearest to a point, clamped to the valid range.
    pub fn cell_of(&self, pos: Vec2) -> (u32, u32) {
        let (max_col, max_row) = self.max_cell();
        (
            nearest_index(pos.x, max_col),
            nearest_index(pos.y, max_row),
        )
    }

    /// Origin of a cell (not clamped; callers pass valid indices).
    pub fn cell_origin(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(
            SHELL_STYLE.grid_margin + col as f32 * SHELL_STYLE.grid_pitch,
            SHELL_STYLE.grid_margin + row as f32 * SHELL_STYLE.grid_pitch,
        )
    }

    /// Snap a point to the nearest valid cell origin.
    pub fn snap(&self, pos: Vec2) -> Vec2 {
        let (col, row) = self.cell_of(pos);
        self.cell_origin(col, row)
    }

    /// First free cell at or after the desired position, scanning in
    /// reading order and wrapping. Falls back to the desired cell when the
    /// grid is full.
    pub fn next_free_cell(&self, desired: Vec2, occupied: &[Vec2]) -> Vec2 {
        let (max_col, max_row) = self.max_cell();
        let cols = max_col + 1;
        let rows = max_row + 1;
        let total = cols * rows;

        let (start_col, start_row) = self.cell_of(desired);
        let start = start_row * cols + start_col;

        for step in 0..total {
            let index = (start + step) % total;
            let origin = self.cell_origin(index % cols, index / cols);
            if !occupied.iter().any(|p| *p == origin) {
                return origin;
            }
        }

        self.snap(desired)
    }
}

fn max_index(usable: f32, icon: f32) -> u32 {
    let raw = ((usable - icon - SHELL_STYLE.grid_margin) / SHELL_STYLE.grid_pitch).floor();
    if raw < 0.0 {
        0
    } else {
        raw as u32
    }
}

fn nearest_index(coord: f32, max: u32) -> u32 {
    let raw = ((coord - SHELL_STYLE.grid_margin) / SHELL_STYLE.grid_pitch).round();
    if raw < 0.0 {
        0
    } else {
        (raw as u32).min(max)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Snapping an already-snapped point is a no-op.
        #[test]
        fn snap_idempotent(x in -2000.0f32..6000.0, y in -2000.0f32..6000.0) {
            let g = GridLayout::new(Size::new(1920.0, 1080.0));
            let once = g.snap(Vec2::new(x, y));
            let twice = g.snap(once);
            prop_assert_eq!(once, twice);
        }

        /// The snapped icon box never leaves the usable area.
        #[test]
        fn snap_bounded(
            x in -2000.0f32..6000.0,
            y in -2000.0f32..6000.0,
            w in 400.0f32..4000.0,
            h in 300.0f32..4000.0,
        ) {
            let g = GridLayout::new(Size::new(w, h));
            let snapped = g.snap(Vec2::new(x, y));
            let usable = g.usable_size();

            prop_assert!(snapped.x >= 0.0);
            prop_assert!(snapped.y >= 0.0);
            if usable.width >= SHELL_STYLE.icon_width + SHELL_STYLE.grid_margin {
                prop_assert!(snapped.x + SHELL_STYLE.icon_width <= usable.width);
            }
            if usable.height >= SHELL_STYLE.icon_height + SHELL_STYLE.grid_margin {
                prop_assert!(snapped.y + SHELL_STYLE.icon_height <= usable.height);
            }
        }
    }
}
