//! A single window instance

use crate::math::{Rect, Size, Vec2, SHELL_STYLE};

use super::WindowId;

/// A window in the desktop shell.
///
/// `minimized` and `maximized` are independent flags: a window minimized
/// while maximized keeps both set, and leaving the minimized state returns
/// it to its maximized form without touching the saved geometry (which is
/// reserved for the maximize/restore round trip).
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Application identifier for content routing
    pub app_id: String,
    /// Window title
    pub title: String,
    /// Top-left position in viewport coordinates
    pub position: Vec2,
    /// Window size including frame
    pub size: Size,
    /// Minimum size, fixed at creation
    pub min_size: Size,
    /// Maximum size, fixed at creation (None = no limit)
    pub max_size: Option<Size>,
    /// Hidden from the viewport, restorable from the dock
    pub minimized: bool,
    /// Filling the usable viewport area
    pub maximized: bool,
    /// Z-order (higher = on top)
    pub z_index: u32,
    /// Saved position/size for restore after maximize
    pub(crate) restore_rect: Option<(Vec2, Size)>,
}

impl Window {
    /// Get the window's bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle.
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            SHELL_STYLE.title_bar_height,
        )
    }

    /// Get the content area rectangle (excludes title bar).
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y + SHELL_STYLE.title_bar_height,
            self.size.width,
            self.size.height - SHELL_STYLE.title_bar_height,
        )
    }

    /// Whether the window currently participates in rendering and hit
    /// testing.
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window {
            id: 1,
            app_id: String::from("test"),
            title: String::from("Test"),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(800.0, 600.0),
            min_size: Size::new(200.0, 150.0),
            max_size: None,
            minimized: false,
            maximized: false,
            z_index: 1,
            restore_rect: None,
        }
    }

    #[test]
    fn test_rects() {
        let w = window();

        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 800.0, 600.0));
        assert!((w.title_bar_rect().height - SHELL_STYLE.title_bar_height).abs() < 0.001);
        assert!(
            (w.content_rect().height - (600.0 - SHELL_STYLE.title_bar_height)).abs() < 0.001
        );
    }

    #[test]
    fn test_visibility() {
        let mut w = window();
        assert!(w.is_visible());
        w.minimized = true;
        assert!(!w.is_visible());
    }
}
