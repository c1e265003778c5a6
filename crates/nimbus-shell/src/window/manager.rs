//! Window manager for the desktop shell
//!
//! Manages window lifecycle (open, close), positioning, sizing, z-order,
//! the active window, and hit testing for input routing.
//!
//! ## Key Invariants
//!
//! - Each window has a unique ID
//! - The z counter is monotonic: every open/focus/restore assigns a fresh,
//!   strictly higher z-index
//! - At most one window is active; closing or minimizing the active window
//!   hands activity to the highest-z remaining visible window
//! - Operations on unknown ids are no-ops, never errors - a close racing a
//!   late geometry callback must not throw
//! - Single-instance apps never get a second window

use std::collections::HashMap;

use crate::math::{Rect, Size, Vec2, SHELL_STYLE};
use crate::registry::AppDefinition;

use super::{Window, WindowId, WindowRegion};

/// Initial position of the first cascaded window.
const CASCADE_ORIGIN: Vec2 = Vec2::new(96.0, 64.0);

/// Window manager handling window lifecycle, z-order, and the active
/// window.
pub struct WindowManager {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// Currently active window, if any
    active: Option<WindowId>,
    /// Next window ID
    next_id: u64,
    /// Next z-order value
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager.
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            active: None,
            next_id: 1,
            next_z: 100,
        }
    }

    fn bump_z(&mut self) -> u32 {
        self.next_z += 1;
        self.next_z
    }

    /// Open a window for an application.
    ///
    /// For single-instance apps with a live window this focuses (and
    /// un-minimizes) the existing one and returns its id instead of
    /// creating a duplicate.
    pub fn open(&mut self, app: &AppDefinition) -> WindowId {
        if app.single_instance {
            let existing = self
                .windows
                .values()
                .find(|w| w.app_id == app.id)
                .map(|w| w.id);
            if let Some(id) = existing {
                tracing::debug!(app = %app.id, window = id, "single-instance app refocused");
                if self.windows[&id].minimized {
                    self.restore(id);
                } else {
                    self.focus(id);
                }
                return id;
            }
        }

        let id = self.next_id;
        self.next_id += 1;

        // Cascade from a fixed origin, wrapping so long sessions don't walk
        // windows off screen
        let slot = (self.windows.len() as u32) % SHELL_STYLE.cascade_wrap;
        let offset = slot as f32 * SHELL_STYLE.cascade_step;
        let position = Vec2::new(CASCADE_ORIGIN.x + offset, CASCADE_ORIGIN.y + offset);

        let z_index = self.bump_z();
        let window = Window {
            id,
            app_id: app.id.clone(),
            title: app.name.clone(),
            position,
            size: app.default_size,
            min_size: app.min_size,
            max_size: app.max_size,
            minimized: false,
            maximized: false,
            z_index,
            restore_rect: None,
        };

        tracing::debug!(app = %app.id, window = id, "window opened");
        self.windows.insert(id, window);
        self.active = Some(id);

        id
    }

    /// Close a window. The active window falls to the highest-z remaining
    /// visible window.
    pub fn close(&mut self, id: WindowId) {
        if self.windows.remove(&id).is_none() {
            return;
        }
        tracing::debug!(window = id, "window closed");
        if self.active == Some(id) {
            self.active = self.top_visible();
        }
    }

    /// Get a window by ID.
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Get a mutable window by ID.
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// The currently active window id.
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// Focus a window: fresh top z-index, marked active. No-op while
    /// minimized.
    pub fn focus(&mut self, id: WindowId) {
        let z = self.next_z + 1;
        if let Some(window) = self.windows.get_mut(&id) {
            if window.minimized {
                return;
            }
            window.z_index = z;
            self.next_z = z;
            self.active = Some(id);
        }
    }

    /// Minimize a window. Geometry is untouched; activity falls to the
    /// highest-z remaining visible window.
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.minimized = true;
            if self.active == Some(id) {
                self.active = self.top_visible();
            }
        }
    }

    /// Maximize a window to fill `bounds`, saving the current geometry for
    /// restore.
    pub fn maximize(&mut self, id: WindowId, bounds: Rect) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.maximized {
                return;
            }
            window.restore_rect = Some((window.position, window.size));
            window.maximized = true;
            window.position = bounds.position();
            window.size = bounds.size();
        }
    }

    /// Restore a window.
    ///
    /// A minimized window comes back to the front with whatever geometry it
    /// had (minimize never altered it). A maximized window gets its saved
    /// geometry back.
    pub fn restore(&mut self, id: WindowId) {
        let z = self.next_z + 1;
        if let Some(window) = self.windows.get_mut(&id) {
            if window.minimized {
                window.minimized = false;
                window.z_index = z;
                self.next_z = z;
                self.active = Some(id);
            } else if window.maximized {
                if let Some((pos, size)) = window.restore_rect.take() {
                    window.position = pos;
                    window.size = size;
                }
                window.maximized = false;
            }
        }
    }

    /// Move a window to a new position.
    ///
    /// A manual move ends the maximized state and discards the saved
    /// geometry so a later restore cannot apply a stale rect.
    pub fn set_position(&mut self, id: WindowId, position: Vec2) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.position = position;
            window.maximized = false;
            window.restore_rect = None;
        }
    }

    /// Resize a window, clamped to its min/max constraints. Like
    /// `set_position` this ends the maximized state.
    pub fn set_size(&mut self, id: WindowId, size: Size) {
        if let Some(window) = self.windows.get_mut(&id) {
            let mut width = size.width.max(window.min_size.width);
            let mut height = size.height.max(window.min_size.height);
            if let Some(max) = window.max_size {
                width = width.min(max.width);
                height = height.min(max.height);
            }
            window.size = Size::new(width, height);
            window.maximized = false;
            window.restore_rect = None;
        }
    }

    /// Update a window's title.
    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.title = title.into();
        }
    }

    /// Get windows sorted by z-order (back to front).
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get all windows.
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Find which region of which window is at a position (topmost wins).
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_index));

        for window in windows {
            if window.minimized {
                continue;
            }
            if let Some(region) = window.region_at(pos) {
                return Some((window.id, region));
            }
        }
        None
    }

    /// Get the number of windows.
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Highest-z window that is not minimized.
    fn top_visible(&self) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AppRegistry;

    fn registry() -> AppRegistry {
        AppRegistry::with_builtins()
    }

    #[test]
    fn test_open_assigns_active_and_z() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let a = wm.open(registry.get("notes").unwrap());
        let b = wm.open(registry.get("terminal").unwrap());

        assert_eq!(wm.count(), 2);
        assert_eq!(wm.active(), Some(b));
        assert!(wm.get(b).unwrap().z_index > wm.get(a).unwrap().z_index);
    }

    #[test]
    fn test_cascade_positions_distinct() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let a = wm.open(registry.get("notes").unwrap());
        let b = wm.open(registry.get("notes").unwrap());

        let pa = wm.get(a).unwrap().position;
        let pb = wm.get(b).unwrap().position;
        assert!((pb.x - pa.x - SHELL_STYLE.cascade_step).abs() < 0.001);
        assert!((pb.y - pa.y - SHELL_STYLE.cascade_step).abs() < 0.001);
    }

    #[test]
    fn test_single_instance_reuses_window() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let first = wm.open(registry.get("settings").unwrap());
        wm.open(registry.get("notes").unwrap());
        let again = wm.open(registry.get("settings").unwrap());

        assert_eq!(first, again);
        assert_eq!(
            wm.all_windows().filter(|w| w.app_id == "settings").count(),
            1
        );
        assert_eq!(wm.active(), Some(first));
    }

    #[test]
    fn test_single_instance_unminimizes() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let id = wm.open(registry.get("settings").unwrap());
        wm.minimize(id);
        let again = wm.open(registry.get("settings").unwrap());

        assert_eq!(id, again);
        assert!(!wm.get(id).unwrap().minimized);
        assert_eq!(wm.active(), Some(id));
    }

    #[test]
    fn test_focus_is_strictly_monotonic() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let a = wm.open(registry.get("notes").unwrap());
        let b = wm.open(registry.get("terminal").unwrap());
        wm.focus(a);

        assert_eq!(wm.active(), Some(a));
        assert!(wm.get(a).unwrap().z_index > wm.get(b).unwrap().z_index);

        wm.focus(b);
        assert!(wm.get(b).unwrap().z_index > wm.get(a).unwrap().z_index);
    }

    #[test]
    fn test_focus_minimized_is_noop() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let a = wm.open(registry.get("notes").unwrap());
        let b = wm.open(registry.get("terminal").unwrap());
        wm.minimize(a);

        wm.focus(a);
        assert_eq!(wm.active(), Some(b));
        assert!(wm.get(a).unwrap().minimized);
    }

    #[test]
    fn test_close_active_reassigns_to_highest_z() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let a = wm.open(registry.get("notes").unwrap());
        let b = wm.open(registry.get("notes").unwrap());
        let c = wm.open(registry.get("notes").unwrap());

        assert_eq!(wm.active(), Some(c));
        wm.close(c);
        assert_eq!(wm.active(), Some(b));
        wm.close(b);
        assert_eq!(wm.active(), Some(a));
        wm.close(a);
        assert_eq!(wm.active(), None);
    }

    #[test]
    fn test_minimize_keeps_geometry() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let id = wm.open(registry.get("notes").unwrap());
        let pos = wm.get(id).unwrap().position;
        let size = wm.get(id).unwrap().size;

        wm.minimize(id);
        wm.restore(id);

        let w = wm.get(id).unwrap();
        assert_eq!(w.position, pos);
        assert_eq!(w.size, size);
        assert!(!w.minimized);
    }

    #[test]
    fn test_maximize_restore_round_trip() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let id = wm.open(registry.get("notes").unwrap());
        wm.set_position(id, Vec2::new(50.0, 50.0));
        wm.set_size(id, Size::new(400.0, 300.0));

        wm.maximize(id, Rect::new(0.0, 28.0, 1920.0, 972.0));
        let w = wm.get(id).unwrap();
        assert!(w.maximized);
        assert_eq!(w.position, Vec2::new(0.0, 28.0));
        assert_eq!(w.size, Size::new(1920.0, 972.0));

        wm.restore(id);
        let w = wm.get(id).unwrap();
        assert!(!w.maximized);
        assert_eq!(w.position, Vec2::new(50.0, 50.0));
        assert_eq!(w.size, Size::new(400.0, 300.0));
    }

    #[test]
    fn test_minimize_while_maximized_round_trip() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let id = wm.open(registry.get("notes").unwrap());
        wm.maximize(id, Rect::new(0.0, 28.0, 1920.0, 972.0));
        wm.minimize(id);

        let w = wm.get(id).unwrap();
        assert!(w.minimized);
        assert!(w.maximized);

        // Leaving minimized returns to the maximized form
        wm.restore(id);
        let w = wm.get(id).unwrap();
        assert!(!w.minimized);
        assert!(w.maximized);

        // A second restore unwinds the maximize
        wm.restore(id);
        assert!(!wm.get(id).unwrap().maximized);
    }

    #[test]
    fn test_manual_move_discards_saved_geometry() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let id = wm.open(registry.get("notes").unwrap());
        wm.maximize(id, Rect::new(0.0, 28.0, 1920.0, 972.0));
        wm.set_position(id, Vec2::new(10.0, 40.0));

        let w = wm.get(id).unwrap();
        assert!(!w.maximized);
        assert!(w.restore_rect.is_none());

        // A later restore must not resurrect pre-maximize geometry
        wm.restore(id);
        assert_eq!(wm.get(id).unwrap().position, Vec2::new(10.0, 40.0));
    }

    #[test]
    fn test_set_size_clamps_to_constraints() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let id = wm.open(registry.get("calculator").unwrap());
        wm.set_size(id, Size::new(10.0, 10.0));
        assert_eq!(wm.get(id).unwrap().size, Size::new(320.0, 480.0));

        wm.set_size(id, Size::new(5000.0, 5000.0));
        assert_eq!(wm.get(id).unwrap().size, Size::new(480.0, 720.0));
    }

    #[test]
    fn test_stale_ids_are_noops() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let id = wm.open(registry.get("notes").unwrap());
        wm.close(id);

        // None of these may panic or change anything
        wm.close(id);
        wm.focus(id);
        wm.minimize(id);
        wm.restore(id);
        wm.set_position(id, Vec2::ZERO);
        wm.set_size(id, Size::new(100.0, 100.0));
        wm.maximize(id, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(wm.count(), 0);
    }

    #[test]
    fn test_region_at_prefers_topmost() {
        let registry = registry();
        let mut wm = WindowManager::new();

        let a = wm.open(registry.get("notes").unwrap());
        let b = wm.open(registry.get("notes").unwrap());
        // Overlap both at the same spot
        wm.set_position(a, Vec2::new(100.0, 100.0));
        wm.set_position(b, Vec2::new(100.0, 100.0));

        let (hit, _) = wm.region_at(Vec2::new(300.0, 300.0)).unwrap();
        assert_eq!(hit, b);

        wm.focus(a);
        let (hit, _) = wm.region_at(Vec2::new(300.0, 300.0)).unwrap();
        assert_eq!(hit, a);
    }
}
