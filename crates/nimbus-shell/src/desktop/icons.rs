//! Desktop icons
//!
//! Positioned, named references to applications, files, and folders. The
//! layer owns placement (always grid-aligned, never silently overlapping)
//! and the icon side of the drag protocol: which icon is being dragged and
//! which folder icon is currently highlighted as a nested drop target.

use serde::{Deserialize, Serialize};

use crate::drag::{DragData, DragSource};
use crate::math::{Rect, Size, Vec2, SHELL_STYLE};

use super::{GridLayout, IconId};

/// One desktop icon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    /// Unique identifier
    pub id: IconId,
    /// Display name
    pub name: String,
    /// Semantic icon key
    pub icon: String,
    /// Grid-snapped position in usable-area coordinates
    pub position: Vec2,
    /// Application shortcut target
    pub app_id: Option<String>,
    /// Backing filesystem path
    pub file_path: Option<String>,
    /// File rather than folder
    pub is_file: bool,
    /// Precomputed preview URL
    pub thumbnail: Option<String>,
}

impl DesktopIcon {
    /// Bounding box used for hit testing and overlap checks.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            SHELL_STYLE.icon_width,
            SHELL_STYLE.icon_height,
        )
    }

    /// Whether this icon represents a folder that can receive drops.
    pub fn is_folder(&self) -> bool {
        !self.is_file && self.app_id.is_none()
    }
}

/// Configuration for creating an icon.
#[derive(Clone, Debug, Default)]
pub struct IconConfig {
    pub name: String,
    pub icon: String,
    /// Desired position (None = first free cell)
    pub position: Option<Vec2>,
    pub app_id: Option<String>,
    pub file_path: Option<String>,
    pub is_file: bool,
    pub thumbnail: Option<String>,
}

/// The desktop icon layer.
pub struct IconLayer {
    icons: Vec<DesktopIcon>,
    grid: GridLayout,
    /// Icon currently being dragged from this layer
    dragging: Option<IconId>,
    /// Folder icon highlighted as a nested drop target
    hovered_folder: Option<IconId>,
}

impl IconLayer {
    /// Create an empty layer for a viewport.
    pub fn new(viewport: Size) -> Self {
        Self {
            icons: Vec::new(),
            grid: GridLayout::new(viewport),
            dragging: None,
            hovered_folder: None,
        }
    }

    /// The layer's snapping grid.
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// Rebuild the grid for a new viewport size. Existing icons re-snap so
    /// none is left outside the shrunk usable area.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.grid = GridLayout::new(viewport);
        let grid = self.grid;
        for icon in &mut self.icons {
            icon.position = grid.snap(icon.position);
        }
    }

    /// All icons, in creation order.
    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    /// Get an icon by id.
    pub fn get(&self, id: IconId) -> Option<&DesktopIcon> {
        self.icons.iter().find(|i| i.id == id)
    }

    /// Number of icons.
    pub fn count(&self) -> usize {
        self.icons.len()
    }

    /// Add an icon, snapping to the grid and nudging to the next free cell
    /// when the desired cell is taken.
    pub fn add(&mut self, config: IconConfig) -> IconId {
        let occupied: Vec<Vec2> = self.icons.iter().map(|i| i.position).collect();
        let desired = config.position.unwrap_or(Vec2::ZERO);
        let position = self.grid.next_free_cell(desired, &occupied);

        let id = IconId::new_v4();
        tracing::debug!(icon = %config.name, ?position, "desktop icon added");
        self.icons.push(DesktopIcon {
            id,
            name: config.name,
            icon: config.icon,
            position,
            app_id: config.app_id,
            file_path: config.file_path,
            is_file: config.is_file,
            thumbnail: config.thumbnail,
        });
        id
    }

    /// Replace the whole icon set (snapshot restore). Positions re-snap to
    /// the current grid.
    pub fn restore_icons(&mut self, icons: Vec<DesktopIcon>) {
        self.icons = icons;
        let grid = self.grid;
        for icon in &mut self.icons {
            icon.position = grid.snap(icon.position);
        }
    }

    /// Remove an icon. Stale ids are no-ops.
    pub fn remove(&mut self, id: IconId) -> Option<DesktopIcon> {
        let index = self.icons.iter().position(|i| i.id == id)?;
        Some(self.icons.remove(index))
    }

    /// Move an icon to the cell nearest `pos`, nudging off occupied cells.
    /// Stale ids are no-ops.
    pub fn reposition(&mut self, id: IconId, pos: Vec2) {
        let occupied: Vec<Vec2> = self
            .icons
            .iter()
            .filter(|i| i.id != id)
            .map(|i| i.position)
            .collect();
        let target = self.grid.next_free_cell(pos, &occupied);
        if let Some(icon) = self.icons.iter_mut().find(|i| i.id == id) {
            icon.position = target;
        }
    }

    /// Topmost icon whose bounding box contains the point (later icons are
    /// rendered on top).
    pub fn icon_at(&self, pos: Vec2) -> Option<&DesktopIcon> {
        self.icons.iter().rev().find(|i| i.rect().contains(pos))
    }

    // ========== Drag Protocol ==========

    /// Mark an icon as the active drag source and build its drag payload.
    pub fn begin_icon_drag(&mut self, id: IconId) -> Option<DragData> {
        let icon = self.icons.iter().find(|i| i.id == id)?;
        self.dragging = Some(id);
        Some(DragData {
            name: icon.name.clone(),
            path: icon.file_path.clone().unwrap_or_default(),
            is_directory: !icon.is_file,
            source: DragSource::Desktop,
        })
    }

    /// The icon currently dragged from this layer.
    pub fn dragging_icon(&self) -> Option<IconId> {
        self.dragging
    }

    /// Clear drag bookkeeping (drop finished or cancelled).
    pub fn end_icon_drag(&mut self) {
        self.dragging = None;
        self.hovered_folder = None;
    }

    /// Track pointer-enter/leave over folder icons during a drag. A folder
    /// becomes the highlighted nested target unless it is the dragged icon
    /// itself.
    pub fn update_drag_hover(&mut self, pos: Vec2) {
        self.hovered_folder = self
            .icon_at(pos)
            .filter(|i| i.is_folder() && Some(i.id) != self.dragging)
            .map(|i| i.id);
    }

    /// Clear the folder highlight (pointer left the desktop surface).
    pub fn clear_drag_hover(&mut self) {
        self.hovered_folder = None;
    }

    /// The folder icon currently highlighted as a drop target.
    pub fn hovered_folder(&self) -> Option<IconId> {
        self.hovered_folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> IconLayer {
        IconLayer::new(Size::new(1920.0, 1080.0))
    }

    fn file_icon(name: &str, pos: Vec2) -> IconConfig {
        IconConfig {
            name: String::from(name),
            icon: String::from("file"),
            position: Some(pos),
            file_path: Some(format!("/Desktop/{}", name)),
            is_file: true,
            ..Default::default()
        }
    }

    fn folder_icon(name: &str, pos: Vec2) -> IconConfig {
        IconConfig {
            name: String::from(name),
            icon: String::from("folder"),
            position: Some(pos),
            file_path: Some(format!("/Desktop/{}", name)),
            is_file: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_add_snaps_position() {
        let mut layer = layer();
        let id = layer.add(file_icon("a.txt", Vec2::new(70.0, 77.0)));

        assert_eq!(layer.get(id).unwrap().position, Vec2::new(110.0, 110.0));
    }

    #[test]
    fn test_add_nudges_on_collision() {
        let mut layer = layer();
        let first = layer.add(file_icon("a.txt", Vec2::new(20.0, 20.0)));
        let second = layer.add(file_icon("b.txt", Vec2::new(20.0, 20.0)));

        let pa = layer.get(first).unwrap().position;
        let pb = layer.get(second).unwrap().position;
        assert_ne!(pa, pb);
        assert_eq!(pb, Vec2::new(110.0, 20.0));
    }

    #[test]
    fn test_reposition_snaps_and_ignores_self_collision() {
        let mut layer = layer();
        let id = layer.add(file_icon("a.txt", Vec2::new(20.0, 20.0)));

        // Dropping almost where it already is keeps the same cell
        layer.reposition(id, Vec2::new(25.0, 28.0));
        assert_eq!(layer.get(id).unwrap().position, Vec2::new(20.0, 20.0));

        layer.reposition(id, Vec2::new(472.0, 383.0));
        assert_eq!(layer.get(id).unwrap().position, Vec2::new(470.0, 380.0));
    }

    #[test]
    fn test_icon_at_uses_bounding_box() {
        let mut layer = layer();
        let id = layer.add(file_icon("a.txt", Vec2::new(20.0, 20.0)));

        assert_eq!(layer.icon_at(Vec2::new(60.0, 100.0)).map(|i| i.id), Some(id));
        assert!(layer.icon_at(Vec2::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_folder_hover_excludes_dragged_icon() {
        let mut layer = layer();
        let folder = layer.add(folder_icon("Projects", Vec2::new(20.0, 20.0)));
        let file = layer.add(file_icon("a.txt", Vec2::new(110.0, 20.0)));

        layer.begin_icon_drag(file).unwrap();

        // Hovering the folder highlights it
        layer.update_drag_hover(Vec2::new(40.0, 40.0));
        assert_eq!(layer.hovered_folder(), Some(folder));

        // Hovering empty desktop clears it
        layer.update_drag_hover(Vec2::new(800.0, 400.0));
        assert_eq!(layer.hovered_folder(), None);

        layer.end_icon_drag();

        // A folder dragged over itself is not its own target
        layer.begin_icon_drag(folder).unwrap();
        layer.update_drag_hover(Vec2::new(40.0, 40.0));
        assert_eq!(layer.hovered_folder(), None);
    }

    #[test]
    fn test_file_icon_is_not_a_folder_target() {
        let mut layer = layer();
        let folder = layer.add(folder_icon("Projects", Vec2::new(20.0, 20.0)));
        layer.add(file_icon("a.txt", Vec2::new(110.0, 20.0)));

        layer.begin_icon_drag(folder).unwrap();
        layer.update_drag_hover(Vec2::new(130.0, 40.0));
        assert_eq!(layer.hovered_folder(), None);
    }

    #[test]
    fn test_begin_drag_builds_payload() {
        let mut layer = layer();
        let id = layer.add(file_icon("photo.png", Vec2::new(20.0, 20.0)));

        let data = layer.begin_icon_drag(id).unwrap();
        assert_eq!(data.name, "photo.png");
        assert_eq!(data.path, "/Desktop/photo.png");
        assert!(!data.is_directory);
        assert_eq!(data.source, DragSource::Desktop);
        assert_eq!(layer.dragging_icon(), Some(id));

        layer.end_icon_drag();
        assert_eq!(layer.dragging_icon(), None);
    }

    #[test]
    fn test_viewport_shrink_resnaps_icons() {
        let mut layer = layer();
        let id = layer.add(file_icon("far.txt", Vec2::new(1820.0, 830.0)));

        layer.set_viewport(Size::new(800.0, 600.0));
        let pos = layer.get(id).unwrap().position;
        let usable = layer.grid().usable_size();
        assert!(pos.x + SHELL_STYLE.icon_width <= usable.width);
        assert!(pos.y + SHELL_STYLE.icon_height <= usable.height);
    }

    #[test]
    fn test_stale_ids_are_noops() {
        let mut layer = layer();
        let ghost = IconId::new_v4();

        layer.reposition(ghost, Vec2::new(100.0, 100.0));
        assert!(layer.remove(ghost).is_none());
        assert!(layer.begin_icon_drag(ghost).is_none());
        assert_eq!(layer.count(), 0);
    }
}
