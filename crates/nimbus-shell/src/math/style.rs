//! Fixed chrome metrics shared across the shell.

/// Pixel metrics for the shell chrome and icon grid.
#[derive(Clone, Copy, Debug)]
pub struct ShellStyle {
    /// Height of the menu bar at the top of the viewport
    pub menu_bar_height: f32,
    /// Height of the dock at the bottom of the viewport
    pub dock_height: f32,
    /// Desktop icon bounding-box width
    pub icon_width: f32,
    /// Desktop icon bounding-box height (icon plus label)
    pub icon_height: f32,
    /// Margin between the usable-area origin and the first grid cell
    pub grid_margin: f32,
    /// Distance between adjacent grid cell origins
    pub grid_pitch: f32,
    /// Pointer movement (either axis) required before a drag starts
    pub drag_threshold: f32,
    /// Offset applied per already-open window when cascading new windows
    pub cascade_step: f32,
    /// Cascade position wraps after this many windows
    pub cascade_wrap: u32,
    /// Window title bar height
    pub title_bar_height: f32,
    /// Edge width that acts as a resize handle
    pub resize_handle_size: f32,
}

/// The single style instance used by the shell.
pub const SHELL_STYLE: ShellStyle = ShellStyle {
    menu_bar_height: 28.0,
    dock_height: 80.0,
    icon_width: 80.0,
    icon_height: 100.0,
    grid_margin: 20.0,
    grid_pitch: 90.0,
    drag_threshold: 4.0,
    cascade_step: 32.0,
    cascade_wrap: 8,
    title_bar_height: 32.0,
    resize_handle_size: 8.0,
};
