//! Shell engine coordinating all components
//!
//! The single owner of mutable shell state: windows, desktop icons, the
//! file panel, and the drag session. All pointer and keyboard input flows
//! through here, in arrival order, and every mutation goes through the
//! owning component's operations - consumers never reach into the state
//! directly.

use nimbus_vfs::{join_path, FsCapability};

use crate::desktop::{IconConfig, IconId, IconLayer};
use crate::drag::{
    classify, probe_surface, DragArm, DragCoordinator, DragData, DragSession, DragSource,
    DropTarget, HitTester, Surface,
};
use crate::error::{ShellError, ShellResult};
use crate::events::{EventBus, ShellEvent, SubscriptionId};
use crate::files::FilePanel;
use crate::math::{Rect, Size, Vec2, SHELL_STYLE};
use crate::overlay::DragOverlay;
use crate::registry::AppRegistry;
use crate::window::{WindowFrame, WindowId, WindowManager, WindowRegion};

/// Default directory listed by the file panel.
const HOME_PATH: &str = "/home";

/// Result of routing one input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The shell consumed the event
    Handled,
    /// The event is for the embedding layer
    Unhandled,
}

/// Converts a backing path to a displayable asset URL, when the host can.
pub type AssetResolver = Box<dyn Fn(&str) -> String>;

/// Shell engine coordinating windows, icons, panel, and drag state.
pub struct ShellEngine {
    /// Viewport size in pixels
    viewport: Size,
    /// Window manager
    pub windows: WindowManager,
    /// Desktop icon layer
    pub icons: IconLayer,
    /// File-manager panel
    pub panel: FilePanel,
    /// Application registry
    pub registry: AppRegistry,
    /// Drag coordinator
    drag: DragCoordinator,
    /// Drag preview overlay
    overlay: DragOverlay,
    /// Window move/resize interaction
    frame: WindowFrame,
    /// Click-vs-drag detector for desktop icons
    desktop_arm: DragArm,
    /// Click-vs-drag detector for panel entries
    panel_arm: DragArm,
    /// Icon armed by the last desktop pointer-down
    pending_icon: Option<IconId>,
    /// Panel entry armed by the last panel pointer-down
    pending_entry: Option<String>,
    /// Event bus for decoupled observers
    bus: EventBus,
    /// Resolved filesystem strategy
    fs: Box<dyn FsCapability>,
    /// Surface classification capability
    hit: Box<dyn HitTester>,
    /// Optional path-to-URL conversion for thumbnails
    asset_resolver: Option<AssetResolver>,
}

impl ShellEngine {
    /// Create an engine with an injected filesystem strategy and hit
    /// tester. Call [`ShellEngine::init`] before routing input.
    pub fn new(fs: Box<dyn FsCapability>, hit: Box<dyn HitTester>) -> Self {
        Self {
            viewport: Size::new(0.0, 0.0),
            windows: WindowManager::new(),
            icons: IconLayer::new(Size::new(0.0, 0.0)),
            panel: FilePanel::new(HOME_PATH),
            registry: AppRegistry::with_builtins(),
            drag: DragCoordinator::new(),
            overlay: DragOverlay::new(),
            frame: WindowFrame::new(),
            desktop_arm: DragArm::new(),
            panel_arm: DragArm::new(),
            pending_icon: None,
            pending_entry: None,
            bus: EventBus::new(),
            fs,
            hit,
            asset_resolver: None,
        }
    }

    /// Initialize with the viewport size, seed the home directory, and
    /// load the first panel listing.
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        self.icons.set_viewport(self.viewport);

        if let Err(e) = self.fs.create_dir_all(HOME_PATH) {
            tracing::warn!(error = %e, "home directory bootstrap failed");
        }
        if let Err(e) = self.panel.refresh(self.fs.as_ref()) {
            tracing::warn!(error = %e, "initial panel refresh failed");
        }
    }

    /// Resize the viewport; icons re-snap into the new usable area.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        self.icons.set_viewport(self.viewport);
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Install the path-to-URL conversion used for image thumbnails.
    pub fn set_asset_resolver(&mut self, resolver: AssetResolver) {
        self.asset_resolver = Some(resolver);
    }

    /// The resolved filesystem strategy.
    pub fn fs(&self) -> &dyn FsCapability {
        self.fs.as_ref()
    }

    /// The drag preview overlay, for rendering.
    pub fn overlay(&self) -> &DragOverlay {
        &self.overlay
    }

    /// The active drag session, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Whether a file/folder drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ========== Events ==========

    /// Subscribe to shell events.
    pub fn subscribe(&mut self, handler: impl FnMut(&ShellEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(handler)
    }

    /// Drop a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    // ========== Window Operations ==========

    /// Open (or refocus) an application window.
    pub fn open_app(&mut self, app_id: &str) -> ShellResult<WindowId> {
        let app = self
            .registry
            .get(app_id)
            .cloned()
            .ok_or_else(|| ShellError::AppNotFound(String::from(app_id)))?;
        Ok(self.windows.open(&app))
    }

    /// Usable viewport area between the menu bar and the dock.
    pub fn usable_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            SHELL_STYLE.menu_bar_height,
            self.viewport.width,
            self.viewport.height - SHELL_STYLE.menu_bar_height - SHELL_STYLE.dock_height,
        )
    }

    /// Maximize a window to the usable area, or restore it if it is
    /// already maximized.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        match self.windows.get(id) {
            Some(w) if w.maximized => self.windows.restore(id),
            Some(_) => {
                let bounds = self.usable_bounds();
                self.windows.maximize(id, bounds);
            }
            None => {}
        }
    }

    // ========== Panel Operations ==========

    /// Change the panel directory and reload its listing.
    pub fn navigate_panel(&mut self, path: impl Into<String>) -> ShellResult<()> {
        self.panel.navigate(path, self.fs.as_ref())?;
        Ok(())
    }

    /// Reload the panel listing.
    pub fn refresh_panel(&mut self) -> ShellResult<()> {
        self.panel.refresh(self.fs.as_ref())?;
        Ok(())
    }

    // ========== Drag Sources ==========

    /// Pointer-down on a panel entry: arms a potential drag of that entry.
    /// A release before the movement threshold stays a plain click.
    pub fn panel_entry_pressed(&mut self, name: &str, pointer: Vec2) {
        if self.panel.drag_data(name).is_some() {
            self.pending_entry = Some(String::from(name));
            self.panel_arm.press(pointer);
        }
    }

    // ========== Pointer Routing ==========

    /// Handle pointer down, in viewport coordinates.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        // Chrome strips swallow presses without arming anything
        if pos.y < SHELL_STYLE.menu_bar_height
            || pos.y > self.viewport.height - SHELL_STYLE.dock_height
        {
            return InputResult::Unhandled;
        }

        // Windows sit above the icon layer
        if let Some((window_id, region)) = self.windows.region_at(pos) {
            match region {
                WindowRegion::CloseButton => {
                    self.windows.close(window_id);
                }
                WindowRegion::MinimizeButton => {
                    self.windows.minimize(window_id);
                }
                WindowRegion::MaximizeButton => {
                    self.toggle_maximize(window_id);
                }
                WindowRegion::TitleBar => {
                    self.windows.focus(window_id);
                    self.frame.begin_move(&self.windows, window_id, pos);
                }
                WindowRegion::Content => {
                    // Content handles its own interaction (a file grid
                    // item press arrives via panel_entry_pressed); the
                    // frame only takes focus here
                    if self.windows.active() != Some(window_id) {
                        self.windows.focus(window_id);
                    }
                }
                handle if handle.is_resize() => {
                    self.windows.focus(window_id);
                    self.frame.begin_resize(&self.windows, window_id, handle, pos);
                }
                _ => {}
            }
            return InputResult::Handled;
        }

        // Desktop surface: arm an icon drag if an icon is under the pointer
        let usable = self.to_usable(pos);
        if let Some(icon) = self.icons.icon_at(usable) {
            self.pending_icon = Some(icon.id);
            self.desktop_arm.press(pos);
            return InputResult::Handled;
        }

        InputResult::Unhandled
    }

    /// Handle pointer move, in viewport coordinates.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        if self.frame.is_active() {
            self.frame.update(&self.windows, pos);
            return InputResult::Handled;
        }

        if self.drag.is_dragging() {
            self.advance_drag(pos);
            return InputResult::Handled;
        }

        // Threshold checks: a pending press may become a real drag now
        if let Some(start) = self.desktop_arm.motion(pos) {
            if let Some(icon_id) = self.pending_icon.take() {
                if let Some(data) = self.icons.begin_icon_drag(icon_id) {
                    self.start_drag(data, start);
                    self.advance_drag(pos);
                    return InputResult::Handled;
                }
            }
        }
        if let Some(start) = self.panel_arm.motion(pos) {
            if let Some(name) = self.pending_entry.take() {
                if let Some(data) = self.panel.drag_data(&name) {
                    self.start_drag(data, start);
                    self.advance_drag(pos);
                    return InputResult::Handled;
                }
            }
        }

        InputResult::Unhandled
    }

    /// Handle pointer up, in viewport coordinates.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        if self.frame.is_active() {
            self.frame.finish(&mut self.windows, pos);
            return InputResult::Handled;
        }

        if self.drag.is_dragging() {
            // Final reclassification at the release point
            self.advance_drag(pos);
            if let Some(session) = self.drag.end_drag() {
                self.perform_drop(session);
            }
            self.overlay.clear();
            self.icons.end_icon_drag();
            return InputResult::Handled;
        }

        // A release before the threshold is a plain click/selection
        let mut handled = false;
        if self.desktop_arm.release() {
            self.pending_icon = None;
            handled = true;
        }
        if self.panel_arm.release() {
            self.pending_entry = None;
            handled = true;
        }
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle Escape: cancel any in-flight drag with zero side effects.
    pub fn handle_escape(&mut self) -> InputResult {
        let mut handled = false;
        if self.drag.is_dragging() {
            self.drag.cancel_drag();
            self.overlay.clear();
            self.icons.end_icon_drag();
            handled = true;
        }
        if self.frame.is_active() {
            self.frame.cancel();
            handled = true;
        }
        self.pending_icon = None;
        self.pending_entry = None;
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    // ========== Drag Internals ==========

    fn to_usable(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x, pos.y - SHELL_STYLE.menu_bar_height)
    }

    fn start_drag(&mut self, data: DragData, start: Vec2) {
        self.overlay.begin(data.clone(), start);
        self.drag.start_drag(data, start);
    }

    /// One step of the drag protocol: move the preview, hit-test with the
    /// overlay out of the way, and reclassify the drop target.
    fn advance_drag(&mut self, pos: Vec2) {
        self.drag.update_pointer(pos);
        self.overlay.follow(pos);

        let surface = probe_surface(&mut self.overlay, self.hit.as_ref(), pos);

        if surface == Surface::Desktop {
            self.icons.update_drag_hover(self.to_usable(pos));
        } else {
            self.icons.clear_drag_hover();
        }

        let target = match self.drag.session().map(|s| s.data.source) {
            Some(source) => match self.icons.hovered_folder() {
                Some(folder) if surface == Surface::Desktop => {
                    Some(DropTarget::FolderIcon(folder))
                }
                _ => classify(source, surface),
            },
            None => None,
        };
        self.drag.set_target(target);
    }

    /// Act on a finished drag. All filesystem failures surface as
    /// `OperationFailed` events and leave shell state untouched.
    fn perform_drop(&mut self, session: DragSession) {
        let usable = self.to_usable(session.pointer);
        match session.target {
            Some(DropTarget::FileManager) => {
                match self.panel.accept_drop(&session.data, self.fs.as_ref()) {
                    Ok(()) => {
                        self.bus.publish(&ShellEvent::DropToFileManager {
                            name: session.data.name.clone(),
                            path: session.data.path.clone(),
                            is_directory: session.data.is_directory,
                        });
                    }
                    Err(e) => self.report_failure(&session.data.name, e),
                }
            }
            Some(DropTarget::Desktop) => match session.data.source {
                DragSource::Desktop => {
                    if let Some(icon_id) = self.icons.dragging_icon() {
                        self.icons.reposition(icon_id, usable);
                        if let Some(icon) = self.icons.get(icon_id) {
                            self.bus.publish(&ShellEvent::RepositionDesktopIcon {
                                icon_id,
                                x: icon.position.x,
                                y: icon.position.y,
                            });
                        }
                    }
                }
                DragSource::FileManager => {
                    let thumbnail = self.thumbnail_for(&session.data);
                    let id = self.icons.add(IconConfig {
                        name: session.data.name.clone(),
                        icon: if session.data.is_directory {
                            String::from("folder")
                        } else {
                            String::from("file")
                        },
                        position: Some(usable),
                        app_id: None,
                        file_path: Some(session.data.path.clone()),
                        is_file: !session.data.is_directory,
                        thumbnail,
                    });
                    if let Some(icon) = self.icons.get(id) {
                        self.bus.publish(&ShellEvent::AddDesktopIcon {
                            name: session.data.name.clone(),
                            path: session.data.path.clone(),
                            is_directory: session.data.is_directory,
                            x: icon.position.x,
                            y: icon.position.y,
                        });
                    }
                }
            },
            Some(DropTarget::FolderIcon(folder_id)) => {
                self.drop_into_folder(&session.data, folder_id);
            }
            None => {
                // No actionable target: the drag ends with no effect
            }
        }
    }

    /// Move a dragged entry into a folder icon: copy when both sides have
    /// a real backing path, then retire the source desktop entity.
    fn drop_into_folder(&mut self, data: &DragData, folder_id: IconId) {
        let folder_path = match self.icons.get(folder_id) {
            Some(folder) => folder.file_path.clone(),
            None => return,
        };

        if let (Some(folder_path), false) = (folder_path, data.path.is_empty()) {
            let dest = join_path(&folder_path, &data.name);
            let result = if data.is_directory {
                self.fs.copy_dir(&data.path, &dest)
            } else {
                self.fs.copy(&data.path, &dest)
            };
            if let Err(e) = result {
                self.report_failure(&data.name, e);
                return;
            }
        }

        if data.source == DragSource::Desktop {
            if let Some(icon_id) = self.icons.dragging_icon() {
                self.icons.remove(icon_id);
            }
        }
    }

    fn report_failure(&mut self, name: &str, error: nimbus_vfs::FsError) {
        tracing::warn!(entry = %name, error = %error, "drop action failed");
        self.bus.publish(&ShellEvent::OperationFailed {
            message: format!("{}: {}", name, error),
        });
    }

    fn thumbnail_for(&self, data: &DragData) -> Option<String> {
        if data.is_directory || data.path.is_empty() {
            return None;
        }
        if !is_image_path(&data.name) {
            return None;
        }
        self.asset_resolver.as_ref().map(|f| f(&data.path))
    }
}

/// Whether a file name looks like a displayable image.
fn is_image_path(name: &str) -> bool {
    let lower = name.to_lowercase();
    ["png", "jpg", "jpeg", "gif", "webp", "bmp"]
        .iter()
        .any(|ext| lower.rsplit('.').next() == Some(*ext))
}
