//! Browser bindings
//!
//! The DOM implementation of the hit-testing capability plus a thin
//! wasm-bindgen handle the web shell drives. Only compiled with the
//! `wasm` feature.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::drag::{HitTester, Surface};
use crate::engine::{InputResult, ShellEngine};
use crate::math::Vec2;
use crate::window::WindowId;

/// Selectors marking the shell surfaces in the DOM. The hit test walks the
/// ancestry of the topmost element with `closest`, so any descendant of a
/// marked element classifies as that surface.
const FILE_MANAGER_SELECTOR: &str = "[data-shell-region='file-manager']";
const WINDOW_SELECTOR: &str = "[data-shell-region='window']";
const DOCK_SELECTOR: &str = "[data-shell-region='dock']";
const MENU_BAR_SELECTOR: &str = "[data-shell-region='menu-bar']";

/// DOM-backed surface classification.
///
/// `elementFromPoint` would always return the drag preview overlay, since
/// it tracks the pointer. Each query therefore hides the overlay element,
/// reads the element underneath, and restores the overlay before
/// returning - the guard restores even on an early exit.
pub struct DomHitTester {
    document: web_sys::Document,
    overlay: Option<web_sys::HtmlElement>,
}

struct OverlayElementHidden<'a> {
    element: &'a web_sys::HtmlElement,
}

impl<'a> OverlayElementHidden<'a> {
    fn new(element: &'a web_sys::HtmlElement) -> Self {
        let _ = element.style().set_property("display", "none");
        Self { element }
    }
}

impl Drop for OverlayElementHidden<'_> {
    fn drop(&mut self) {
        let _ = self.element.style().remove_property("display");
    }
}

impl DomHitTester {
    /// Create a tester for the current document. `overlay_id` names the
    /// drag preview element to hide during queries.
    pub fn new(overlay_id: Option<&str>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let overlay = overlay_id
            .and_then(|id| document.get_element_by_id(id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        Some(Self { document, overlay })
    }

    fn classify_element(element: &web_sys::Element) -> Surface {
        let in_region = |selector: &str| {
            element
                .closest(selector)
                .ok()
                .flatten()
                .is_some()
        };

        if in_region(FILE_MANAGER_SELECTOR) {
            Surface::FileManager
        } else if in_region(WINDOW_SELECTOR) {
            Surface::Window
        } else if in_region(DOCK_SELECTOR) {
            Surface::Dock
        } else if in_region(MENU_BAR_SELECTOR) {
            Surface::MenuBar
        } else {
            Surface::Desktop
        }
    }
}

impl HitTester for DomHitTester {
    fn surface_at(&self, point: Vec2) -> Surface {
        let _guard = self.overlay.as_ref().map(OverlayElementHidden::new);

        match self.document.element_from_point(point.x, point.y) {
            Some(element) => Self::classify_element(&element),
            None => Surface::Desktop,
        }
    }
}

/// Window state handed to the rendering layer.
#[derive(Serialize)]
struct WindowView {
    id: WindowId,
    app_id: String,
    title: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    minimized: bool,
    maximized: bool,
    z_index: u32,
    active: bool,
}

/// The shell engine exported to JavaScript.
#[wasm_bindgen]
pub struct ShellHandle {
    engine: ShellEngine,
}

#[wasm_bindgen]
impl ShellHandle {
    /// Create a shell: filesystem strategy resolved for this host, hit
    /// testing against the live DOM.
    #[wasm_bindgen(constructor)]
    pub fn new(overlay_id: Option<String>) -> Result<ShellHandle, JsValue> {
        let hit = DomHitTester::new(overlay_id.as_deref())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let fs = nimbus_vfs::resolve_strategy();
        Ok(ShellHandle {
            engine: ShellEngine::new(fs, Box::new(hit)),
        })
    }

    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_down(x, y) == InputResult::Handled
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(x, y) == InputResult::Handled
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_up(x, y) == InputResult::Handled
    }

    pub fn escape(&mut self) -> bool {
        self.engine.handle_escape() == InputResult::Handled
    }

    pub fn panel_entry_pressed(&mut self, name: &str, x: f32, y: f32) {
        self.engine.panel_entry_pressed(name, Vec2::new(x, y));
    }

    pub fn open_app(&mut self, app_id: &str) -> Result<u64, JsValue> {
        self.engine
            .open_app(app_id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn close_window(&mut self, id: u64) {
        self.engine.windows.close(id);
    }

    pub fn focus_window(&mut self, id: u64) {
        self.engine.windows.focus(id);
    }

    pub fn minimize_window(&mut self, id: u64) {
        self.engine.windows.minimize(id);
    }

    pub fn toggle_maximize(&mut self, id: u64) {
        self.engine.toggle_maximize(id);
    }

    pub fn restore_window(&mut self, id: u64) {
        self.engine.windows.restore(id);
    }

    pub fn navigate_panel(&mut self, path: &str) -> Result<(), JsValue> {
        self.engine
            .navigate_panel(path)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Windows back to front, as JSON for the rendering layer.
    pub fn windows_json(&self) -> String {
        let active = self.engine.windows.active();
        let views: Vec<WindowView> = self
            .engine
            .windows
            .windows_by_z()
            .into_iter()
            .map(|w| WindowView {
                id: w.id,
                app_id: w.app_id.clone(),
                title: w.title.clone(),
                x: w.position.x,
                y: w.position.y,
                width: w.size.width,
                height: w.size.height,
                minimized: w.minimized,
                maximized: w.maximized,
                z_index: w.z_index,
                active: active == Some(w.id),
            })
            .collect();
        serde_json::to_string(&views).unwrap_or_else(|_| String::from("[]"))
    }

    /// Desktop icons as JSON for the rendering layer.
    pub fn icons_json(&self) -> String {
        serde_json::to_string(self.engine.icons.icons()).unwrap_or_else(|_| String::from("[]"))
    }

    /// Panel listing as JSON for the rendering layer.
    pub fn panel_entries_json(&self) -> String {
        serde_json::to_string(self.engine.panel.entries()).unwrap_or_else(|_| String::from("[]"))
    }

    pub fn panel_path(&self) -> String {
        String::from(self.engine.panel.path())
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }
}
