//! End-to-end drag and focus scenarios
//!
//! Drives the shell engine through full pointer-event sequences against an
//! in-memory filesystem and a scripted surface classifier.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nimbus_shell::{
    HitTester, IconConfig, InputResult, ShellEngine, ShellEvent, Surface, Vec2,
};
use nimbus_vfs::{FsCapability, MemoryFs};

/// Hit tester whose answer the test scripts per phase.
struct ScriptedHit {
    surface: Rc<Cell<Surface>>,
}

impl HitTester for ScriptedHit {
    fn surface_at(&self, _point: Vec2) -> Surface {
        self.surface.get()
    }
}

fn shell() -> (ShellEngine, Rc<Cell<Surface>>) {
    let surface = Rc::new(Cell::new(Surface::Desktop));
    let fs = MemoryFs::new();
    fs.create_dir_all("/home").unwrap();
    fs.create_dir_all("/Pictures").unwrap();
    fs.write_file("/Pictures/photo.png", b"pixels").unwrap();

    let mut engine = ShellEngine::new(
        Box::new(fs),
        Box::new(ScriptedHit {
            surface: Rc::clone(&surface),
        }),
    );
    engine.init(1920.0, 1080.0);
    (engine, surface)
}

fn collect_events(engine: &mut ShellEngine) -> Rc<RefCell<Vec<ShellEvent>>> {
    let sink = Rc::new(RefCell::new(Vec::new()));
    let clone = Rc::clone(&sink);
    engine.subscribe(move |e| clone.borrow_mut().push(e.clone()));
    sink
}

/// A file dragged out of the panel and released over the desktop
/// background becomes exactly one grid-snapped icon.
#[test]
fn test_panel_to_desktop_creates_icon() {
    let (mut engine, _surface) = shell();
    engine.navigate_panel("/Pictures").unwrap();
    let events = collect_events(&mut engine);

    engine.panel_entry_pressed("photo.png", Vec2::new(100.0, 100.0));
    engine.handle_pointer_move(120.0, 120.0);
    assert!(engine.is_dragging());
    let session = engine.drag_session().unwrap();
    assert_eq!(session.data.name, "photo.png");
    assert_eq!(session.start, Vec2::new(100.0, 100.0));

    engine.handle_pointer_move(500.0, 400.0);
    engine.handle_pointer_up(500.0, 400.0);

    assert!(!engine.is_dragging());
    assert_eq!(engine.icons.count(), 1);

    // Pointer (500, 400) is (500, 372) below the menu bar, snapping to the
    // grid cell at (470, 380)
    let icon = &engine.icons.icons()[0];
    assert_eq!(icon.position, Vec2::new(470.0, 380.0));
    assert_eq!(icon.name, "photo.png");
    assert_eq!(icon.file_path.as_deref(), Some("/Pictures/photo.png"));
    assert!(icon.is_file);

    assert!(events.borrow().iter().any(|e| matches!(
        e,
        ShellEvent::AddDesktopIcon { name, x, y, .. }
            if name == "photo.png" && *x == 470.0 && *y == 380.0
    )));
}

/// The same gesture released over a window is rejected: no icon appears
/// and nothing is copied.
#[test]
fn test_drop_over_window_is_rejected() {
    let (mut engine, surface) = shell();
    engine.navigate_panel("/Pictures").unwrap();
    let events = collect_events(&mut engine);

    engine.panel_entry_pressed("photo.png", Vec2::new(100.0, 100.0));
    engine.handle_pointer_move(300.0, 300.0);
    assert!(engine.is_dragging());

    surface.set(Surface::Window);
    engine.handle_pointer_move(600.0, 400.0);
    assert_eq!(engine.drag_session().unwrap().target, None);

    engine.handle_pointer_up(600.0, 400.0);

    assert_eq!(engine.icons.count(), 0);
    assert!(events.borrow().is_empty());
}

/// A desktop icon dragged into the file-manager panel copies its backing
/// file into the listed directory.
#[test]
fn test_desktop_to_panel_copies_file() {
    let (mut engine, surface) = shell();
    engine.fs().write_file("/home/draft.txt", b"draft").unwrap();
    engine.fs().create_dir_all("/home/Documents").unwrap();
    engine.navigate_panel("/home/Documents").unwrap();

    engine.icons.add(IconConfig {
        name: String::from("draft.txt"),
        icon: String::from("file"),
        position: Some(Vec2::new(20.0, 20.0)),
        file_path: Some(String::from("/home/draft.txt")),
        is_file: true,
        ..Default::default()
    });
    let events = collect_events(&mut engine);

    // Press on the icon (usable cell (20, 20) = viewport (20, 48))
    engine.handle_pointer_down(50.0, 80.0);
    engine.handle_pointer_move(200.0, 200.0);
    assert!(engine.is_dragging());

    surface.set(Surface::FileManager);
    engine.handle_pointer_move(800.0, 500.0);
    engine.handle_pointer_up(800.0, 500.0);

    assert_eq!(
        engine.fs().read_file("/home/Documents/draft.txt").unwrap(),
        b"draft"
    );
    // Copy, not move: the icon and its backing file stay
    assert_eq!(engine.icons.count(), 1);
    assert!(engine.fs().exists("/home/draft.txt").unwrap());
    // Panel refreshed to show the copy
    assert!(engine.panel.entries().iter().any(|e| e.name == "draft.txt"));

    assert!(events.borrow().iter().any(|e| matches!(
        e,
        ShellEvent::DropToFileManager { name, .. } if name == "draft.txt"
    )));
}

/// Escape mid-drag restores everything: no icon is created and no file is
/// copied, on either surface.
#[test]
fn test_escape_cancels_without_side_effects() {
    let (mut engine, _surface) = shell();
    engine.navigate_panel("/Pictures").unwrap();
    let events = collect_events(&mut engine);

    engine.panel_entry_pressed("photo.png", Vec2::new(100.0, 100.0));
    engine.handle_pointer_move(400.0, 300.0);
    assert!(engine.is_dragging());

    assert_eq!(engine.handle_escape(), InputResult::Handled);

    assert!(!engine.is_dragging());
    assert_eq!(engine.icons.count(), 0);
    assert!(events.borrow().is_empty());

    // The released pointer afterwards does not replay the drop
    assert_eq!(engine.handle_pointer_up(500.0, 400.0), InputResult::Unhandled);
    assert_eq!(engine.icons.count(), 0);
}

/// Closing the active window hands focus to the next-highest z-index.
#[test]
fn test_closing_active_window_reassigns_focus() {
    let (mut engine, _surface) = shell();

    let a = engine.open_app("notes").unwrap();
    let b = engine.open_app("notes").unwrap();
    let c = engine.open_app("notes").unwrap();

    assert_eq!(engine.windows.get(a).unwrap().z_index, 101);
    assert_eq!(engine.windows.get(b).unwrap().z_index, 102);
    assert_eq!(engine.windows.get(c).unwrap().z_index, 103);
    assert_eq!(engine.windows.active(), Some(c));

    engine.windows.close(c);

    assert_eq!(engine.windows.active(), Some(b));
    assert_eq!(engine.windows.get(b).unwrap().z_index, 102);
}

/// A full session: open the file manager, drag a file to the desktop,
/// drag the new icon onto a folder icon, and confirm the move.
#[test]
fn test_move_into_folder_round_trip() {
    let (mut engine, _surface) = shell();
    engine.fs().create_dir_all("/home/Archive").unwrap();
    engine.navigate_panel("/Pictures").unwrap();

    engine.icons.add(IconConfig {
        name: String::from("Archive"),
        icon: String::from("folder"),
        position: Some(Vec2::new(110.0, 20.0)),
        file_path: Some(String::from("/home/Archive")),
        is_file: false,
        ..Default::default()
    });

    // Drag photo.png out of the panel onto a free desktop cell
    engine.panel_entry_pressed("photo.png", Vec2::new(100.0, 100.0));
    engine.handle_pointer_move(500.0, 400.0);
    engine.handle_pointer_up(500.0, 400.0);
    assert_eq!(engine.icons.count(), 2);

    // Now drag the fresh icon (at usable (470, 380)) onto the folder
    engine.handle_pointer_down(500.0, 430.0);
    engine.handle_pointer_move(140.0, 80.0);
    assert!(engine.is_dragging());
    engine.handle_pointer_up(140.0, 80.0);

    assert_eq!(
        engine.fs().read_file("/home/Archive/photo.png").unwrap(),
        b"pixels"
    );
    // The desktop entity moved into the folder
    assert_eq!(engine.icons.count(), 1);
    assert_eq!(engine.icons.icons()[0].name, "Archive");
    // The original panel-side file is untouched
    assert!(engine.fs().exists("/Pictures/photo.png").unwrap());
}
