//! Cross-component drag-and-drop coordination
//!
//! One coordinator instance owns the process-wide drag session. The
//! coordinator itself is DOM-free; hit testing against the rendered
//! surfaces happens through the [`HitTester`] capability, with the drag
//! preview overlay hidden for the duration of each probe.

mod classify;
mod coordinator;
mod hittest;
mod session;
mod threshold;

pub use classify::classify;
pub use coordinator::DragCoordinator;
pub use hittest::{probe_surface, HitTester, OverlayVisibility};
pub use session::{DragData, DragSession, DragSource, DropTarget, Surface};
pub use threshold::DragArm;
