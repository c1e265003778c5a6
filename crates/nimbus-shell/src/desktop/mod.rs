//! Desktop icon layer
//!
//! Grid-snapped icon placement and the icon side of the drag protocol.

mod grid;
mod icons;

pub use grid::GridLayout;
pub use icons::{DesktopIcon, IconConfig, IconLayer};

/// Unique desktop icon identifier
pub type IconId = uuid::Uuid;
