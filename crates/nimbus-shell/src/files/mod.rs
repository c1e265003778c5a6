//! File-manager panel
//!
//! The directory-listing side of the drag protocol.

mod panel;

pub use panel::FilePanel;
