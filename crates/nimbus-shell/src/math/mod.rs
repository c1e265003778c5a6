//! Core geometry types for the desktop shell
//!
//! These types provide basic 2D math operations for positioning and sizing
//! windows, icons, and pointer coordinates.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{ShellStyle, SHELL_STYLE};
pub use vec2::Vec2;
