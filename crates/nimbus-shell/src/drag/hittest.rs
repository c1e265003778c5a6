//! Hit-testing capability
//!
//! The coordinator needs to know what lies under the pointer, but the drag
//! preview overlay tracks the pointer and would always be the topmost
//! element. Every probe therefore hides the overlay, queries the topmost
//! surface, and restores the overlay - and the restore must happen even if
//! classification bails out partway, so it lives in a drop guard.

use crate::math::Vec2;

use super::session::Surface;

/// Resolves the topmost interactive surface at a point.
///
/// Implementations are UI-stack specific; the DOM one walks the element
/// ancestry from `elementFromPoint`, test ones script their answers.
pub trait HitTester {
    fn surface_at(&self, point: Vec2) -> Surface;
}

/// Visibility control for the drag preview overlay.
pub trait OverlayVisibility {
    fn set_hidden(&mut self, hidden: bool);
}

/// Restores overlay visibility when dropped.
struct OverlayHidden<'a, O: OverlayVisibility + ?Sized> {
    overlay: &'a mut O,
}

impl<'a, O: OverlayVisibility + ?Sized> OverlayHidden<'a, O> {
    fn new(overlay: &'a mut O) -> Self {
        overlay.set_hidden(true);
        Self { overlay }
    }
}

impl<O: OverlayVisibility + ?Sized> Drop for OverlayHidden<'_, O> {
    fn drop(&mut self) {
        self.overlay.set_hidden(false);
    }
}

/// Query the surface under the pointer with the overlay out of the way.
///
/// The overlay is hidden and restored within this call; callers never see
/// the intermediate state.
pub fn probe_surface<O, H>(overlay: &mut O, tester: &H, point: Vec2) -> Surface
where
    O: OverlayVisibility + ?Sized,
    H: HitTester + ?Sized,
{
    let _guard = OverlayHidden::new(overlay);
    tester.surface_at(point)
}
