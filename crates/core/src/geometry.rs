//! Pure geometry helpers for the selection rectangle.
//!
//! All coordinates are viewport coordinates in logical pixels.

use eframe::egui::{self, Pos2, Rect, Vec2};

/// Builds the clamp box of a container from its offset and client size.
pub fn container_bounds(offset: Pos2, client_size: Vec2) -> Rect {
    Rect::from_min_size(offset, client_size)
}

/// Truncates `point` into `bounds`, independently per axis.
///
/// `bounds` must be measured at call time so that a container resized
/// mid-drag clamps against its new box.
pub fn clamp(point: Pos2, bounds: Rect) -> Pos2 {
    egui::pos2(
        point.x.max(bounds.left()).min(bounds.right()),
        point.y.max(bounds.top()).min(bounds.bottom()),
    )
}

/// Rectangle spanned by the drag anchor and the current pointer.
///
/// left/top are the per-axis minimum, width/height the absolute difference.
pub fn rect_from_corners(anchor: Pos2, current: Pos2) -> Rect {
    let min = egui::pos2(anchor.x.min(current.x), anchor.y.min(current.y));
    let size = egui::vec2((current.x - anchor.x).abs(), (current.y - anchor.y).abs());
    Rect::from_min_size(min, size)
}

/// Strict overlap test: rectangles that only share an edge or a corner do
/// not overlap.
///
/// `egui::Rect::intersects` is inclusive and gives a different answer on
/// the boundary.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
