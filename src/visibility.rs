//! Viewport visibility checks.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use crate::geometry::{EdgeRect, Rect, Size, Viewport};

/// Whether `rect` (page coordinates) lies entirely inside the scrolled viewport.
///
/// Edges touching the viewport boundary count as visible. A degenerate viewport
/// shows nothing.
#[must_use]
pub fn is_visible(rect: &Rect, viewport: &Viewport) -> bool {
    if viewport.is_degenerate() {
        return false;
    }
    // hidden above
    if rect.top() < viewport.scroll_y {
        return false;
    }
    // hidden below
    if rect.bottom() > viewport.scroll_y + viewport.height {
        return false;
    }
    // hidden left
    if rect.left() < viewport.scroll_x {
        return false;
    }
    // hidden right
    if rect.right() > viewport.scroll_x + viewport.width {
        return false;
    }
    true
}

/// Whether an element of `size` positioned by `edges` is fully visible.
#[must_use]
pub fn is_placement_visible(edges: &EdgeRect, size: Size, viewport: &Viewport) -> bool {
    is_visible(&edges.resolve(size, viewport), viewport)
}
