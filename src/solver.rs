//! Placement geometry: where a floating element goes for a given placement.

#[cfg(test)]
#[path = "solver_test.rs"]
mod solver_test;

use crate::consts::FLYOUT_GAP_PX;
use crate::geometry::{EdgeRect, HorizontalEdge, Rect, Size, VerticalEdge, Viewport};
use crate::placement::{HorizontalAnchor, Placement, VerticalAnchor};

/// Compute the edges of a `floating` element placed around `anchor`.
///
/// `anchor` is in client coordinates (as measured on screen); the result is in page
/// coordinates, rounded to whole pixels, before any offset is applied.
#[must_use]
pub fn compute_placement(anchor: &Rect, floating: Size, placement: Placement, viewport: &Viewport) -> EdgeRect {
    let mut horizontal = match placement.horizontal() {
        HorizontalAnchor::Right => HorizontalEdge::Right(viewport.width - (anchor.right() + viewport.scroll_x)),
        HorizontalAnchor::Left => HorizontalEdge::Left(anchor.left() + viewport.scroll_x),
        HorizontalAnchor::Center => {
            let x_offset = (anchor.width() - floating.width) / 2.0;
            HorizontalEdge::Left(anchor.left() + x_offset + viewport.scroll_x)
        }
    };

    let vertical = match placement.vertical() {
        VerticalAnchor::Top => VerticalEdge::Bottom(viewport.height - (anchor.top() + viewport.scroll_y)),
        VerticalAnchor::Bottom => VerticalEdge::Top(anchor.bottom() + viewport.scroll_y),
        VerticalAnchor::Center => {
            let y_offset = (anchor.height() - floating.height) / 2.0;
            // Side flyout: step outward past the anchor so the two do not overlap.
            let shift = floating.width + FLYOUT_GAP_PX;
            horizontal = match horizontal {
                HorizontalEdge::Right(right) => HorizontalEdge::Right(right - shift),
                HorizontalEdge::Left(left) => HorizontalEdge::Left(left - shift),
            };
            VerticalEdge::Top(anchor.top() + y_offset + viewport.scroll_y)
        }
    };

    EdgeRect::new(horizontal, vertical).rounded()
}
