//! Placement fallback: pick the first placement that keeps the floating element on screen.
//!
//! DESIGN
//! ======
//! `resolve_layout` is a pure function of its inputs. The host calls it whenever the
//! anchor moves, the floating element changes size, or the viewport resizes or scrolls,
//! and keeps the returned `LayoutResult` itself. A newer pass simply supersedes an older
//! one; there is no state to reconcile.
//!
//! The preferred placement is tried first. If it does not fit, the remaining seven are
//! tried in canonical order, and the preferred placement is the final fallback, so a
//! result is always produced even when nothing fits.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geometry::{EdgeRect, HorizontalEdge, Rect, Size, VerticalEdge, Viewport};
use crate::offset::{Offset, apply_offset};
use crate::placement::Placement;
use crate::solver::compute_placement;
use crate::visibility::is_placement_visible;

/// Inputs that shape a layout pass, independent of measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Placement to use when it fits.
    pub placement: Placement,
    /// Displacement applied after placement geometry.
    pub offset: Offset,
    /// Try alternate placements when the preferred one overflows the viewport.
    pub auto_flip: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { placement: Placement::default(), offset: Offset::default(), auto_flip: true }
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn new(placement: Placement) -> Self {
        Self { placement, ..Self::default() }
    }

    #[must_use]
    pub fn with_offset(self, offset: Offset) -> Self {
        Self { offset, ..self }
    }

    #[must_use]
    pub fn with_auto_flip(self, auto_flip: bool) -> Self {
        Self { auto_flip, ..self }
    }
}

/// Outcome of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Floating element rectangle in page coordinates.
    pub rect: Rect,
    /// The same position as absolute-positioning edges.
    pub edges: EdgeRect,
    /// The placement actually used.
    pub placement: Placement,
    /// The placement that was requested.
    pub original: Placement,
}

impl LayoutResult {
    /// Whether a fallback placement replaced the requested one.
    #[must_use]
    pub fn flipped(&self) -> bool {
        self.placement != self.original
    }

    /// CSS declarations for absolutely positioning the floating element.
    ///
    /// Active edges are emitted in pixels, the opposite edges as `auto`.
    #[must_use]
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let (left, right) = match self.edges.horizontal {
            HorizontalEdge::Left(v) => (px(v), "auto".to_string()),
            HorizontalEdge::Right(v) => ("auto".to_string(), px(v)),
        };
        let (top, bottom) = match self.edges.vertical {
            VerticalEdge::Top(v) => (px(v), "auto".to_string()),
            VerticalEdge::Bottom(v) => ("auto".to_string(), px(v)),
        };
        vec![
            ("position", "absolute".to_string()),
            ("left", left),
            ("right", right),
            ("top", top),
            ("bottom", bottom),
        ]
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Choose a placement for `floating` around `anchor` and compute its position.
///
/// The preferred placement is returned without probing alternates when it is visible,
/// when `auto_flip` is off, or when either element is still unmeasured (zero-sized).
#[must_use]
pub fn resolve_layout(anchor: &Rect, floating: Size, options: &LayoutOptions, viewport: &Viewport) -> LayoutResult {
    let preferred = options.placement;
    let place = |placement: Placement| apply_offset(compute_placement(anchor, floating, placement, viewport), options.offset);
    let finish = |placement: Placement, edges: EdgeRect| LayoutResult {
        rect: edges.resolve(floating, viewport),
        edges,
        placement,
        original: preferred,
    };

    let edges = place(preferred);
    if !options.auto_flip || anchor.size().is_empty() || floating.is_empty() {
        return finish(preferred, edges);
    }
    if is_placement_visible(&edges, floating, viewport) {
        return finish(preferred, edges);
    }
    trace!(placement = %preferred, "preferred placement overflows viewport");

    for candidate in preferred.fallback_order() {
        let edges = place(candidate);
        if is_placement_visible(&edges, floating, viewport) {
            if candidate != preferred {
                debug!(original = %preferred, actual = %candidate, "popup placement flipped");
            }
            return finish(candidate, edges);
        }
        trace!(placement = %candidate, "candidate overflows viewport");
    }

    debug!(placement = %preferred, "no placement fits viewport; keeping preferred");
    finish(preferred, edges)
}
