//! Geometry primitives: rectangles, sizes, the viewport, and edge-anchored rectangles.
//!
//! Measured rectangles (`Rect`) arrive from the host in client coordinates. Computed
//! placements come out as an `EdgeRect` in page coordinates, holding exactly one
//! horizontal and one vertical edge, the same shape an absolutely positioned element
//! uses for `left`/`right` and `top`/`bottom`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// Width and height of an element in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero or negative, i.e. the element has not been laid out yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle in CSS pixels.
///
/// Width and height are never negative; `Rect::new` (and deserialization) clamps them
/// to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawRect")]
pub struct Rect {
    top: f64,
    left: f64,
    width: f64,
    height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width: width.max(0.0), height: height.max(0.0) }
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Deserialize)]
struct RawRect {
    top: f64,
    left: f64,
    width: f64,
    height: f64,
}

impl From<RawRect> for Rect {
    fn from(raw: RawRect) -> Self {
        Self::new(raw.top, raw.left, raw.width, raw.height)
    }
}

/// The visible, scrollable region of the page.
///
/// `width` / `height` are the client dimensions; `scroll_x` / `scroll_y` are the page
/// scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, scroll_x: 0.0, scroll_y: 0.0 }
    }

    /// Return a copy scrolled to `(scroll_x, scroll_y)`.
    #[must_use]
    pub fn scrolled(self, scroll_x: f64, scroll_y: f64) -> Self {
        Self { scroll_x, scroll_y, ..self }
    }

    /// Whether the viewport has no visible area (headless or not yet attached).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The horizontal edge an element is positioned from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    /// Distance of the element's left edge from the page's left edge.
    Left(f64),
    /// Distance of the element's right edge from the viewport's right client edge.
    Right(f64),
}

/// The vertical edge an element is positioned from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    /// Distance of the element's top edge from the page's top edge.
    Top(f64),
    /// Distance of the element's bottom edge from the viewport's bottom client edge.
    Bottom(f64),
}

/// A rectangle known only by one horizontal and one vertical edge.
///
/// A `top right` placement is naturally expressed as distances from the right and
/// bottom edges; the element's own size is only needed when converting back to a `Rect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRect {
    pub horizontal: HorizontalEdge,
    pub vertical: VerticalEdge,
}

impl EdgeRect {
    #[must_use]
    pub fn new(horizontal: HorizontalEdge, vertical: VerticalEdge) -> Self {
        Self { horizontal, vertical }
    }

    /// Convert to an absolute `Rect` for an element of `size` inside `viewport`.
    ///
    /// `Right` and `Bottom` distances are measured against the viewport's client size.
    #[must_use]
    pub fn resolve(&self, size: Size, viewport: &Viewport) -> Rect {
        let left = match self.horizontal {
            HorizontalEdge::Left(left) => left,
            HorizontalEdge::Right(right) => viewport.width - right - size.width,
        };
        let top = match self.vertical {
            VerticalEdge::Top(top) => top,
            VerticalEdge::Bottom(bottom) => viewport.height - bottom - size.height,
        };
        Rect::new(top, left, size.width, size.height)
    }

    /// Round both edges to whole pixels.
    #[must_use]
    pub fn rounded(self) -> Self {
        let horizontal = match self.horizontal {
            HorizontalEdge::Left(v) => HorizontalEdge::Left(round_px(v)),
            HorizontalEdge::Right(v) => HorizontalEdge::Right(round_px(v)),
        };
        let vertical = match self.vertical {
            VerticalEdge::Top(v) => VerticalEdge::Top(round_px(v)),
            VerticalEdge::Bottom(v) => VerticalEdge::Bottom(round_px(v)),
        };
        Self { horizontal, vertical }
    }
}

/// Round to the nearest whole pixel, halves toward positive infinity.
///
/// Matches browser `Math.round`, so `-2.5` rounds to `-2` rather than `-3`.
#[must_use]
pub fn round_px(value: f64) -> f64 {
    (value + 0.5).floor()
}
