//! Pixel offsets applied after placement geometry.
//!
//! An offset is configured as a scalar (both axes), a `[horizontal, vertical]` pair, or a
//! `"horizontal,vertical"` string. `apply_offset` moves whichever edges a placement uses,
//! so the same offset value works in every quadrant.

#[cfg(test)]
#[path = "offset_test.rs"]
mod offset_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{EdgeRect, HorizontalEdge, VerticalEdge};

/// Horizontal and vertical displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "OffsetRepr", into = "[f64; 2]")]
pub struct Offset {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Offset {
    #[must_use]
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }

    /// The same displacement on both axes.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0
    }
}

impl FromStr for Offset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidOffset(s.to_string());
        let parse = |part: &str| part.trim().parse::<f64>().map_err(|_| invalid());

        let parts: Vec<&str> = s.split(',').collect();
        let offset = match parts[..] {
            [value] => Self::uniform(parse(value)?),
            [horizontal, vertical] => Self::new(parse(horizontal)?, parse(vertical)?),
            _ => return Err(invalid()),
        };
        if !offset.horizontal.is_finite() || !offset.vertical.is_finite() {
            return Err(invalid());
        }
        Ok(offset)
    }
}

/// Accepted configuration shapes for an offset.
#[derive(Deserialize)]
#[serde(untagged)]
enum OffsetRepr {
    Scalar(f64),
    Pair([f64; 2]),
    Text(String),
}

impl TryFrom<OffsetRepr> for Offset {
    type Error = ConfigError;

    fn try_from(repr: OffsetRepr) -> Result<Self, Self::Error> {
        match repr {
            OffsetRepr::Scalar(value) => Ok(Self::uniform(value)),
            OffsetRepr::Pair([horizontal, vertical]) => Ok(Self::new(horizontal, vertical)),
            OffsetRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Offset> for [f64; 2] {
    fn from(offset: Offset) -> Self {
        [offset.horizontal, offset.vertical]
    }
}

/// Shift `edges` by `offset`.
///
/// Horizontal: `right` or `left` shrinks by the horizontal offset. Vertical: `top` or
/// `bottom` grows by the vertical offset.
#[must_use]
pub fn apply_offset(edges: EdgeRect, offset: Offset) -> EdgeRect {
    let horizontal = match edges.horizontal {
        HorizontalEdge::Right(right) => HorizontalEdge::Right(right - offset.horizontal),
        HorizontalEdge::Left(left) => HorizontalEdge::Left(left - offset.horizontal),
    };
    let vertical = match edges.vertical {
        VerticalEdge::Top(top) => VerticalEdge::Top(top + offset.vertical),
        VerticalEdge::Bottom(bottom) => VerticalEdge::Bottom(bottom + offset.vertical),
    };
    EdgeRect { horizontal, vertical }
}
