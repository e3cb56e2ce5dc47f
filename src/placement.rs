//! Named placements of a floating element relative to its anchor.
//!
//! There are exactly eight placements. Their canonical order (`Placement::ALL`) is the
//! order fallbacks are tried in when the preferred placement does not fit.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Vertical relationship to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Vertically centred on the anchor (side flyouts).
    Center,
}

/// Horizontal alignment with the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// Left edges aligned (or, for side flyouts, to the anchor's left).
    Left,
    /// Right edges aligned (or, for side flyouts, to the anchor's right).
    Right,
    /// Horizontally centred on the anchor.
    Center,
}

/// Where a floating element sits relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Placement {
    #[default]
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    RightCenter,
    LeftCenter,
    TopCenter,
    BottomCenter,
}

impl Placement {
    /// All placements in canonical fallback order.
    pub const ALL: [Placement; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::RightCenter,
        Self::LeftCenter,
        Self::TopCenter,
        Self::BottomCenter,
    ];

    #[must_use]
    pub fn vertical(self) -> VerticalAnchor {
        match self {
            Self::TopLeft | Self::TopRight | Self::TopCenter => VerticalAnchor::Top,
            Self::BottomLeft | Self::BottomRight | Self::BottomCenter => VerticalAnchor::Bottom,
            Self::RightCenter | Self::LeftCenter => VerticalAnchor::Center,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> HorizontalAnchor {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::LeftCenter => HorizontalAnchor::Left,
            Self::TopRight | Self::BottomRight | Self::RightCenter => HorizontalAnchor::Right,
            Self::TopCenter | Self::BottomCenter => HorizontalAnchor::Center,
        }
    }

    /// Build a placement from its anchors. Returns `None` for the one pair with no
    /// placement (centred on both axes).
    #[must_use]
    pub fn from_anchors(vertical: VerticalAnchor, horizontal: HorizontalAnchor) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.vertical() == vertical && p.horizontal() == horizontal)
    }

    /// The placement's name as used in configuration, e.g. `"top left"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top left",
            Self::TopRight => "top right",
            Self::BottomRight => "bottom right",
            Self::BottomLeft => "bottom left",
            Self::RightCenter => "right center",
            Self::LeftCenter => "left center",
            Self::TopCenter => "top center",
            Self::BottomCenter => "bottom center",
        }
    }

    /// Candidates to try when this placement does not fit: every other placement in
    /// canonical order, then this one last.
    pub fn fallback_order(self) -> impl Iterator<Item = Placement> {
        Self::ALL
            .into_iter()
            .filter(move |p| *p != self)
            .chain(std::iter::once(self))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| ConfigError::InvalidPlacement(s.to_string()))
    }
}

impl TryFrom<String> for Placement {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.as_str().to_string()
    }
}
