//! Viewport-aware positioning for popups, tooltips and other floating elements.
//!
//! Given the anchor's measured rectangle, the floating element's size and the current
//! viewport, [`layout::resolve_layout`] picks one of eight named placements, falling
//! back to alternates when the preferred one would overflow the viewport. The crate
//! holds no rendering code: the host measures elements, applies the resulting
//! [`layout::LayoutResult`], and forwards lifecycle events to [`popup::PopupCore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Fallback orchestration and the layout result |
//! | [`solver`] | Placement geometry for a single placement |
//! | [`offset`] | Offset values and how they shift a placement |
//! | [`visibility`] | Viewport visibility checks |
//! | [`placement`] | The eight placements and their fallback order |
//! | [`geometry`] | Rectangles, sizes, the viewport, edge-anchored rectangles |
//! | [`popup`] | Framework-free popup controller and its host actions |
//! | [`host`] | Measurement and scroll-subscription ports |
//! | [`config`] | Popup configuration and JSON loading |
//! | [`trigger`] | Open/close wiring derived from configuration |
//! | [`error`] | Configuration errors |
//! | [`consts`] | Shared constants (flyout gap, delays) |

pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod offset;
pub mod placement;
pub mod popup;
pub mod solver;
pub mod trigger;
pub mod visibility;

pub use config::{PopupConfig, TriggerEvent};
pub use error::ConfigError;
pub use geometry::{EdgeRect, HorizontalEdge, Rect, Size, VerticalEdge, Viewport};
pub use host::PopupHost;
pub use layout::{LayoutOptions, LayoutResult, resolve_layout};
pub use offset::Offset;
pub use placement::Placement;
pub use popup::{Action, PopupCore};
