//! Ports the host implements so the controller can measure and subscribe without
//! touching a document or an event loop.

use crate::geometry::{Rect, Size, Viewport};

/// Measurement and event-subscription capabilities supplied by the rendering host.
pub trait PopupHost {
    /// Current anchor rectangle in client coordinates, or `None` if it is not attached.
    fn measure_anchor(&self) -> Option<Rect>;

    /// Current floating element size, or `None` before its first paint.
    fn measure_floating(&self) -> Option<Size>;

    /// Current viewport dimensions and scroll offsets.
    fn viewport(&self) -> Viewport;

    /// Start delivering scroll events to `PopupCore::on_scroll`.
    fn subscribe_scroll(&mut self) {}

    /// Stop delivering scroll events.
    fn unsubscribe_scroll(&mut self) {}
}
