//! Shared numeric constants for the layout engine.

use std::time::Duration;

// ── Geometry ────────────────────────────────────────────────────

/// Gap between the anchor and a side flyout (`right center` / `left center`), in pixels.
pub const FLYOUT_GAP_PX: f64 = 8.0;

// ── Scroll ──────────────────────────────────────────────────────

/// How long a popup hidden by a scroll event stays hidden before the host re-shows it.
pub const SCROLL_REOPEN_DELAY: Duration = Duration::from_millis(50);

// ── Trigger delays ──────────────────────────────────────────────

/// Delay before opening on trigger mouse enter.
pub const HOVER_ENTER_DELAY: Duration = Duration::from_millis(50);

/// Delay before closing after the pointer leaves a hover-triggered popup.
pub const HOVER_LEAVE_DELAY: Duration = Duration::from_millis(70);

/// Delay before closing after the pointer leaves a hoverable popup.
pub const HOVERABLE_LEAVE_DELAY: Duration = Duration::from_millis(300);
