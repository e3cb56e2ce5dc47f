//! Popup controller: drives layout passes and scroll hiding from host events.
//!
//! DESIGN
//! ======
//! `PopupCore` is the framework-free half of a popup component. The host forwards its
//! lifecycle events (open, mount, resize, scroll, unmount, close) and applies the
//! returned [`Action`]s. Measurements come through [`PopupHost`]; timers stay with the
//! host, so a scroll-hidden popup asks to be reopened via [`Action::ReopenAfter`]
//! rather than scheduling anything itself.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use std::time::Duration;

use tracing::debug;

use crate::config::PopupConfig;
use crate::consts::SCROLL_REOPEN_DELAY;
use crate::geometry::{Rect, Size};
use crate::host::PopupHost;
use crate::layout::{LayoutResult, resolve_layout};
use crate::placement::Placement;
use crate::trigger::TriggerBehavior;

/// Actions returned from popup handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Mount the floating element.
    Opened,
    /// Unmount the floating element.
    Closed,
    /// Position the floating element.
    Layout(LayoutResult),
    /// The chosen placement started or stopped differing from the configured one.
    FlipChanged { flipped: bool, actual: Placement, original: Placement },
    /// Hide the floating element but keep the popup open.
    Hide,
    /// Call [`PopupCore::reopen`] after this delay.
    ReopenAfter(Duration),
    /// Show the floating element again after [`Action::Hide`].
    Show,
}

/// Popup state that doesn't depend on any rendering framework.
#[derive(Debug, Clone, Default)]
pub struct PopupCore {
    config: PopupConfig,
    anchor: Option<Rect>,
    floating: Option<Size>,
    open: bool,
    mounted: bool,
    scroll_subscribed: bool,
    hidden_by_scroll: bool,
    flipped: bool,
}

impl PopupCore {
    #[must_use]
    pub fn new(config: PopupConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Configuration ---

    #[must_use]
    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next layout pass.
    pub fn set_config(&mut self, config: PopupConfig) {
        self.config = config;
    }

    /// Event wiring the host should install for the current configuration.
    #[must_use]
    pub fn trigger_behavior(&self) -> TriggerBehavior {
        TriggerBehavior::from_config(&self.config)
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden_by_scroll
    }

    /// The last measured anchor rectangle.
    #[must_use]
    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    // --- Lifecycle ---

    /// The trigger fired: capture the anchor position and ask the host to mount.
    pub fn open<H: PopupHost + ?Sized>(&mut self, host: &H) -> Vec<Action> {
        debug!("popup open");
        self.anchor = host.measure_anchor();
        self.open = true;
        vec![Action::Opened]
    }

    /// The floating element is in the render tree: subscribe to scroll if configured,
    /// then lay it out.
    pub fn mount<H: PopupHost + ?Sized>(&mut self, host: &mut H) -> Vec<Action> {
        debug!(hide_on_scroll = self.config.hide_on_scroll, "popup mount");
        if !self.open {
            return Vec::new();
        }
        self.mounted = true;
        self.subscribe(host);
        self.relayout(&*host)
    }

    /// Re-measure and recompute the layout.
    ///
    /// Emits nothing until both the anchor and the floating element have been measured.
    pub fn relayout<H: PopupHost + ?Sized>(&mut self, host: &H) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        if let Some(anchor) = host.measure_anchor() {
            self.anchor = Some(anchor);
        }
        self.floating = host.measure_floating();

        let (Some(anchor), Some(floating)) = (self.anchor, self.floating) else {
            return Vec::new();
        };

        let result = resolve_layout(&anchor, floating, &self.config.layout_options(), &host.viewport());
        let mut actions = vec![Action::Layout(result)];

        if result.flipped() != self.flipped {
            self.flipped = result.flipped();
            actions.push(Action::FlipChanged {
                flipped: self.flipped,
                actual: result.placement,
                original: result.original,
            });
        }
        actions
    }

    /// The page scrolled. Hides the popup briefly when `hide_on_scroll` is set.
    pub fn on_scroll<H: PopupHost + ?Sized>(&mut self, host: &mut H) -> Vec<Action> {
        if !self.config.hide_on_scroll || !self.mounted || self.hidden_by_scroll {
            return Vec::new();
        }
        debug!("popup hidden by scroll");
        self.hidden_by_scroll = true;
        self.unsubscribe(host);
        vec![Action::Hide, Action::ReopenAfter(SCROLL_REOPEN_DELAY)]
    }

    /// The reopen delay elapsed: show the popup again at its new position.
    pub fn reopen<H: PopupHost + ?Sized>(&mut self, host: &mut H) -> Vec<Action> {
        if !self.hidden_by_scroll {
            return Vec::new();
        }
        debug!("popup reopen after scroll");
        self.hidden_by_scroll = false;
        if !self.open || !self.mounted {
            return Vec::new();
        }
        self.subscribe(host);
        let mut actions = vec![Action::Show];
        actions.extend(self.relayout(&*host));
        actions
    }

    /// The floating element left the render tree.
    pub fn unmount<H: PopupHost + ?Sized>(&mut self, host: &mut H) {
        debug!("popup unmount");
        self.mounted = false;
        self.unsubscribe(host);
    }

    /// The popup closed: release subscriptions and forget measurements.
    pub fn close<H: PopupHost + ?Sized>(&mut self, host: &mut H) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        debug!("popup close");
        if self.mounted {
            self.unmount(host);
        }
        self.open = false;
        self.anchor = None;
        self.floating = None;
        self.hidden_by_scroll = false;
        self.flipped = false;
        vec![Action::Closed]
    }

    fn subscribe<H: PopupHost + ?Sized>(&mut self, host: &mut H) {
        if self.config.hide_on_scroll && !self.scroll_subscribed {
            host.subscribe_scroll();
            self.scroll_subscribed = true;
        }
    }

    fn unsubscribe<H: PopupHost + ?Sized>(&mut self, host: &mut H) {
        if self.scroll_subscribed {
            host.unsubscribe_scroll();
            self.scroll_subscribed = false;
        }
    }
}
