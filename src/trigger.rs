//! Which host events open and close a popup, derived from its configuration.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use std::time::Duration;

use crate::config::{PopupConfig, TriggerEvent};
use crate::consts::{HOVER_ENTER_DELAY, HOVER_LEAVE_DELAY, HOVERABLE_LEAVE_DELAY};

/// Open/close wiring the host should install around the trigger and the popup.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerBehavior {
    pub open_on_trigger_click: bool,
    pub close_on_trigger_click: bool,
    pub close_on_document_click: bool,
    pub open_on_trigger_focus: bool,
    pub close_on_trigger_blur: bool,
    pub open_on_trigger_mouse_enter: bool,
    pub close_on_trigger_mouse_leave: bool,
    pub close_on_portal_mouse_leave: bool,
    /// Delay before a mouse-enter opens the popup.
    pub mouse_enter_delay: Option<Duration>,
    /// Delay before a mouse-leave closes the popup.
    pub mouse_leave_delay: Option<Duration>,
}

impl TriggerBehavior {
    /// Derive the wiring for `config`.
    ///
    /// Hover's 70ms leave delay takes precedence over the 300ms hoverable delay when both
    /// are configured.
    #[must_use]
    pub fn from_config(config: &PopupConfig) -> Self {
        let mut behavior = Self::default();

        if config.hoverable {
            behavior.close_on_portal_mouse_leave = true;
            behavior.mouse_leave_delay = Some(HOVERABLE_LEAVE_DELAY);
        }
        if config.triggers_on(TriggerEvent::Click) {
            behavior.open_on_trigger_click = true;
            behavior.close_on_trigger_click = true;
            behavior.close_on_document_click = true;
        }
        if config.triggers_on(TriggerEvent::Focus) {
            behavior.open_on_trigger_focus = true;
            behavior.close_on_trigger_blur = true;
        }
        if config.triggers_on(TriggerEvent::Hover) {
            behavior.open_on_trigger_mouse_enter = true;
            behavior.close_on_trigger_mouse_leave = false;
            behavior.mouse_leave_delay = Some(HOVER_LEAVE_DELAY);
            behavior.mouse_enter_delay = Some(HOVER_ENTER_DELAY);
        }

        behavior
    }
}
