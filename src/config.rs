//! Popup configuration: placement, offset, trigger events and behaviour flags.
//!
//! Configuration is validated when it is built. An unknown placement or a malformed
//! offset is rejected here and never reaches the layout engine.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::layout::LayoutOptions;
use crate::offset::Offset;
use crate::placement::Placement;

/// A host event that opens (and closes) the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerEvent {
    Hover,
    Click,
    Focus,
}

/// Full popup configuration.
///
/// Every field is optional in serialized form. Defaults:
/// - `placement`: `"top left"`
/// - `offset`: `0,0`
/// - `on`: `"hover"` (a single event or a list)
/// - `hoverable`: `false`
/// - `hide_on_scroll`: `false`
/// - `auto_flip`: `true`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub placement: Placement,
    pub offset: Offset,
    #[serde(deserialize_with = "one_or_many")]
    pub on: Vec<TriggerEvent>,
    /// Keep the popup open while the pointer is over it.
    pub hoverable: bool,
    /// Hide the popup when the page scrolls.
    pub hide_on_scroll: bool,
    /// Fall back to another placement when the preferred one overflows the viewport.
    pub auto_flip: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: Offset::default(),
            on: vec![TriggerEvent::Hover],
            hoverable: false,
            hide_on_scroll: false,
            auto_flip: true,
        }
    }
}

impl PopupConfig {
    /// Parse a JSON configuration document, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Whether `event` is one of the configured triggers.
    #[must_use]
    pub fn triggers_on(&self, event: TriggerEvent) -> bool {
        self.on.contains(&event)
    }

    /// The subset of configuration the layout engine needs.
    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions { placement: self.placement, offset: self.offset, auto_flip: self.auto_flip }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<TriggerEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(TriggerEvent),
        Many(Vec<TriggerEvent>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(event) => vec![event],
        OneOrMany::Many(events) => events,
    })
}
