#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::Viewport;

#[derive(Default)]
struct FakeHost {
    anchor: Option<Rect>,
    floating: Option<Size>,
    viewport: Viewport,
    subscribes: usize,
    unsubscribes: usize,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            anchor: Some(Rect::new(100.0, 100.0, 50.0, 20.0)),
            floating: Some(Size::new(80.0, 30.0)),
            viewport: Viewport::new(1000.0, 800.0),
            ..Self::default()
        }
    }

    fn subscribed(&self) -> bool {
        self.subscribes > self.unsubscribes
    }
}

impl PopupHost for FakeHost {
    fn measure_anchor(&self) -> Option<Rect> {
        self.anchor
    }

    fn measure_floating(&self) -> Option<Size> {
        self.floating
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn subscribe_scroll(&mut self) {
        self.subscribes += 1;
    }

    fn unsubscribe_scroll(&mut self) {
        self.unsubscribes += 1;
    }
}

fn layout_of(actions: &[Action]) -> Option<LayoutResult> {
    actions.iter().find_map(|a| match a {
        Action::Layout(result) => Some(*result),
        _ => None,
    })
}

fn hide_on_scroll() -> PopupConfig {
    PopupConfig { hide_on_scroll: true, ..PopupConfig::default() }
}

// --- Open / mount ---

#[test]
fn open_measures_anchor() {
    let host = FakeHost::new();
    let mut popup = PopupCore::default();
    assert_eq!(popup.open(&host), vec![Action::Opened]);
    assert!(popup.is_open());
    assert_eq!(popup.anchor(), host.anchor);
}

#[test]
fn mount_lays_out_with_configured_placement() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::default();
    popup.open(&host);
    let actions = popup.mount(&mut host);
    let result = layout_of(&actions).unwrap();
    assert_eq!(result.placement, Placement::TopLeft);
    assert_eq!((result.rect.left(), result.rect.top()), (100.0, 70.0));
    assert_eq!(actions.len(), 1);
}

#[test]
fn mount_before_open_does_nothing() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::default();
    assert!(popup.mount(&mut host).is_empty());
    assert_eq!(host.subscribes, 0);
}

#[test]
fn unpainted_floating_element_emits_no_layout() {
    let mut host = FakeHost { floating: None, ..FakeHost::new() };
    let mut popup = PopupCore::default();
    popup.open(&host);
    assert!(popup.mount(&mut host).is_empty());

    host.floating = Some(Size::new(80.0, 30.0));
    assert!(layout_of(&popup.relayout(&host)).is_some());
}

#[test]
fn relayout_keeps_last_anchor_when_detached() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::default();
    popup.open(&host);
    popup.mount(&mut host);
    host.anchor = None;
    let result = layout_of(&popup.relayout(&host)).unwrap();
    assert_eq!(result.rect.left(), 100.0);
}

// --- Flip notifications ---

#[test]
fn flip_change_is_reported_once() {
    let mut host = FakeHost { viewport: Viewport::new(150.0, 800.0), ..FakeHost::new() };
    let mut popup = PopupCore::default();
    popup.open(&host);

    let actions = popup.mount(&mut host);
    assert_eq!(
        actions[1],
        Action::FlipChanged { flipped: true, actual: Placement::TopRight, original: Placement::TopLeft }
    );

    // Same geometry again: no new notification.
    assert_eq!(popup.relayout(&host).len(), 1);

    // Viewport widens: the configured placement fits again.
    host.viewport = Viewport::new(1000.0, 800.0);
    let actions = popup.relayout(&host);
    assert_eq!(
        actions[1],
        Action::FlipChanged { flipped: false, actual: Placement::TopLeft, original: Placement::TopLeft }
    );
}

#[test]
fn set_config_applies_on_next_pass() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::default();
    popup.open(&host);
    popup.mount(&mut host);
    popup.set_config(PopupConfig { placement: Placement::BottomRight, ..PopupConfig::default() });
    let result = layout_of(&popup.relayout(&host)).unwrap();
    assert_eq!(result.placement, Placement::BottomRight);
    assert_eq!(popup.config().placement, Placement::BottomRight);
}

// --- Scroll hiding ---

#[test]
fn scroll_is_ignored_without_hide_on_scroll() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::default();
    popup.open(&host);
    popup.mount(&mut host);
    assert_eq!(host.subscribes, 0);
    assert!(popup.on_scroll(&mut host).is_empty());
}

#[test]
fn mount_subscribes_when_hide_on_scroll() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::new(hide_on_scroll());
    popup.open(&host);
    popup.mount(&mut host);
    assert!(host.subscribed());
}

#[test]
fn scroll_hides_and_requests_reopen() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::new(hide_on_scroll());
    popup.open(&host);
    popup.mount(&mut host);

    let actions = popup.on_scroll(&mut host);
    assert_eq!(actions, vec![Action::Hide, Action::ReopenAfter(Duration::from_millis(50))]);
    assert!(popup.is_hidden());
    assert!(!host.subscribed());

    // Further scroll events while hidden are ignored.
    assert!(popup.on_scroll(&mut host).is_empty());
}

#[test]
fn reopen_shows_resubscribes_and_relayouts() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::new(hide_on_scroll());
    popup.open(&host);
    popup.mount(&mut host);
    popup.on_scroll(&mut host);

    host.viewport = host.viewport.scrolled(0.0, 40.0);
    let actions = popup.reopen(&mut host);
    assert_eq!(actions[0], Action::Show);
    assert!(layout_of(&actions).is_some());
    assert!(!popup.is_hidden());
    assert!(host.subscribed());
}

#[test]
fn reopen_without_hide_does_nothing() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::new(hide_on_scroll());
    popup.open(&host);
    popup.mount(&mut host);
    assert!(popup.reopen(&mut host).is_empty());
}

// --- Unmount / close ---

#[test]
fn unmount_releases_subscription() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::new(hide_on_scroll());
    popup.open(&host);
    popup.mount(&mut host);
    popup.unmount(&mut host);
    assert!(!host.subscribed());
    assert!(popup.on_scroll(&mut host).is_empty());
}

#[test]
fn close_resets_state() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::new(hide_on_scroll());
    popup.open(&host);
    popup.mount(&mut host);
    popup.on_scroll(&mut host);

    assert_eq!(popup.close(&mut host), vec![Action::Closed]);
    assert!(!popup.is_open());
    assert!(!popup.is_hidden());
    assert_eq!(popup.anchor(), None);
    assert_eq!(host.subscribes, host.unsubscribes);
    assert!(popup.relayout(&host).is_empty());
}

#[test]
fn close_when_closed_does_nothing() {
    let mut host = FakeHost::new();
    let mut popup = PopupCore::default();
    assert!(popup.close(&mut host).is_empty());
}

#[test]
fn trigger_behavior_follows_config() {
    let popup = PopupCore::new(PopupConfig { on: vec![crate::config::TriggerEvent::Click], ..PopupConfig::default() });
    assert!(popup.trigger_behavior().open_on_trigger_click);
}

#[test]
fn host_trait_is_object_safe() {
    let mut host = FakeHost::new();
    let dyn_host: &mut dyn PopupHost = &mut host;
    let mut popup = PopupCore::default();
    popup.open(&*dyn_host);
    assert!(layout_of(&popup.mount(dyn_host)).is_some());
}
