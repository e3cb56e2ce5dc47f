use super::*;

fn config_on(on: Vec<TriggerEvent>) -> PopupConfig {
    PopupConfig { on, ..PopupConfig::default() }
}

#[test]
fn default_config_opens_on_hover() {
    let b = TriggerBehavior::from_config(&PopupConfig::default());
    assert!(b.open_on_trigger_mouse_enter);
    assert!(!b.close_on_trigger_mouse_leave);
    assert_eq!(b.mouse_enter_delay, Some(Duration::from_millis(50)));
    assert_eq!(b.mouse_leave_delay, Some(Duration::from_millis(70)));
    assert!(!b.open_on_trigger_click);
}

#[test]
fn click_toggles_and_closes_on_document_click() {
    let b = TriggerBehavior::from_config(&config_on(vec![TriggerEvent::Click]));
    assert!(b.open_on_trigger_click);
    assert!(b.close_on_trigger_click);
    assert!(b.close_on_document_click);
    assert!(!b.open_on_trigger_mouse_enter);
    assert_eq!(b.mouse_leave_delay, None);
}

#[test]
fn focus_opens_on_focus_and_closes_on_blur() {
    let b = TriggerBehavior::from_config(&config_on(vec![TriggerEvent::Focus]));
    assert!(b.open_on_trigger_focus);
    assert!(b.close_on_trigger_blur);
    assert!(!b.open_on_trigger_click);
}

#[test]
fn hoverable_without_hover_keeps_long_leave_delay() {
    let cfg = PopupConfig { hoverable: true, ..config_on(vec![TriggerEvent::Click]) };
    let b = TriggerBehavior::from_config(&cfg);
    assert!(b.close_on_portal_mouse_leave);
    assert_eq!(b.mouse_leave_delay, Some(Duration::from_millis(300)));
}

#[test]
fn hover_leave_delay_overrides_hoverable() {
    let cfg = PopupConfig { hoverable: true, ..config_on(vec![TriggerEvent::Hover]) };
    let b = TriggerBehavior::from_config(&cfg);
    assert!(b.close_on_portal_mouse_leave);
    assert_eq!(b.mouse_leave_delay, Some(Duration::from_millis(70)));
}

#[test]
fn combined_triggers_merge() {
    let b = TriggerBehavior::from_config(&config_on(vec![TriggerEvent::Click, TriggerEvent::Focus]));
    assert!(b.open_on_trigger_click);
    assert!(b.open_on_trigger_focus);
    assert!(!b.open_on_trigger_mouse_enter);
}

#[test]
fn no_triggers_wires_nothing() {
    assert_eq!(TriggerBehavior::from_config(&config_on(Vec::new())), TriggerBehavior::default());
}
