mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::*;
use keystate_core::{
    Error, FocusEvent, InputEvent, InputHub, KeyCode, KeyLocation, KeyRecord, Propagation,
    SourceId,
};
use pretty_assertions::assert_eq;

#[test]
fn test_focus_transfer_moves_pressed_keys() {
    let (mut hub, fields, trackers) = create_fields(2);
    hub.transfer_focus(Some(fields[0])).unwrap();
    press(&mut hub, fields[0], "x");
    let before = hub.tracker(trackers[0]).unwrap().clone();

    hub.transfer_focus(Some(fields[1])).unwrap();

    assert_eq!(hub.tracker(trackers[1]).unwrap(), &before);
    assert!(hub.tracker(trackers[0]).unwrap().is_empty());
    assert_eq!(hub.focus_owner(), Some(fields[1]));
}

#[test]
fn test_right_control_follows_focus() {
    let (mut hub, fields, trackers) = create_fields(2);
    hub.transfer_focus(Some(fields[0])).unwrap();
    hub.dispatch_to_focused(InputEvent::KeyPressed(KeyRecord::new(
        KeyCode::Control,
        KeyLocation::Right,
    )))
    .unwrap();

    hub.transfer_focus(Some(fields[1])).unwrap();

    let second = hub.tracker(trackers[1]).unwrap();
    assert!(second.is_control_down());
    assert!(second.is_pressed_at(KeyCode::Control, KeyLocation::Right));
    assert!(hub.tracker(trackers[0]).unwrap().is_empty());

    // The release now arrives at the newly focused field
    release(&mut hub, fields[1], "RCtrl");
    assert!(hub.tracker(trackers[1]).unwrap().is_empty());
}

#[test]
fn test_handoff_replaces_destination_state() {
    let (mut hub, fields, trackers) = create_fields(2);
    press(&mut hub, fields[1], "q");
    press(&mut hub, fields[0], "LShift");
    press(&mut hub, fields[0], "a");

    hub.dispatch(fields[0], InputEvent::FocusLost(FocusEvent::new(Some(fields[1]))))
        .unwrap();

    assert_eq!(text(&hub, trackers[1]), "Shift+A");
    assert_eq!(text(&hub, trackers[0]), "");
}

#[test]
fn test_handoff_copy_is_independent() {
    let (mut hub, fields, trackers) = create_fields(2);
    press(&mut hub, fields[0], "a");
    hub.dispatch(fields[0], InputEvent::FocusLost(FocusEvent::new(Some(fields[1]))))
        .unwrap();

    press(&mut hub, fields[0], "b");
    press(&mut hub, fields[1], "c");

    assert_eq!(text(&hub, trackers[0]), "B");
    assert_eq!(text(&hub, trackers[1]), "A+C");
}

#[test]
fn test_focus_lost_without_opposite_clears() {
    let (mut hub, fields, trackers) = create_fields(1);
    hub.transfer_focus(Some(fields[0])).unwrap();
    press(&mut hub, fields[0], "LAlt");

    hub.transfer_focus(None).unwrap();

    assert!(hub.tracker(trackers[0]).unwrap().is_empty());
    assert_eq!(hub.focus_owner(), None);
}

#[test]
fn test_focus_lost_to_untracked_source_clears() {
    let (mut hub, fields, trackers) = create_fields(1);
    let button = hub.add_source("button");
    hub.transfer_focus(Some(fields[0])).unwrap();
    press(&mut hub, fields[0], "Space");

    hub.transfer_focus(Some(button)).unwrap();

    assert!(hub.tracker(trackers[0]).unwrap().is_empty());
    assert_eq!(hub.focus_owner(), Some(button));
}

#[test]
fn test_only_first_tracker_on_opposite_receives_handoff() {
    let mut hub = InputHub::new();
    let first = hub.add_source("first");
    let second = hub.add_source("second");
    let source_tracker = hub.add_tracker_on(&[first]).unwrap();
    let primary = hub.add_tracker_on(&[second]).unwrap();
    let secondary = hub.add_tracker_on(&[second]).unwrap();

    press(&mut hub, first, "F5");
    hub.dispatch(first, InputEvent::FocusLost(FocusEvent::new(Some(second))))
        .unwrap();

    assert_eq!(text(&hub, primary), "F5");
    assert_eq!(text(&hub, secondary), "");
    assert_eq!(text(&hub, source_tracker), "");
}

#[test]
fn test_handoff_skips_the_losing_tracker_itself() {
    let mut hub = InputHub::new();
    let first = hub.add_source("first");
    let second = hub.add_source("second");
    let shared = hub.add_tracker_on(&[first]).unwrap();
    let own = hub.add_tracker();
    // The shared tracker is attached to the opposite source before its own tracker
    hub.attach(shared, &[second]).unwrap();
    hub.attach(own, &[second]).unwrap();

    press(&mut hub, first, "LCtrl");
    hub.dispatch(first, InputEvent::FocusLost(FocusEvent::new(Some(second))))
        .unwrap();

    assert_eq!(text(&hub, own), "Ctrl");
    assert_eq!(text(&hub, shared), "");
}

#[test]
fn test_transfer_to_current_owner_is_noop() {
    let (mut hub, fields, trackers) = create_fields(1);
    hub.transfer_focus(Some(fields[0])).unwrap();
    press(&mut hub, fields[0], "a");

    hub.transfer_focus(Some(fields[0])).unwrap();

    assert_eq!(text(&hub, trackers[0]), "A");
}

#[test]
fn test_focus_event_with_unknown_opposite_is_rejected() {
    let (mut hub, fields, trackers) = create_fields(1);
    // Index 0 in both hubs
    let mut other = InputHub::new();
    let foreign = other.add_source("field1");
    press(&mut hub, fields[0], "a");

    let result = hub.dispatch(fields[0], InputEvent::FocusLost(FocusEvent::new(Some(foreign))));

    assert_eq!(result, Err(Error::UnknownSource(foreign)));
    assert_eq!(text(&hub, trackers[0]), "A");
}

#[test]
fn test_observer_sees_updated_state_and_consumes_typed() {
    let (mut hub, fields, trackers) = create_fields(2);
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&seen);
    let tracker = trackers[0];
    let observer = hub.add_observer(Box::new(
        move |hub: &InputHub, _source: SourceId, event: &InputEvent| {
            log.borrow_mut().push(hub.tracker(tracker).unwrap().render_text());
            match event {
                InputEvent::KeyTyped(_) => Propagation::Consume,
                _ => Propagation::Continue,
            }
        },
    ));
    hub.attach_observer(observer, &[fields[0]]).unwrap();

    hub.transfer_focus(Some(fields[0])).unwrap();
    press(&mut hub, fields[0], "LShift");
    press(&mut hub, fields[0], "a");
    let typed = hub
        .dispatch(fields[0], InputEvent::KeyTyped(key("a")))
        .unwrap();
    release(&mut hub, fields[0], "a");
    hub.transfer_focus(Some(fields[1])).unwrap();

    assert_eq!(typed, Propagation::Consume);
    assert_eq!(
        *seen.borrow(),
        vec!["", "Shift", "Shift+A", "Shift+A", "Shift", ""]
    );
    assert_eq!(text(&hub, trackers[1]), "Shift");
}

#[test]
fn test_dispatch_without_observers_continues() {
    let (mut hub, fields, _) = create_fields(1);
    let propagation = hub
        .dispatch(fields[0], InputEvent::KeyTyped(key("a")))
        .unwrap();
    assert_eq!(propagation, Propagation::Continue);
}
