use keystate_core::{
    key_spec::parse_record, InputEvent, InputHub, KeyRecord, KeyStateTracker, SourceId, TrackerId,
};

/// Builds a record from a key name such as "LShift" or "a"
pub fn key(name: &str) -> KeyRecord {
    parse_record(name).unwrap()
}

/// Presses each named key, in order
#[allow(dead_code)]
pub fn press_all(tracker: &mut KeyStateTracker, names: &[&str]) {
    for name in names {
        tracker.key_pressed(key(name));
    }
}

#[allow(dead_code)]
pub fn press(hub: &mut InputHub, source: SourceId, name: &str) {
    hub.dispatch(source, InputEvent::KeyPressed(key(name))).unwrap();
}

#[allow(dead_code)]
pub fn release(hub: &mut InputHub, source: SourceId, name: &str) {
    hub.dispatch(source, InputEvent::KeyReleased(key(name))).unwrap();
}

#[allow(dead_code)]
pub fn text(hub: &InputHub, tracker: TrackerId) -> String {
    hub.tracker(tracker).unwrap().render_text()
}

/// A hub with `count` fields, each carrying its own tracker, like a form of
/// text fields
#[allow(dead_code)]
pub fn create_fields(count: usize) -> (InputHub, Vec<SourceId>, Vec<TrackerId>) {
    let mut hub = InputHub::new();
    let mut sources = Vec::new();
    let mut trackers = Vec::new();
    for i in 0..count {
        let source = hub.add_source(format!("field{}", i + 1));
        trackers.push(hub.add_tracker_on(&[source]).unwrap());
        sources.push(source);
    }
    (hub, sources, trackers)
}
