use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, trace};

use super::{
    FocusEvent, InputEvent, KeyObserver, Listener, ObserverId, Propagation, SourceId, TrackerId,
};
use crate::{Error, KeyStateTracker, Result};

static NEXT_HUB_TAG: AtomicU32 = AtomicU32::new(1);

struct InputSource {
    name: String,
    listeners: Vec<Listener>,
}

/// Registry of input sources, their trackers and observers.
///
/// The hub is the only owner of tracker state. A tracker attached to several
/// sources accumulates one combined state across all of them.
pub struct InputHub {
    // Stamped into every id this hub issues
    tag: u32,
    sources: Vec<InputSource>,
    trackers: Vec<KeyStateTracker>,
    // Taken out while being notified
    observers: Vec<Option<Box<dyn KeyObserver>>>,
    focus_owner: Option<SourceId>,
}

impl Default for InputHub {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHub {
    pub fn new() -> Self {
        Self {
            tag: NEXT_HUB_TAG.fetch_add(1, Ordering::Relaxed),
            sources: Vec::new(),
            trackers: Vec::new(),
            observers: Vec::new(),
            focus_owner: None,
        }
    }

    /// Register a new input source.
    pub fn add_source(&mut self, name: impl Into<String>) -> SourceId {
        self.sources.push(InputSource {
            name: name.into(),
            listeners: Vec::new(),
        });
        SourceId {
            hub: self.tag,
            index: self.sources.len() - 1,
        }
    }

    /// Create a tracker attached to no source.
    pub fn add_tracker(&mut self) -> TrackerId {
        self.trackers.push(KeyStateTracker::new());
        TrackerId {
            hub: self.tag,
            index: self.trackers.len() - 1,
        }
    }

    /// Create a tracker and attach it to `sources`.
    pub fn add_tracker_on(&mut self, sources: &[SourceId]) -> Result<TrackerId> {
        self.check_sources(sources)?;
        let tracker = self.add_tracker();
        self.attach(tracker, sources)?;
        Ok(tracker)
    }

    pub fn add_observer(&mut self, observer: Box<dyn KeyObserver>) -> ObserverId {
        self.observers.push(Some(observer));
        ObserverId {
            hub: self.tag,
            index: self.observers.len() - 1,
        }
    }

    /// Route the key and focus notifications of each source to `tracker`.
    ///
    /// Attaching a tracker to a source it already listens on does nothing.
    pub fn attach(&mut self, tracker: TrackerId, sources: &[SourceId]) -> Result<()> {
        self.tracker(tracker)?;
        self.attach_listener(Listener::Tracker(tracker), sources)
    }

    pub fn attach_observer(&mut self, observer: ObserverId, sources: &[SourceId]) -> Result<()> {
        if observer.hub != self.tag || observer.index >= self.observers.len() {
            return Err(Error::UnknownObserver(observer));
        }
        self.attach_listener(Listener::Observer(observer), sources)
    }

    fn attach_listener(&mut self, listener: Listener, sources: &[SourceId]) -> Result<()> {
        self.check_sources(sources)?;
        for source in sources {
            let listeners = &mut self.sources[source.index].listeners;
            if !listeners.contains(&listener) {
                listeners.push(listener);
            }
        }
        Ok(())
    }

    pub fn tracker(&self, id: TrackerId) -> Result<&KeyStateTracker> {
        if id.hub != self.tag {
            return Err(Error::UnknownTracker(id));
        }
        self.trackers.get(id.index).ok_or(Error::UnknownTracker(id))
    }

    pub fn tracker_mut(&mut self, id: TrackerId) -> Result<&mut KeyStateTracker> {
        if id.hub != self.tag {
            return Err(Error::UnknownTracker(id));
        }
        self.trackers.get_mut(id.index).ok_or(Error::UnknownTracker(id))
    }

    pub fn source_name(&self, id: SourceId) -> Result<&str> {
        self.source(id).map(|source| source.name.as_str())
    }

    /// Listeners of a source, in attachment order.
    pub fn listeners(&self, id: SourceId) -> Result<&[Listener]> {
        self.source(id).map(|source| source.listeners.as_slice())
    }

    /// Trackers attached to a source, in attachment order.
    pub fn trackers_on(&self, id: SourceId) -> Result<Vec<TrackerId>> {
        Ok(self
            .listeners(id)?
            .iter()
            .filter_map(|listener| match listener {
                Listener::Tracker(tracker) => Some(*tracker),
                Listener::Observer(_) => None,
            })
            .collect())
    }

    pub fn focus_owner(&self) -> Option<SourceId> {
        self.focus_owner
    }

    /// Deliver one notification to the listeners of `source`.
    ///
    /// Returns [`Propagation::Consume`] when an observer consumed the event.
    pub fn dispatch(&mut self, source: SourceId, event: InputEvent) -> Result<Propagation> {
        let listeners = self.source(source)?.listeners.clone();
        if let InputEvent::FocusLost(FocusEvent { opposite: Some(opposite) })
        | InputEvent::FocusGained(FocusEvent { opposite: Some(opposite) }) = event
        {
            self.source(opposite)?;
        }
        if event.is_focus_event() {
            debug!("Dispatching {:?} to source {:?}", event, source);
        } else {
            trace!("Dispatching {:?} to source {:?}", event, source);
        }

        for listener in &listeners {
            if let Listener::Tracker(tracker) = *listener {
                self.deliver_to_tracker(tracker, &event);
            }
        }

        let mut propagation = Propagation::Continue;
        for listener in &listeners {
            if let Listener::Observer(observer) = *listener {
                propagation = propagation.merge(self.deliver_to_observer(observer, source, &event));
            }
        }
        Ok(propagation)
    }

    /// Deliver a key notification to the source that owns the focus.
    pub fn dispatch_to_focused(&mut self, event: InputEvent) -> Result<Propagation> {
        let owner = self.focus_owner.ok_or(Error::NoFocusOwner)?;
        self.dispatch(owner, event)
    }

    /// Move the keyboard focus to `to` (or to no tracked source).
    ///
    /// The previous owner gets a focus-lost event naming `to`, then `to` gets
    /// a focus-gained event naming the previous owner.
    pub fn transfer_focus(&mut self, to: Option<SourceId>) -> Result<()> {
        if let Some(to) = to {
            self.source(to)?;
        }
        let previous = self.focus_owner;
        if previous == to {
            return Ok(());
        }

        if let Some(previous) = previous {
            self.dispatch(previous, InputEvent::FocusLost(FocusEvent::new(to)))?;
        }
        self.focus_owner = to;
        if let Some(to) = to {
            self.dispatch(to, InputEvent::FocusGained(FocusEvent::new(previous)))?;
        }
        Ok(())
    }

    fn deliver_to_tracker(&mut self, id: TrackerId, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed(record) => {
                self.trackers[id.index].key_pressed(*record);
            }
            InputEvent::KeyReleased(record) => {
                self.trackers[id.index].key_released(record);
            }
            InputEvent::KeyTyped(record) => self.trackers[id.index].key_typed(record),
            InputEvent::FocusGained(focus) => self.trackers[id.index].focus_gained(focus),
            InputEvent::FocusLost(focus) => self.focus_lost(id, focus),
        }
    }

    /// Hand the keys of `id` to the first other tracker on the opposite
    /// source, then clear `id`.
    fn focus_lost(&mut self, id: TrackerId, event: &FocusEvent) {
        let target = event
            .opposite
            .and_then(|opposite| self.source(opposite).ok())
            .and_then(|opposite| {
                opposite.listeners.iter().find_map(|listener| match listener {
                    Listener::Tracker(other) if *other != id => Some(*other),
                    _ => None,
                })
            });

        match target {
            Some(target) => {
                debug!("Focus lost: tracker {:?} hands off to {:?}", id, target);
                let (from, to) = self.tracker_pair_mut(id, target);
                from.hand_off(Some(to));
            }
            None => self.trackers[id.index].hand_off(None),
        }
    }

    fn deliver_to_observer(
        &mut self,
        id: ObserverId,
        source: SourceId,
        event: &InputEvent,
    ) -> Propagation {
        // Taken out only so the observer can borrow the hub
        let Some(mut observer) = self.observers[id.index].take() else {
            return Propagation::Continue;
        };
        let propagation = observer.notify(self, source, event);
        self.observers[id.index] = Some(observer);
        propagation
    }

    fn tracker_pair_mut(
        &mut self,
        a: TrackerId,
        b: TrackerId,
    ) -> (&mut KeyStateTracker, &mut KeyStateTracker) {
        debug_assert_ne!(a, b);
        if a.index < b.index {
            let (low, high) = self.trackers.split_at_mut(b.index);
            (&mut low[a.index], &mut high[0])
        } else {
            let (low, high) = self.trackers.split_at_mut(a.index);
            (&mut high[0], &mut low[b.index])
        }
    }

    fn source(&self, id: SourceId) -> Result<&InputSource> {
        if id.hub != self.tag {
            return Err(Error::UnknownSource(id));
        }
        self.sources.get(id.index).ok_or(Error::UnknownSource(id))
    }

    fn check_sources(&self, sources: &[SourceId]) -> Result<()> {
        for source in sources {
            self.source(*source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyCode, KeyLocation, KeyRecord};

    fn press(code: KeyCode, location: KeyLocation) -> InputEvent {
        InputEvent::KeyPressed(KeyRecord::new(code, location))
    }

    #[test]
    fn test_attach_is_idempotent_per_source() {
        let mut hub = InputHub::new();
        let field = hub.add_source("field");
        let tracker = hub.add_tracker();
        hub.attach(tracker, &[field, field]).unwrap();
        hub.attach(tracker, &[field]).unwrap();
        assert_eq!(hub.listeners(field).unwrap(), &[Listener::Tracker(tracker)]);
    }

    #[test]
    fn test_attach_unknown_source_changes_nothing() {
        let mut hub = InputHub::new();
        let field = hub.add_source("field");
        let tracker = hub.add_tracker();

        let mut other_hub = InputHub::new();
        other_hub.add_source("a");
        let foreign = other_hub.add_source("b");
        hub.add_source("second");

        let result = hub.attach(tracker, &[field, foreign]);
        assert_eq!(result, Err(Error::UnknownSource(foreign)));
        assert!(hub.listeners(field).unwrap().is_empty());
    }

    #[test]
    fn test_ids_from_another_hub_are_rejected() {
        let mut hub = InputHub::new();
        let field = hub.add_source("field");
        let tracker = hub.add_tracker();
        let observer = hub.add_observer(Box::new(
            |_: &InputHub, _: SourceId, _: &InputEvent| Propagation::Continue,
        ));

        // Same indices as the local handles
        let mut other_hub = InputHub::new();
        let foreign_source = other_hub.add_source("field");
        let foreign_tracker = other_hub.add_tracker();
        let foreign_observer = other_hub.add_observer(Box::new(
            |_: &InputHub, _: SourceId, _: &InputEvent| Propagation::Continue,
        ));

        assert_eq!(
            hub.attach(tracker, &[foreign_source]),
            Err(Error::UnknownSource(foreign_source))
        );
        assert_eq!(
            hub.attach(foreign_tracker, &[field]),
            Err(Error::UnknownTracker(foreign_tracker))
        );
        assert_eq!(
            hub.attach_observer(foreign_observer, &[field]),
            Err(Error::UnknownObserver(foreign_observer))
        );
        assert!(hub.tracker(foreign_tracker).is_err());
        assert!(hub.tracker_mut(foreign_tracker).is_err());
        assert_eq!(
            hub.transfer_focus(Some(foreign_source)),
            Err(Error::UnknownSource(foreign_source))
        );
        assert!(hub.listeners(field).unwrap().is_empty());

        hub.attach_observer(observer, &[field]).unwrap();
        assert_eq!(hub.listeners(field).unwrap(), &[Listener::Observer(observer)]);
    }

    #[test]
    fn test_shared_tracker_accumulates_across_sources() {
        let mut hub = InputHub::new();
        let first = hub.add_source("first");
        let second = hub.add_source("second");
        let tracker = hub.add_tracker_on(&[first, second]).unwrap();

        hub.dispatch(first, press(KeyCode::KeyA, KeyLocation::Standard)).unwrap();
        hub.dispatch(second, press(KeyCode::KeyB, KeyLocation::Standard)).unwrap();
        assert_eq!(hub.tracker(tracker).unwrap().render_text(), "A+B");
    }

    #[test]
    fn test_focus_lost_with_only_self_on_opposite_clears() {
        let mut hub = InputHub::new();
        let first = hub.add_source("first");
        let second = hub.add_source("second");
        let tracker = hub.add_tracker_on(&[first, second]).unwrap();

        hub.dispatch(first, press(KeyCode::KeyA, KeyLocation::Standard)).unwrap();
        hub.dispatch(first, InputEvent::FocusLost(FocusEvent::new(Some(second)))).unwrap();
        assert!(hub.tracker(tracker).unwrap().is_empty());
    }

    #[test]
    fn test_tracker_pair_mut_both_orders() {
        let mut hub = InputHub::new();
        let a = hub.add_tracker();
        let b = hub.add_tracker();
        hub.tracker_mut(a).unwrap().key_pressed(KeyRecord::new(KeyCode::KeyA, KeyLocation::Standard));
        hub.tracker_mut(b).unwrap().key_pressed(KeyRecord::new(KeyCode::KeyB, KeyLocation::Standard));

        let (first, second) = hub.tracker_pair_mut(b, a);
        assert_eq!(first.render_text(), "B");
        assert_eq!(second.render_text(), "A");
    }

    #[test]
    fn test_dispatch_to_focused_requires_owner() {
        let mut hub = InputHub::new();
        let result = hub.dispatch_to_focused(press(KeyCode::KeyA, KeyLocation::Standard));
        assert_eq!(result, Err(Error::NoFocusOwner));
    }
}
