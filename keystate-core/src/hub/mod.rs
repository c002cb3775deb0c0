//! Input sources and notification routing
//!
//! An [`InputHub`] owns every tracker and observer and keeps, per source, the
//! ordered list of listeners attached to it. Notifications for a source are
//! delivered to its trackers first, then to its observers.

mod event;
mod input_hub;

pub use event::{FocusEvent, InputEvent, Propagation};
pub use input_hub::InputHub;

/// Handle to a source registered with an [`InputHub`].
///
/// Handles remember the hub that issued them; passing one to another hub
/// fails with [`Error::UnknownSource`](crate::Error::UnknownSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId {
    hub: u32,
    index: usize,
}

/// Handle to a tracker owned by an [`InputHub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackerId {
    hub: u32,
    index: usize,
}

/// Handle to an observer owned by an [`InputHub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId {
    hub: u32,
    index: usize,
}

/// One entry in a source's listener list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    Tracker(TrackerId),
    Observer(ObserverId),
}

/// View-layer hook notified after the trackers of a source.
///
/// Observers get read access to the hub so they can query tracker state, and
/// may consume an event to suppress its default handling.
pub trait KeyObserver {
    fn notify(&mut self, hub: &InputHub, source: SourceId, event: &InputEvent) -> Propagation;
}

impl<F> KeyObserver for F
where
    F: FnMut(&InputHub, SourceId, &InputEvent) -> Propagation,
{
    fn notify(&mut self, hub: &InputHub, source: SourceId, event: &InputEvent) -> Propagation {
        self(hub, source, event)
    }
}
