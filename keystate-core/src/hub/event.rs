//! Notifications delivered by the event-dispatch layer

use crate::KeyRecord;

use super::SourceId;

/// Focus change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusEvent {
    /// The other source involved in the change: the one gaining focus for a
    /// focus-lost event, the one losing it for a focus-gained event.
    pub opposite: Option<SourceId>,
}

impl FocusEvent {
    pub fn new(opposite: Option<SourceId>) -> Self {
        Self { opposite }
    }
}

/// A notification routed to the listeners of one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(KeyRecord),
    KeyReleased(KeyRecord),
    KeyTyped(KeyRecord),
    FocusLost(FocusEvent),
    FocusGained(FocusEvent),
}

impl InputEvent {
    /// The key carried by press, release and typed events.
    pub fn key(&self) -> Option<&KeyRecord> {
        match self {
            InputEvent::KeyPressed(record)
            | InputEvent::KeyReleased(record)
            | InputEvent::KeyTyped(record) => Some(record),
            InputEvent::FocusLost(_) | InputEvent::FocusGained(_) => None,
        }
    }

    pub fn is_focus_event(&self) -> bool {
        matches!(self, InputEvent::FocusLost(_) | InputEvent::FocusGained(_))
    }
}

/// What an observer wants done with an event after seeing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Let the default handling (e.g. text insertion) happen.
    #[default]
    Continue,
    /// Suppress the default handling.
    Consume,
}

impl Propagation {
    pub fn is_consumed(self) -> bool {
        self == Propagation::Consume
    }

    /// Combine two outcomes; consumed wins.
    pub fn merge(self, other: Propagation) -> Propagation {
        if self.is_consumed() || other.is_consumed() {
            Propagation::Consume
        } else {
            Propagation::Continue
        }
    }
}
