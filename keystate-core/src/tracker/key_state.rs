use std::fmt;

use log::debug;

use super::render::join_key_text;
use crate::{FocusEvent, KeyCode, KeyLocation, KeyRecord};

/// Keys currently held down, in chronological press order.
///
/// No two records share the same `(extended_code, location)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStateTracker {
    current_keys: Vec<KeyRecord>,
}

impl KeyStateTracker {
    pub fn new() -> Self {
        Self {
            current_keys: Vec::new(),
        }
    }

    /// Record a key press.
    ///
    /// Returns `false` when the key is already down (key repeat, duplicate
    /// notification); the existing record keeps its position.
    pub fn key_pressed(&mut self, record: KeyRecord) -> bool {
        if self.current_keys.iter().any(|key| key.same_key(&record)) {
            debug!("Ignoring repeated press of {}", record.key_text_with_location());
            return false;
        }
        self.current_keys.push(record);
        true
    }

    /// Record a key release, returning the record that was removed.
    ///
    /// Releasing a key that is not tracked leaves the state untouched.
    pub fn key_released(&mut self, record: &KeyRecord) -> Option<KeyRecord> {
        match self.current_keys.iter().position(|key| key.same_key(record)) {
            Some(index) => Some(self.current_keys.remove(index)),
            None => {
                debug!("Ignoring release of untracked key {}", record.key_text_with_location());
                None
            }
        }
    }

    /// Typed notifications do not change the pressed-key state.
    pub fn key_typed(&mut self, _record: &KeyRecord) {}

    /// Gaining focus does not change the pressed-key state.
    pub fn focus_gained(&mut self, _event: &FocusEvent) {}

    /// Focus left this tracker's source.
    ///
    /// When `target` is given it receives a copy of the current keys,
    /// replacing whatever it held. This tracker is emptied either way.
    pub fn hand_off(&mut self, target: Option<&mut KeyStateTracker>) {
        if let Some(target) = target {
            debug!("Handing off {} pressed key(s): {}", self.len(), self.render_text());
            target.current_keys = self.current_keys.clone();
        }
        self.clear();
    }

    /// Current keys in press order.
    pub fn current_keys(&self) -> &[KeyRecord] {
        &self.current_keys
    }

    /// Number of keys currently pressed.
    pub fn len(&self) -> usize {
        self.current_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_keys.is_empty()
    }

    /// True if any key with this logical code is down, whatever its location.
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.current_keys.iter().any(|key| key.code == code)
    }

    /// True if a key with this code is down at exactly this location.
    pub fn is_pressed_at(&self, code: KeyCode, location: KeyLocation) -> bool {
        self.current_keys
            .iter()
            .any(|key| key.code == code && key.location == location)
    }

    /// Left or right Control.
    pub fn is_control_down(&self) -> bool {
        self.is_pressed(KeyCode::Control)
    }

    /// Left or right Shift.
    pub fn is_shift_down(&self) -> bool {
        self.is_pressed(KeyCode::Shift)
    }

    /// Left or right Alt.
    pub fn is_alt_down(&self) -> bool {
        self.is_pressed(KeyCode::Menu)
    }

    pub fn clear(&mut self) {
        self.current_keys.clear();
    }

    /// Key names joined with `+` in press order, e.g. `Shift+A`.
    pub fn render_text(&self) -> String {
        join_key_text(&self.current_keys, false)
    }

    /// Like [`render_text`](Self::render_text) with each location appended,
    /// e.g. `Shift(Left)+A(Standard)`.
    pub fn render_text_with_location(&self) -> String {
        join_key_text(&self.current_keys, true)
    }
}

impl fmt::Display for KeyStateTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
