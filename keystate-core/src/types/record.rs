//! Pressed-key records

use std::fmt;

use super::{KeyCode, KeyLocation};

/// Offset added to a Unicode scalar value to build the extended code of a
/// key that has no dedicated [`KeyCode`].
pub const CHAR_EXTENDED_BASE: u32 = 0x0100_0000;

/// One physical key as reported by a press, release or typed notification.
///
/// Identity for deduplication is the `(extended_code, location)` pair; `code`
/// is the logical key used by queries such as
/// [`KeyStateTracker::is_pressed`](crate::KeyStateTracker::is_pressed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyRecord {
    /// Logical key code
    pub code: KeyCode,
    /// Finer-grained identifier, equal to `code` for keys that have one
    pub extended_code: u32,
    /// Disambiguates keys present in several physical positions
    pub location: KeyLocation,
}

impl KeyRecord {
    /// Creates a record whose extended code is the key code itself.
    pub fn new(code: KeyCode, location: KeyLocation) -> Self {
        Self {
            code,
            extended_code: code as u32,
            location,
        }
    }

    /// Creates a record with an explicit extended code.
    pub fn with_extended_code(code: KeyCode, extended_code: u32, location: KeyLocation) -> Self {
        Self {
            code,
            extended_code,
            location,
        }
    }

    /// Creates a record for a key that produces `ch` but has no dedicated code.
    pub fn from_char(ch: char, location: KeyLocation) -> Self {
        Self {
            code: KeyCode::Undefined,
            extended_code: CHAR_EXTENDED_BASE + ch as u32,
            location,
        }
    }

    /// True when both records describe the same physical key.
    pub fn same_key(&self, other: &KeyRecord) -> bool {
        self.extended_code == other.extended_code && self.location == other.location
    }

    /// The character encoded in the extended code, if any.
    pub fn extended_char(&self) -> Option<char> {
        self.extended_code
            .checked_sub(CHAR_EXTENDED_BASE)
            .and_then(char::from_u32)
    }

    /// Human readable name, without location.
    pub fn key_text(&self) -> String {
        match (self.code, self.extended_char()) {
            (KeyCode::Undefined, Some(ch)) => ch.to_uppercase().collect(),
            (code, _) => code.key_text().to_string(),
        }
    }

    /// Human readable name followed by the location, e.g. `Shift(Left)`.
    pub fn key_text_with_location(&self) -> String {
        format!("{}({})", self.key_text(), self.location)
    }
}

impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_uses_extended_code_and_location() {
        let left = KeyRecord::new(KeyCode::Shift, KeyLocation::Left);
        let right = KeyRecord::new(KeyCode::Shift, KeyLocation::Right);
        assert!(left.same_key(&left));
        assert!(!left.same_key(&right));

        // Same logical code, different extended code
        let a = KeyRecord::with_extended_code(KeyCode::KeyA, 0x41, KeyLocation::Standard);
        let a_variant = KeyRecord::with_extended_code(KeyCode::KeyA, 0x0100_00E4, KeyLocation::Standard);
        assert!(!a.same_key(&a_variant));
    }

    #[test]
    fn test_char_records() {
        let record = KeyRecord::from_char('ä', KeyLocation::Standard);
        assert_eq!(record.code, KeyCode::Undefined);
        assert_eq!(record.extended_char(), Some('ä'));
        assert_eq!(record.key_text(), "Ä");

        let plain = KeyRecord::new(KeyCode::KeyA, KeyLocation::Standard);
        assert_eq!(plain.extended_char(), None);
    }

    #[test]
    fn test_key_text_with_location() {
        let record = KeyRecord::new(KeyCode::Control, KeyLocation::Right);
        assert_eq!(record.to_string(), "Ctrl");
        assert_eq!(record.key_text_with_location(), "Ctrl(Right)");
    }
}
