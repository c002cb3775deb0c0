use std::fmt;

/// Physical position of a key that exists more than once on the keyboard.
///
/// Left/right Shift, Control, Alt and Meta share one [`KeyCode`], as do the
/// main Enter key and the numpad Enter key. The location tells them apart.
///
/// [`KeyCode`]: crate::KeyCode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyLocation {
    /// The platform could not say where the key is.
    Unknown = 0,
    /// The key only exists once, in its usual place.
    #[default]
    Standard = 1,
    Left = 2,
    Right = 3,
    Numpad = 4,
}

impl KeyLocation {
    pub fn name(self) -> &'static str {
        match self {
            KeyLocation::Unknown => "Unknown",
            KeyLocation::Standard => "Standard",
            KeyLocation::Left => "Left",
            KeyLocation::Right => "Right",
            KeyLocation::Numpad => "Numpad",
        }
    }
}

impl fmt::Display for KeyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
