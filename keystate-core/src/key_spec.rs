//! Key name parsing
//!
//! Turns names such as `LShift`, `a`, `NumpadEnter` or `VK_F5` into the
//! [`KeyRecord`] a platform layer would report for that physical key.

use crate::error::{Error, Result};
use crate::{create_key_map, KeyCode, KeyLocation, KeyRecord, FUNCTION_KEYS, NUMPAD_DIGIT_KEYS};

/// A parsed key name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    pub code: KeyCode,
    pub location: KeyLocation,
    /// Set for `Char:<c>` keys that have no dedicated code
    pub character: Option<char>,
}

impl KeySpec {
    /// Parse a key name, case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use keystate_core::{KeyCode, KeyLocation, KeySpec};
    ///
    /// let spec = KeySpec::parse("RCtrl").unwrap();
    /// assert_eq!(spec.code, KeyCode::Control);
    /// assert_eq!(spec.location, KeyLocation::Right);
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::ParseError("Empty key name".to_string()));
        }

        if let Some(rest) = strip_prefix_ignore_case(trimmed, "CHAR:") {
            let mut chars = rest.chars();
            return match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(KeySpec {
                    code: KeyCode::Undefined,
                    location: KeyLocation::Standard,
                    character: Some(ch),
                }),
                _ => Err(Error::ParseError(format!(
                    "Expected exactly one character after 'Char:', got {:?}",
                    rest
                ))),
            };
        }

        let upper = trimmed.to_uppercase();
        if let Some((code, location)) = parse_sided(&upper) {
            return Ok(KeySpec::new(code, location));
        }
        if let Some(code) = parse_numpad(&upper) {
            return Ok(KeySpec::new(code, KeyLocation::Numpad));
        }

        let code = parse_key(&upper)?;
        Ok(KeySpec::new(code, default_location(code)))
    }

    fn new(code: KeyCode, location: KeyLocation) -> Self {
        Self {
            code,
            location,
            character: None,
        }
    }

    /// The record a press of this key produces.
    pub fn to_record(&self) -> KeyRecord {
        match self.character {
            Some(ch) => KeyRecord::from_char(ch, self.location),
            None => KeyRecord::new(self.code, self.location),
        }
    }
}

impl std::str::FromStr for KeySpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        KeySpec::parse(s)
    }
}

/// Parse a key name straight into a record.
pub fn parse_record(name: &str) -> Result<KeyRecord> {
    KeySpec::parse(name).map(|spec| spec.to_record())
}

/// Location a key gets when the name does not say which side it is on.
fn default_location(code: KeyCode) -> KeyLocation {
    if code.is_modifier() {
        KeyLocation::Left
    } else if code.is_numpad_only() {
        KeyLocation::Numpad
    } else {
        KeyLocation::Standard
    }
}

fn parse_sided(name: &str) -> Option<(KeyCode, KeyLocation)> {
    let parsed = match name {
        "LSHIFT" | "SHIFTLEFT" | "VK_LSHIFT" => (KeyCode::Shift, KeyLocation::Left),
        "RSHIFT" | "SHIFTRIGHT" | "VK_RSHIFT" => (KeyCode::Shift, KeyLocation::Right),
        "LCTRL" | "LCONTROL" | "CONTROLLEFT" | "VK_LCONTROL" | "VK_LCTRL" => {
            (KeyCode::Control, KeyLocation::Left)
        }
        "RCTRL" | "RCONTROL" | "CONTROLRIGHT" | "VK_RCONTROL" | "VK_RCTRL" => {
            (KeyCode::Control, KeyLocation::Right)
        }
        "LALT" | "ALTLEFT" | "VK_LMENU" | "VK_LALT" => (KeyCode::Menu, KeyLocation::Left),
        "RALT" | "ALTRIGHT" | "ALTGR" | "VK_RMENU" | "VK_RALT" | "VK_ALT_GR" => {
            (KeyCode::Menu, KeyLocation::Right)
        }
        "LMETA" | "LWIN" | "METALEFT" | "VK_LWIN" => (KeyCode::Meta, KeyLocation::Left),
        "RMETA" | "RWIN" | "METARIGHT" | "VK_RWIN" => (KeyCode::Meta, KeyLocation::Right),
        _ => return None,
    };
    Some(parsed)
}

fn parse_numpad(name: &str) -> Option<KeyCode> {
    let rest = name
        .strip_prefix("NUMPAD")
        .or_else(|| name.strip_prefix("KP_"))
        .or_else(|| name.strip_prefix("KP"))?;
    let rest = strip_separator(rest);

    if let Some(digit) = parse_index(rest) {
        return NUMPAD_DIGIT_KEYS.get(digit).copied();
    }
    match rest {
        "ENTER" | "RETURN" => Some(KeyCode::Return),
        "ADD" | "PLUS" | "+" => Some(KeyCode::Add),
        "SUBTRACT" | "MINUS" | "-" => Some(KeyCode::Subtract),
        "MULTIPLY" | "*" => Some(KeyCode::Multiply),
        "DIVIDE" | "/" => Some(KeyCode::Divide),
        "DECIMAL" | "." => Some(KeyCode::Decimal),
        "SEPARATOR" | "," => Some(KeyCode::Separator),
        _ => None,
    }
}

/// Parse an upper-cased key name to a `KeyCode`
fn parse_key(key_str: &str) -> Result<KeyCode> {
    if let Some(code) = create_key_map().get(key_str) {
        return Ok(*code);
    }

    let mut chars = key_str.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return match ch {
            'A'..='Z' | '0'..='9' => KeyCode::from_u16(ch as u16)
                .ok_or_else(|| Error::UnknownKey(key_str.to_string())),
            '=' => Ok(KeyCode::OemPlus),
            '-' => Ok(KeyCode::OemMinus),
            ',' => Ok(KeyCode::OemComma),
            '.' => Ok(KeyCode::OemPeriod),
            ';' => Ok(KeyCode::Oem1),
            '/' => Ok(KeyCode::Oem2),
            '`' => Ok(KeyCode::Oem3),
            '[' => Ok(KeyCode::Oem4),
            '\\' => Ok(KeyCode::Oem5),
            ']' => Ok(KeyCode::Oem6),
            '\'' => Ok(KeyCode::Oem7),
            _ => Err(Error::UnknownKey(key_str.to_string())),
        };
    }

    if let Some(number) = key_str.strip_prefix('F').and_then(parse_index) {
        if let Some(code) = number.checked_sub(1).and_then(|i| FUNCTION_KEYS.get(i)) {
            return Ok(*code);
        }
    }

    match key_str {
        "SHIFT" => Ok(KeyCode::Shift),
        "CTRL" | "CONTROL" => Ok(KeyCode::Control),
        "ALT" | "OPTION" => Ok(KeyCode::Menu),
        "META" | "CMD" | "COMMAND" | "WIN" | "SUPER" => Ok(KeyCode::Meta),
        "SPACE" => Ok(KeyCode::Space),
        "ENTER" | "RETURN" => Ok(KeyCode::Return),
        "TAB" => Ok(KeyCode::Tab),
        "BACKSPACE" | "BACK" => Ok(KeyCode::Back),
        "DELETE" | "DEL" => Ok(KeyCode::Delete),
        "INSERT" | "INS" => Ok(KeyCode::Insert),
        "ESCAPE" | "ESC" => Ok(KeyCode::Escape),
        "CAPSLOCK" | "CAPS" => Ok(KeyCode::Capital),
        "NUMLOCK" => Ok(KeyCode::NumLock),
        "SCROLLLOCK" => Ok(KeyCode::ScrollLock),
        "PAUSE" => Ok(KeyCode::Pause),
        "PRINTSCREEN" | "PRTSC" => Ok(KeyCode::PrintScreen),
        "MENU" | "APPS" | "CONTEXTMENU" => Ok(KeyCode::ContextMenu),
        "HOME" => Ok(KeyCode::Home),
        "END" => Ok(KeyCode::End),
        "PAGEUP" | "PGUP" => Ok(KeyCode::Prior),
        "PAGEDOWN" | "PGDN" => Ok(KeyCode::Next),
        "LEFT" => Ok(KeyCode::Left),
        "RIGHT" => Ok(KeyCode::Right),
        "UP" => Ok(KeyCode::Up),
        "DOWN" => Ok(KeyCode::Down),
        "PLUS" | "EQUALS" => Ok(KeyCode::OemPlus),
        "MINUS" => Ok(KeyCode::OemMinus),
        "COMMA" => Ok(KeyCode::OemComma),
        "PERIOD" => Ok(KeyCode::OemPeriod),
        "SEMICOLON" => Ok(KeyCode::Oem1),
        "SLASH" => Ok(KeyCode::Oem2),
        "GRAVE" | "BACKQUOTE" => Ok(KeyCode::Oem3),
        "LEFTBRACKET" => Ok(KeyCode::Oem4),
        "BACKSLASH" => Ok(KeyCode::Oem5),
        "RIGHTBRACKET" => Ok(KeyCode::Oem6),
        "QUOTE" => Ok(KeyCode::Oem7),
        _ => Err(Error::UnknownKey(key_str.to_string())),
    }
}

/// Drops one `-` or `_` between a prefix and the rest of a name.
fn strip_separator(rest: &str) -> &str {
    match rest.strip_prefix(&['-', '_'][..]) {
        Some(tail) if !tail.is_empty() => tail,
        _ => rest,
    }
}

/// Plain decimal number: no sign, no leading zeros.
fn parse_index(s: &str) -> Option<usize> {
    let plain = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if plain {
        s.parse().ok()
    } else {
        None
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters_and_digits() {
        let spec = KeySpec::parse("a").unwrap();
        assert_eq!(spec.code, KeyCode::KeyA);
        assert_eq!(spec.location, KeyLocation::Standard);

        let spec = KeySpec::parse("7").unwrap();
        assert_eq!(spec.code, KeyCode::Key7);
    }

    #[test]
    fn test_parse_sided_modifiers() {
        assert_eq!(
            KeySpec::parse("LShift").unwrap().to_record(),
            KeyRecord::new(KeyCode::Shift, KeyLocation::Left)
        );
        assert_eq!(
            KeySpec::parse("altgr").unwrap().to_record(),
            KeyRecord::new(KeyCode::Menu, KeyLocation::Right)
        );
        assert_eq!(
            KeySpec::parse("VK_RCONTROL").unwrap().to_record(),
            KeyRecord::new(KeyCode::Control, KeyLocation::Right)
        );
    }

    #[test]
    fn test_unsided_modifier_defaults_left() {
        let spec = KeySpec::parse("ctrl").unwrap();
        assert_eq!(spec.code, KeyCode::Control);
        assert_eq!(spec.location, KeyLocation::Left);
    }

    #[test]
    fn test_parse_numpad() {
        assert_eq!(
            KeySpec::parse("Numpad3").unwrap(),
            KeySpec::new(KeyCode::Numpad3, KeyLocation::Numpad)
        );
        assert_eq!(
            KeySpec::parse("NumpadEnter").unwrap(),
            KeySpec::new(KeyCode::Return, KeyLocation::Numpad)
        );
        assert_eq!(
            KeySpec::parse("kp_add").unwrap(),
            KeySpec::new(KeyCode::Add, KeyLocation::Numpad)
        );
        // Numpad-only codes land on the numpad even through VK names
        assert_eq!(KeySpec::parse("VK_NUMPAD0").unwrap().location, KeyLocation::Numpad);
    }

    #[test]
    fn test_parse_numpad_operators_and_separators() {
        let subtract = KeySpec::new(KeyCode::Subtract, KeyLocation::Numpad);
        assert_eq!(KeySpec::parse("Numpad-").unwrap(), subtract);
        assert_eq!(KeySpec::parse("KP-").unwrap(), subtract);
        assert_eq!(KeySpec::parse("numpad_-").unwrap(), subtract);
        assert_eq!(
            KeySpec::parse("NumPad-1").unwrap(),
            KeySpec::new(KeyCode::Numpad1, KeyLocation::Numpad)
        );
        assert_eq!(
            KeySpec::parse("KP_0").unwrap(),
            KeySpec::new(KeyCode::Numpad0, KeyLocation::Numpad)
        );
    }

    #[test]
    fn test_numbers_must_be_plain_digits() {
        assert_eq!(
            KeySpec::parse("Numpad+1"),
            Err(Error::UnknownKey("NUMPAD+1".to_string()))
        );
        assert!(KeySpec::parse("Numpad01").is_err());
        assert!(KeySpec::parse("Numpad--1").is_err());
        assert_eq!(KeySpec::parse("F+5"), Err(Error::UnknownKey("F+5".to_string())));
        assert_eq!(KeySpec::parse("F05"), Err(Error::UnknownKey("F05".to_string())));
        assert_eq!(KeySpec::parse("f5").unwrap().code, KeyCode::F5);
    }

    #[test]
    fn test_parse_function_and_named_keys() {
        assert_eq!(KeySpec::parse("F12").unwrap().code, KeyCode::F12);
        assert_eq!(KeySpec::parse("enter").unwrap().code, KeyCode::Return);
        assert_eq!(KeySpec::parse("Esc").unwrap().code, KeyCode::Escape);
        assert_eq!(KeySpec::parse("VK_KEY_Z").unwrap().code, KeyCode::KeyZ);
        assert_eq!(KeySpec::parse("[").unwrap().code, KeyCode::Oem4);
    }

    #[test]
    fn test_parse_char_key() {
        let spec = KeySpec::parse("Char:ñ").unwrap();
        assert_eq!(spec.code, KeyCode::Undefined);
        assert_eq!(spec.to_record().key_text(), "Ñ");
        assert!(KeySpec::parse("char:ab").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            KeySpec::parse("  "),
            Err(Error::ParseError("Empty key name".to_string()))
        );
        assert_eq!(
            KeySpec::parse("hyper"),
            Err(Error::UnknownKey("HYPER".to_string()))
        );
        assert!(KeySpec::parse("F13").is_err());
        assert!(KeySpec::parse("F0").is_err());
        assert!(KeySpec::parse("Numpad12").is_err());
    }
}
