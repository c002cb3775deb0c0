use std::collections::HashMap;
use std::fmt;

/// Logical, platform-independent key code.
///
/// Values follow the Windows virtual-key numbering so raw codes coming from
/// most platform layers can be converted with [`KeyCode::from_u16`].
/// Keys that exist in more than one physical position (Shift, Control, Alt,
/// Meta, Enter) share one code and are told apart by [`KeyLocation`].
///
/// [`KeyLocation`]: crate::KeyLocation
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Special values
    Undefined = 0x00,

    // Control keys
    Back = 0x08,           // Backspace
    Tab = 0x09,
    Return = 0x0D,         // Enter
    Shift = 0x10,
    Control = 0x11,
    Menu = 0x12,           // Alt
    Pause = 0x13,
    Capital = 0x14,        // Caps Lock
    Escape = 0x1B,
    Space = 0x20,
    Prior = 0x21,          // Page Up
    Next = 0x22,           // Page Down
    End = 0x23,
    Home = 0x24,
    Left = 0x25,
    Up = 0x26,
    Right = 0x27,
    Down = 0x28,
    PrintScreen = 0x2C,
    Insert = 0x2D,
    Delete = 0x2E,

    // Number keys (0-9)
    Key0 = 0x30,
    Key1 = 0x31,
    Key2 = 0x32,
    Key3 = 0x33,
    Key4 = 0x34,
    Key5 = 0x35,
    Key6 = 0x36,
    Key7 = 0x37,
    Key8 = 0x38,
    Key9 = 0x39,

    // Letter keys (A-Z)
    KeyA = 0x41,
    KeyB = 0x42,
    KeyC = 0x43,
    KeyD = 0x44,
    KeyE = 0x45,
    KeyF = 0x46,
    KeyG = 0x47,
    KeyH = 0x48,
    KeyI = 0x49,
    KeyJ = 0x4A,
    KeyK = 0x4B,
    KeyL = 0x4C,
    KeyM = 0x4D,
    KeyN = 0x4E,
    KeyO = 0x4F,
    KeyP = 0x50,
    KeyQ = 0x51,
    KeyR = 0x52,
    KeyS = 0x53,
    KeyT = 0x54,
    KeyU = 0x55,
    KeyV = 0x56,
    KeyW = 0x57,
    KeyX = 0x58,
    KeyY = 0x59,
    KeyZ = 0x5A,

    Meta = 0x5B,           // Win / Command / Super
    ContextMenu = 0x5D,

    // Numpad keys
    Numpad0 = 0x60,
    Numpad1 = 0x61,
    Numpad2 = 0x62,
    Numpad3 = 0x63,
    Numpad4 = 0x64,
    Numpad5 = 0x65,
    Numpad6 = 0x66,
    Numpad7 = 0x67,
    Numpad8 = 0x68,
    Numpad9 = 0x69,

    // Numpad operators
    Multiply = 0x6A,
    Add = 0x6B,
    Separator = 0x6C,
    Subtract = 0x6D,
    Decimal = 0x6E,
    Divide = 0x6F,

    // Function keys
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,

    NumLock = 0x90,
    ScrollLock = 0x91,

    // OEM keys (US layout names)
    Oem1 = 0xBA,           // ;:
    OemPlus = 0xBB,        // =+
    OemComma = 0xBC,
    OemMinus = 0xBD,
    OemPeriod = 0xBE,
    Oem2 = 0xBF,           // /?
    Oem3 = 0xC0,           // `~
    Oem4 = 0xDB,           // [{
    Oem5 = 0xDC,           // \|
    Oem6 = 0xDD,           // ]}
    Oem7 = 0xDE,           // '"
    Oem102 = 0xE2,         // <> on 102-key keyboards
}

pub const LETTER_KEYS: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
    KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
    KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
    KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
    KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
    KeyCode::KeyZ,
];

pub const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Key0, KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4,
    KeyCode::Key5, KeyCode::Key6, KeyCode::Key7, KeyCode::Key8, KeyCode::Key9,
];

pub const NUMPAD_DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Numpad0, KeyCode::Numpad1, KeyCode::Numpad2, KeyCode::Numpad3, KeyCode::Numpad4,
    KeyCode::Numpad5, KeyCode::Numpad6, KeyCode::Numpad7, KeyCode::Numpad8, KeyCode::Numpad9,
];

pub const FUNCTION_KEYS: [KeyCode; 12] = [
    KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5, KeyCode::F6,
    KeyCode::F7, KeyCode::F8, KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
];

/// Codes that are not letters, digits, numpad digits or function keys.
const OTHER_KEYS: [KeyCode; 44] = [
    KeyCode::Undefined, KeyCode::Back, KeyCode::Tab, KeyCode::Return, KeyCode::Shift,
    KeyCode::Control, KeyCode::Menu, KeyCode::Pause, KeyCode::Capital, KeyCode::Escape,
    KeyCode::Space, KeyCode::Prior, KeyCode::Next, KeyCode::End, KeyCode::Home,
    KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down, KeyCode::PrintScreen,
    KeyCode::Insert, KeyCode::Delete, KeyCode::Meta, KeyCode::ContextMenu,
    KeyCode::Multiply, KeyCode::Add, KeyCode::Separator, KeyCode::Subtract,
    KeyCode::Decimal, KeyCode::Divide, KeyCode::NumLock, KeyCode::ScrollLock,
    KeyCode::Oem1, KeyCode::OemPlus, KeyCode::OemComma, KeyCode::OemMinus,
    KeyCode::OemPeriod, KeyCode::Oem2, KeyCode::Oem3, KeyCode::Oem4, KeyCode::Oem5,
    KeyCode::Oem6, KeyCode::Oem7, KeyCode::Oem102,
];

impl KeyCode {
    /// Iterate over every defined key code.
    pub fn all() -> impl Iterator<Item = KeyCode> {
        OTHER_KEYS
            .into_iter()
            .chain(DIGIT_KEYS)
            .chain(LETTER_KEYS)
            .chain(NUMPAD_DIGIT_KEYS)
            .chain(FUNCTION_KEYS)
    }

    /// Convert a raw virtual-key value into a `KeyCode`.
    pub fn from_u16(value: u16) -> Option<KeyCode> {
        Self::all().find(|code| *code as u16 == value)
    }

    /// Human readable key name, without location.
    pub fn key_text(self) -> &'static str {
        match self {
            KeyCode::Undefined => "Unknown",
            KeyCode::Back => "Backspace",
            KeyCode::Tab => "Tab",
            KeyCode::Return => "Enter",
            KeyCode::Shift => "Shift",
            KeyCode::Control => "Ctrl",
            KeyCode::Menu => "Alt",
            KeyCode::Pause => "Pause",
            KeyCode::Capital => "Caps Lock",
            KeyCode::Escape => "Escape",
            KeyCode::Space => "Space",
            KeyCode::Prior => "Page Up",
            KeyCode::Next => "Page Down",
            KeyCode::End => "End",
            KeyCode::Home => "Home",
            KeyCode::Left => "Left",
            KeyCode::Up => "Up",
            KeyCode::Right => "Right",
            KeyCode::Down => "Down",
            KeyCode::PrintScreen => "Print Screen",
            KeyCode::Insert => "Insert",
            KeyCode::Delete => "Delete",

            KeyCode::Key0 => "0",
            KeyCode::Key1 => "1",
            KeyCode::Key2 => "2",
            KeyCode::Key3 => "3",
            KeyCode::Key4 => "4",
            KeyCode::Key5 => "5",
            KeyCode::Key6 => "6",
            KeyCode::Key7 => "7",
            KeyCode::Key8 => "8",
            KeyCode::Key9 => "9",

            KeyCode::KeyA => "A",
            KeyCode::KeyB => "B",
            KeyCode::KeyC => "C",
            KeyCode::KeyD => "D",
            KeyCode::KeyE => "E",
            KeyCode::KeyF => "F",
            KeyCode::KeyG => "G",
            KeyCode::KeyH => "H",
            KeyCode::KeyI => "I",
            KeyCode::KeyJ => "J",
            KeyCode::KeyK => "K",
            KeyCode::KeyL => "L",
            KeyCode::KeyM => "M",
            KeyCode::KeyN => "N",
            KeyCode::KeyO => "O",
            KeyCode::KeyP => "P",
            KeyCode::KeyQ => "Q",
            KeyCode::KeyR => "R",
            KeyCode::KeyS => "S",
            KeyCode::KeyT => "T",
            KeyCode::KeyU => "U",
            KeyCode::KeyV => "V",
            KeyCode::KeyW => "W",
            KeyCode::KeyX => "X",
            KeyCode::KeyY => "Y",
            KeyCode::KeyZ => "Z",

            KeyCode::Meta => "Meta",
            KeyCode::ContextMenu => "Context Menu",

            KeyCode::Numpad0 => "NumPad-0",
            KeyCode::Numpad1 => "NumPad-1",
            KeyCode::Numpad2 => "NumPad-2",
            KeyCode::Numpad3 => "NumPad-3",
            KeyCode::Numpad4 => "NumPad-4",
            KeyCode::Numpad5 => "NumPad-5",
            KeyCode::Numpad6 => "NumPad-6",
            KeyCode::Numpad7 => "NumPad-7",
            KeyCode::Numpad8 => "NumPad-8",
            KeyCode::Numpad9 => "NumPad-9",

            KeyCode::Multiply => "NumPad *",
            KeyCode::Add => "NumPad +",
            KeyCode::Separator => "NumPad ,",
            KeyCode::Subtract => "NumPad -",
            KeyCode::Decimal => "NumPad .",
            KeyCode::Divide => "NumPad /",

            KeyCode::F1 => "F1",
            KeyCode::F2 => "F2",
            KeyCode::F3 => "F3",
            KeyCode::F4 => "F4",
            KeyCode::F5 => "F5",
            KeyCode::F6 => "F6",
            KeyCode::F7 => "F7",
            KeyCode::F8 => "F8",
            KeyCode::F9 => "F9",
            KeyCode::F10 => "F10",
            KeyCode::F11 => "F11",
            KeyCode::F12 => "F12",

            KeyCode::NumLock => "Num Lock",
            KeyCode::ScrollLock => "Scroll Lock",

            KeyCode::Oem1 => "Semicolon",
            KeyCode::OemPlus => "Equals",
            KeyCode::OemComma => "Comma",
            KeyCode::OemMinus => "Minus",
            KeyCode::OemPeriod => "Period",
            KeyCode::Oem2 => "Slash",
            KeyCode::Oem3 => "Back Quote",
            KeyCode::Oem4 => "Open Bracket",
            KeyCode::Oem5 => "Back Slash",
            KeyCode::Oem6 => "Close Bracket",
            KeyCode::Oem7 => "Quote",
            KeyCode::Oem102 => "Less",
        }
    }

    /// True for Shift, Control, Alt and Meta.
    pub fn is_modifier(self) -> bool {
        matches!(self, KeyCode::Shift | KeyCode::Control | KeyCode::Menu | KeyCode::Meta)
    }

    /// True for keys that only exist on the numeric keypad.
    pub fn is_numpad_only(self) -> bool {
        NUMPAD_DIGIT_KEYS.contains(&self)
            || matches!(
                self,
                KeyCode::Multiply
                    | KeyCode::Add
                    | KeyCode::Separator
                    | KeyCode::Subtract
                    | KeyCode::Decimal
                    | KeyCode::Divide
                    | KeyCode::NumLock
            )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_text())
    }
}

/// Table of `VK_*` style names, including common aliases.
pub fn create_key_map() -> HashMap<&'static str, KeyCode> {
    let mut map = HashMap::new();

    // Control keys
    map.insert("VK_BACK", KeyCode::Back);
    map.insert("VK_BACKSPACE", KeyCode::Back);
    map.insert("VK_TAB", KeyCode::Tab);
    map.insert("VK_RETURN", KeyCode::Return);
    map.insert("VK_ENTER", KeyCode::Return);
    map.insert("VK_SHIFT", KeyCode::Shift);
    map.insert("VK_CONTROL", KeyCode::Control);
    map.insert("VK_CTRL", KeyCode::Control);
    map.insert("VK_MENU", KeyCode::Menu);
    map.insert("VK_ALT", KeyCode::Menu);
    map.insert("VK_PAUSE", KeyCode::Pause);
    map.insert("VK_CAPITAL", KeyCode::Capital);
    map.insert("VK_CAPSLOCK", KeyCode::Capital);
    map.insert("VK_ESCAPE", KeyCode::Escape);
    map.insert("VK_ESC", KeyCode::Escape);
    map.insert("VK_SPACE", KeyCode::Space);
    map.insert("VK_PRIOR", KeyCode::Prior);
    map.insert("VK_PAGEUP", KeyCode::Prior);
    map.insert("VK_NEXT", KeyCode::Next);
    map.insert("VK_PAGEDOWN", KeyCode::Next);
    map.insert("VK_END", KeyCode::End);
    map.insert("VK_HOME", KeyCode::Home);
    map.insert("VK_LEFT", KeyCode::Left);
    map.insert("VK_UP", KeyCode::Up);
    map.insert("VK_RIGHT", KeyCode::Right);
    map.insert("VK_DOWN", KeyCode::Down);
    map.insert("VK_SNAPSHOT", KeyCode::PrintScreen);
    map.insert("VK_PRINTSCREEN", KeyCode::PrintScreen);
    map.insert("VK_INSERT", KeyCode::Insert);
    map.insert("VK_DELETE", KeyCode::Delete);
    map.insert("VK_META", KeyCode::Meta);
    map.insert("VK_WIN", KeyCode::Meta);
    map.insert("VK_APPS", KeyCode::ContextMenu);

    // Number, letter, numpad and function keys
    for code in DIGIT_KEYS.into_iter().chain(LETTER_KEYS) {
        map.insert(vk_key_name(code), code);
    }
    for code in NUMPAD_DIGIT_KEYS.into_iter().chain(FUNCTION_KEYS) {
        map.insert(vk_plain_name(code), code);
    }

    // Numpad operators
    map.insert("VK_MULTIPLY", KeyCode::Multiply);
    map.insert("VK_ADD", KeyCode::Add);
    map.insert("VK_SEPARATOR", KeyCode::Separator);
    map.insert("VK_SUBTRACT", KeyCode::Subtract);
    map.insert("VK_DECIMAL", KeyCode::Decimal);
    map.insert("VK_DIVIDE", KeyCode::Divide);
    map.insert("VK_NUMLOCK", KeyCode::NumLock);
    map.insert("VK_SCROLL", KeyCode::ScrollLock);

    // OEM keys with aliases
    map.insert("VK_OEM_1", KeyCode::Oem1);
    map.insert("VK_SEMICOLON", KeyCode::Oem1);
    map.insert("VK_OEM_PLUS", KeyCode::OemPlus);
    map.insert("VK_EQUALS", KeyCode::OemPlus);
    map.insert("VK_OEM_COMMA", KeyCode::OemComma);
    map.insert("VK_COMMA", KeyCode::OemComma);
    map.insert("VK_OEM_MINUS", KeyCode::OemMinus);
    map.insert("VK_MINUS", KeyCode::OemMinus);
    map.insert("VK_OEM_PERIOD", KeyCode::OemPeriod);
    map.insert("VK_PERIOD", KeyCode::OemPeriod);
    map.insert("VK_OEM_2", KeyCode::Oem2);
    map.insert("VK_SLASH", KeyCode::Oem2);
    map.insert("VK_OEM_3", KeyCode::Oem3);
    map.insert("VK_BACK_QUOTE", KeyCode::Oem3);
    map.insert("VK_OEM_4", KeyCode::Oem4);
    map.insert("VK_LBRACKET", KeyCode::Oem4);
    map.insert("VK_OEM_5", KeyCode::Oem5);
    map.insert("VK_BACKSLASH", KeyCode::Oem5);
    map.insert("VK_OEM_6", KeyCode::Oem6);
    map.insert("VK_RBRACKET", KeyCode::Oem6);
    map.insert("VK_OEM_7", KeyCode::Oem7);
    map.insert("VK_QUOTE", KeyCode::Oem7);
    map.insert("VK_OEM_102", KeyCode::Oem102);
    map.insert("VK_LESS", KeyCode::Oem102);

    map
}

fn vk_key_name(code: KeyCode) -> &'static str {
    match code {
        KeyCode::Key0 => "VK_KEY_0",
        KeyCode::Key1 => "VK_KEY_1",
        KeyCode::Key2 => "VK_KEY_2",
        KeyCode::Key3 => "VK_KEY_3",
        KeyCode::Key4 => "VK_KEY_4",
        KeyCode::Key5 => "VK_KEY_5",
        KeyCode::Key6 => "VK_KEY_6",
        KeyCode::Key7 => "VK_KEY_7",
        KeyCode::Key8 => "VK_KEY_8",
        KeyCode::Key9 => "VK_KEY_9",
        KeyCode::KeyA => "VK_KEY_A",
        KeyCode::KeyB => "VK_KEY_B",
        KeyCode::KeyC => "VK_KEY_C",
        KeyCode::KeyD => "VK_KEY_D",
        KeyCode::KeyE => "VK_KEY_E",
        KeyCode::KeyF => "VK_KEY_F",
        KeyCode::KeyG => "VK_KEY_G",
        KeyCode::KeyH => "VK_KEY_H",
        KeyCode::KeyI => "VK_KEY_I",
        KeyCode::KeyJ => "VK_KEY_J",
        KeyCode::KeyK => "VK_KEY_K",
        KeyCode::KeyL => "VK_KEY_L",
        KeyCode::KeyM => "VK_KEY_M",
        KeyCode::KeyN => "VK_KEY_N",
        KeyCode::KeyO => "VK_KEY_O",
        KeyCode::KeyP => "VK_KEY_P",
        KeyCode::KeyQ => "VK_KEY_Q",
        KeyCode::KeyR => "VK_KEY_R",
        KeyCode::KeyS => "VK_KEY_S",
        KeyCode::KeyT => "VK_KEY_T",
        KeyCode::KeyU => "VK_KEY_U",
        KeyCode::KeyV => "VK_KEY_V",
        KeyCode::KeyW => "VK_KEY_W",
        KeyCode::KeyX => "VK_KEY_X",
        KeyCode::KeyY => "VK_KEY_Y",
        KeyCode::KeyZ => "VK_KEY_Z",
        _ => vk_plain_name(code),
    }
}

fn vk_plain_name(code: KeyCode) -> &'static str {
    match code {
        KeyCode::Numpad0 => "VK_NUMPAD0",
        KeyCode::Numpad1 => "VK_NUMPAD1",
        KeyCode::Numpad2 => "VK_NUMPAD2",
        KeyCode::Numpad3 => "VK_NUMPAD3",
        KeyCode::Numpad4 => "VK_NUMPAD4",
        KeyCode::Numpad5 => "VK_NUMPAD5",
        KeyCode::Numpad6 => "VK_NUMPAD6",
        KeyCode::Numpad7 => "VK_NUMPAD7",
        KeyCode::Numpad8 => "VK_NUMPAD8",
        KeyCode::Numpad9 => "VK_NUMPAD9",
        KeyCode::F1 => "VK_F1",
        KeyCode::F2 => "VK_F2",
        KeyCode::F3 => "VK_F3",
        KeyCode::F4 => "VK_F4",
        KeyCode::F5 => "VK_F5",
        KeyCode::F6 => "VK_F6",
        KeyCode::F7 => "VK_F7",
        KeyCode::F8 => "VK_F8",
        KeyCode::F9 => "VK_F9",
        KeyCode::F10 => "VK_F10",
        KeyCode::F11 => "VK_F11",
        KeyCode::F12 => "VK_F12",
        _ => "VK_UNDEFINED",
    }
}
