//! Key code vocabulary.
//!
//! Key codes are plain integers in the Windows virtual-key numbering on every
//! host: letters are their uppercase ASCII value, digits their ASCII digit,
//! and named keys use the `VK_*` values. Backends translate their native key
//! identifiers into this numbering; the session passes codes through untouched.

use super::event::MouseButton;

/// Integer key code (virtual-key numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub u32);

impl Key {
    /// Raw integer value
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Key for an ASCII letter, either case
    pub fn letter(c: char) -> Option<Key> {
        c.is_ascii_alphabetic()
            .then(|| Key(c.to_ascii_uppercase() as u32))
    }

    /// Key for a top-row digit 0-9
    pub fn digit(d: u8) -> Option<Key> {
        (d <= 9).then(|| Key(u32::from(b'0' + d)))
    }

    /// Function key F1-F12
    pub fn function(n: u8) -> Option<Key> {
        (1..=12).contains(&n).then(|| Key(F1.0 + u32::from(n) - 1))
    }
}

impl From<Key> for u32 {
    fn from(key: Key) -> u32 {
        key.0
    }
}

pub const BACKSPACE: Key = Key(0x08);
pub const TAB: Key = Key(0x09);
pub const ENTER: Key = Key(0x0D);
pub const SHIFT: Key = Key(0x10);
pub const CONTROL: Key = Key(0x11);
pub const ALT: Key = Key(0x12);
pub const PAUSE: Key = Key(0x13);
pub const CAPS_LOCK: Key = Key(0x14);
pub const ESCAPE: Key = Key(0x1B);
pub const SPACE: Key = Key(0x20);
pub const PAGE_UP: Key = Key(0x21);
pub const PAGE_DOWN: Key = Key(0x22);
pub const END: Key = Key(0x23);
pub const HOME: Key = Key(0x24);
pub const LEFT: Key = Key(0x25);
pub const UP: Key = Key(0x26);
pub const RIGHT: Key = Key(0x27);
pub const DOWN: Key = Key(0x28);
pub const INSERT: Key = Key(0x2D);
pub const DELETE: Key = Key(0x2E);
pub const NUMPAD0: Key = Key(0x60);
pub const MULTIPLY: Key = Key(0x6A);
pub const ADD: Key = Key(0x6B);
pub const SUBTRACT: Key = Key(0x6D);
pub const DECIMAL: Key = Key(0x6E);
pub const DIVIDE: Key = Key(0x6F);
pub const F1: Key = Key(0x70);
pub const OEM_1: Key = Key(0xBA);
pub const OEM_PLUS: Key = Key(0xBB);
pub const OEM_COMMA: Key = Key(0xBC);
pub const OEM_MINUS: Key = Key(0xBD);
pub const OEM_PERIOD: Key = Key(0xBE);
pub const OEM_2: Key = Key(0xBF);
pub const OEM_3: Key = Key(0xC0);
pub const OEM_4: Key = Key(0xDB);
pub const OEM_5: Key = Key(0xDC);
pub const OEM_6: Key = Key(0xDD);
pub const OEM_7: Key = Key(0xDE);

const fn ascii(c: u8) -> Key {
    Key(c as u32)
}

// X11 keysym names used by demos written against Xlib. `XK_plus` and
// `XK_equal` share a physical key, so both land on OEM_PLUS.
const X11_KEYS: &[(&str, Key)] = &[
    ("Escape", ESCAPE),
    ("space", SPACE),
    ("Return", ENTER),
    ("Tab", TAB),
    ("BackSpace", BACKSPACE),
    ("Left", LEFT),
    ("Right", RIGHT),
    ("Up", UP),
    ("Down", DOWN),
    ("plus", OEM_PLUS),
    ("equal", OEM_PLUS),
    ("minus", OEM_MINUS),
    ("q", ascii(b'Q')),
    ("r", ascii(b'R')),
    ("c", ascii(b'C')),
    ("w", ascii(b'W')),
    ("a", ascii(b'A')),
    ("s", ascii(b'S')),
    ("d", ascii(b'D')),
    ("p", ascii(b'P')),
    ("g", ascii(b'G')),
    ("t", ascii(b'T')),
    ("f", ascii(b'F')),
    ("h", ascii(b'H')),
    ("l", ascii(b'L')),
    ("m", ascii(b'M')),
    ("0", ascii(b'0')),
    ("1", ascii(b'1')),
    ("2", ascii(b'2')),
    ("3", ascii(b'3')),
    ("4", ascii(b'4')),
    ("5", ascii(b'5')),
    ("6", ascii(b'6')),
    ("7", ascii(b'7')),
    ("8", ascii(b'8')),
    ("9", ascii(b'9')),
];

/// Look up an X11 keysym name (`"XK_Escape"`, `"XK_q"`, or without the prefix)
pub fn from_x11_name(name: &str) -> Option<Key> {
    let bare = name.strip_prefix("XK_").unwrap_or(name);
    X11_KEYS
        .iter()
        .find(|(sym, _)| *sym == bare)
        .map(|(_, key)| *key)
}

/// Look up an Xlib button name (`"Button1"`..`"Button3"`)
pub fn button_from_x11_name(name: &str) -> Option<MouseButton> {
    match name {
        "Button1" => Some(MouseButton::Left),
        "Button2" => Some(MouseButton::Middle),
        "Button3" => Some(MouseButton::Right),
        _ => None,
    }
}
