//! HID key codes, modifier masks and modifier+code pairs

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A USB HID keyboard usage code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyCode(pub u8);

impl KeyCode {
    /// No key
    pub const NONE: Self = Self(0x00);

    pub const A: Self = Self(0x04);
    pub const B: Self = Self(0x05);
    pub const C: Self = Self(0x06);
    pub const D: Self = Self(0x07);
    pub const E: Self = Self(0x08);
    pub const F: Self = Self(0x09);
    pub const G: Self = Self(0x0A);
    pub const H: Self = Self(0x0B);
    pub const I: Self = Self(0x0C);
    pub const J: Self = Self(0x0D);
    pub const K: Self = Self(0x0E);
    pub const L: Self = Self(0x0F);
    pub const M: Self = Self(0x10);
    pub const N: Self = Self(0x11);
    pub const O: Self = Self(0x12);
    pub const P: Self = Self(0x13);
    pub const Q: Self = Self(0x14);
    pub const R: Self = Self(0x15);
    pub const S: Self = Self(0x16);
    pub const T: Self = Self(0x17);
    pub const U: Self = Self(0x18);
    pub const V: Self = Self(0x19);
    pub const W: Self = Self(0x1A);
    pub const X: Self = Self(0x1B);
    pub const Y: Self = Self(0x1C);
    pub const Z: Self = Self(0x1D);

    pub const N1: Self = Self(0x1E);
    pub const N2: Self = Self(0x1F);
    pub const N3: Self = Self(0x20);
    pub const N4: Self = Self(0x21);
    pub const N5: Self = Self(0x22);
    pub const N6: Self = Self(0x23);
    pub const N7: Self = Self(0x24);
    pub const N8: Self = Self(0x25);
    pub const N9: Self = Self(0x26);
    pub const N0: Self = Self(0x27);

    pub const ENTER: Self = Self(0x28);
    pub const ESCAPE: Self = Self(0x29);
    pub const BACKSPACE: Self = Self(0x2A);
    pub const TAB: Self = Self(0x2B);
    pub const SPACE: Self = Self(0x2C);
    pub const MINUS: Self = Self(0x2D);
    pub const EQUAL: Self = Self(0x2E);
    pub const LEFT_BRACKET: Self = Self(0x2F);
    pub const RIGHT_BRACKET: Self = Self(0x30);
    pub const BACKSLASH: Self = Self(0x31);
    pub const NON_US_HASH: Self = Self(0x32);
    pub const SEMICOLON: Self = Self(0x33);
    pub const QUOTE: Self = Self(0x34);
    pub const GRAVE: Self = Self(0x35);
    pub const COMMA: Self = Self(0x36);
    pub const DOT: Self = Self(0x37);
    pub const SLASH: Self = Self(0x38);
    pub const CAPS_LOCK: Self = Self(0x39);
    pub const DELETE: Self = Self(0x4C);
    pub const NON_US_BACKSLASH: Self = Self(0x64);

    /// Gets the raw usage code
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns true for the "no key" code
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Short symbolic name, used by the dump and simulator tools
    pub fn name(self) -> String {
        match self.0 {
            0x04..=0x1D => ((b'A' + (self.0 - 0x04)) as char).to_string(),
            0x1E..=0x26 => ((b'1' + (self.0 - 0x1E)) as char).to_string(),
            0x27 => "0".to_string(),
            0x28 => "ENTER".to_string(),
            0x29 => "ESC".to_string(),
            0x2A => "BSPC".to_string(),
            0x2B => "TAB".to_string(),
            0x2C => "SPACE".to_string(),
            0x2D => "MINUS".to_string(),
            0x2E => "EQUAL".to_string(),
            0x2F => "LBRC".to_string(),
            0x30 => "RBRC".to_string(),
            0x31 => "BSLS".to_string(),
            0x32 => "NUHS".to_string(),
            0x33 => "SCLN".to_string(),
            0x34 => "QUOT".to_string(),
            0x35 => "GRV".to_string(),
            0x36 => "COMM".to_string(),
            0x37 => "DOT".to_string(),
            0x38 => "SLSH".to_string(),
            0x4C => "DEL".to_string(),
            0x64 => "NUBS".to_string(),
            other => format!("{:#04X}", other),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// HID modifier byte (bit layout of the boot keyboard report)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mods(pub u8);

impl Mods {
    pub const NONE: Self = Self(0x00);
    pub const LCTRL: Self = Self(0x01);
    pub const LSHIFT: Self = Self(0x02);
    pub const LALT: Self = Self(0x04);
    pub const LGUI: Self = Self(0x08);
    pub const RCTRL: Self = Self(0x10);
    pub const RSHIFT: Self = Self(0x20);
    pub const RALT: Self = Self(0x40);
    pub const RGUI: Self = Self(0x80);

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks that every bit of `other` is set
    pub const fn contains(self, other: Mods) -> bool {
        self.0 & other.0 == other.0
    }

    /// Either shift key
    pub const fn has_shift(self) -> bool {
        self.0 & (Self::LSHIFT.0 | Self::RSHIFT.0) != 0
    }

    pub const fn union(self, other: Mods) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn without(self, other: Mods) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for Mods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for Mods {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Mods {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

// Quantum keycode modifier flags (high byte of a 16-bit keycode)
const QK_CTRL: u8 = 0x01;
const QK_SHIFT: u8 = 0x02;
const QK_ALT: u8 = 0x04;
const QK_GUI: u8 = 0x08;
const QK_RIGHT: u8 = 0x10;

/// A key code together with the modifiers it must be sent with
///
/// Firmware keymaps describe these as 16-bit "quantum" keycodes whose high
/// byte holds modifier flags (ctrl, shift, alt, gui and a right-hand flag)
/// and whose low byte is the HID code. `from_quantum`/`quantum` convert
/// between that packed form and an explicit HID modifier mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModdedKey {
    pub mods: Mods,
    pub code: KeyCode,
}

impl ModdedKey {
    /// A key with no modifiers
    pub const fn plain(code: KeyCode) -> Self {
        Self { mods: Mods::NONE, code }
    }

    /// The key with left shift held
    pub const fn shifted(code: KeyCode) -> Self {
        Self { mods: Mods::LSHIFT, code }
    }

    /// The key with AltGr (right alt) held
    pub const fn alt_gr(code: KeyCode) -> Self {
        Self { mods: Mods::RALT, code }
    }

    /// Decodes a 16-bit quantum keycode
    pub const fn from_quantum(value: u16) -> Self {
        let flags = (value >> 8) as u8;
        let side = flags & (QK_CTRL | QK_SHIFT | QK_ALT | QK_GUI);
        let mods = if flags & QK_RIGHT != 0 { side << 4 } else { side };
        Self {
            mods: Mods(mods),
            code: KeyCode(value as u8),
        }
    }

    /// Encodes as a 16-bit quantum keycode
    ///
    /// Mixed left/right modifier masks cannot be represented; the right-hand
    /// bits win in that case.
    pub const fn quantum(self) -> u16 {
        let right = self.mods.0 >> 4;
        let flags = if right != 0 {
            right | QK_RIGHT
        } else {
            self.mods.0 & 0x0F
        };
        ((flags as u16) << 8) | self.code.0 as u16
    }

    /// True when no code is assigned
    pub const fn is_none(self) -> bool {
        self.code.is_none()
    }
}

impl fmt::Display for ModdedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{:#04X}+{}", self.mods.0, self.code)
        }
    }
}
