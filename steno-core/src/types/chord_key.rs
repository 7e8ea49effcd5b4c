//! Steno key identities and keymap cells

use std::fmt;
use super::family::Family;
use super::keycodes::ModdedKey;

/// A steno key: a slot inside a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChordKey {
    family: Family,
    slot: u8,
}

impl ChordKey {
    /// Creates a key, panicking (at compile time in const contexts) when the
    /// slot does not fit the family
    pub const fn new(family: Family, slot: u8) -> Self {
        if slot as u32 >= family.width() {
            panic!("slot out of range for family");
        }
        Self { family, slot }
    }

    /// Checked constructor for data read at runtime
    pub const fn try_new(family: Family, slot: u8) -> Option<Self> {
        if slot as u32 >= family.width() {
            None
        } else {
            Some(Self { family, slot })
        }
    }

    pub const fn family(self) -> Family {
        self.family
    }

    pub const fn slot(self) -> u8 {
        self.slot
    }

    /// Bit of this key inside its family byte
    pub const fn family_bit(self) -> u8 {
        1 << self.slot
    }

    /// Bit of this key inside the 32-bit chord mask
    pub const fn chord_bit(self) -> u32 {
        (self.family_bit() as u32) << self.family.bit_offset()
    }

    /// Slot names per family, indexed by slot
    pub const fn slot_names(family: Family) -> &'static [&'static str] {
        match family {
            Family::CaseControl => &["UP", "IUP"],
            Family::LeftHand => &["A", "S", "C", "T", "W", "H", "N", "R"],
            Family::Thumbs => &["A", "O", "E", "U"],
            Family::RightHand => &["R", "N", "L", "G", "C", "H", "T", "S"],
            Family::Spaces => &["SPC", "BSPC", "TAB", "RET"],
        }
    }

    /// Name of the slot without family prefix ("S", "BSPC", ...)
    pub const fn slot_name(self) -> &'static str {
        Self::slot_names(self.family)[self.slot as usize]
    }

    /// Looks a slot up by name inside a family
    pub fn from_slot_name(family: Family, name: &str) -> Option<Self> {
        Self::slot_names(family)
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|slot| Self { family, slot: slot as u8 })
    }

    /// Family prefix used in key names ("L", "T", "R", "S", "C")
    pub const fn prefix(family: Family) -> &'static str {
        match family {
            Family::CaseControl => "C",
            Family::LeftHand => "L",
            Family::Thumbs => "T",
            Family::RightHand => "R",
            Family::Spaces => "S",
        }
    }

    /// Parses a full key name such as `L_A` or `S_BSPC`
    pub fn from_name(name: &str) -> Option<Self> {
        let (prefix, slot) = name.split_once('_')?;
        let family = Family::ALL
            .into_iter()
            .find(|f| Self::prefix(*f).eq_ignore_ascii_case(prefix))?;
        Self::from_slot_name(family, slot)
    }

    /// Every key, family by family
    pub fn all() -> impl Iterator<Item = ChordKey> {
        Family::ALL.into_iter().flat_map(|family| {
            (0..family.width() as u8).map(move |slot| ChordKey { family, slot })
        })
    }
}

impl fmt::Display for ChordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Self::prefix(self.family), self.slot_name())
    }
}

// Left hand
pub const L_A: ChordKey = ChordKey::new(Family::LeftHand, 0);
pub const L_S: ChordKey = ChordKey::new(Family::LeftHand, 1);
pub const L_C: ChordKey = ChordKey::new(Family::LeftHand, 2);
pub const L_T: ChordKey = ChordKey::new(Family::LeftHand, 3);
pub const L_W: ChordKey = ChordKey::new(Family::LeftHand, 4);
pub const L_H: ChordKey = ChordKey::new(Family::LeftHand, 5);
pub const L_N: ChordKey = ChordKey::new(Family::LeftHand, 6);
pub const L_R: ChordKey = ChordKey::new(Family::LeftHand, 7);

// Thumbs
pub const T_A: ChordKey = ChordKey::new(Family::Thumbs, 0);
pub const T_O: ChordKey = ChordKey::new(Family::Thumbs, 1);
pub const T_E: ChordKey = ChordKey::new(Family::Thumbs, 2);
pub const T_U: ChordKey = ChordKey::new(Family::Thumbs, 3);

// Right hand
pub const R_R: ChordKey = ChordKey::new(Family::RightHand, 0);
pub const R_N: ChordKey = ChordKey::new(Family::RightHand, 1);
pub const R_L: ChordKey = ChordKey::new(Family::RightHand, 2);
pub const R_G: ChordKey = ChordKey::new(Family::RightHand, 3);
pub const R_C: ChordKey = ChordKey::new(Family::RightHand, 4);
pub const R_H: ChordKey = ChordKey::new(Family::RightHand, 5);
pub const R_T: ChordKey = ChordKey::new(Family::RightHand, 6);
pub const R_S: ChordKey = ChordKey::new(Family::RightHand, 7);

// Space controls
pub const S_SPC: ChordKey = ChordKey::new(Family::Spaces, 0);
pub const S_BSPC: ChordKey = ChordKey::new(Family::Spaces, 1);
pub const S_TAB: ChordKey = ChordKey::new(Family::Spaces, 2);
pub const S_RET: ChordKey = ChordKey::new(Family::Spaces, 3);

// Case controls: upper case, initial upper case
pub const C_UP: ChordKey = ChordKey::new(Family::CaseControl, 0);
pub const C_IUP: ChordKey = ChordKey::new(Family::CaseControl, 1);

/// Family-local bitmask of a set of keys
///
/// Panics when the keys do not all belong to the same family.
pub const fn slots(keys: &[ChordKey]) -> u8 {
    let mut bits = 0u8;
    let mut i = 0;
    while i < keys.len() {
        if keys[i].family as u8 != keys[0].family as u8 {
            panic!("chord mixes key families");
        }
        bits |= keys[i].family_bit();
        i += 1;
    }
    bits
}

/// One cell of the steno keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Position not assigned on this layer
    #[default]
    Empty,
    /// A chord-contributing key
    Steno(ChordKey),
    /// An ordinary key sent with its modifiers
    Plain(ModdedKey),
}

impl Cell {
    /// Marks a packed cell as a steno key
    pub const STENO_BIT: u32 = 1 << 31;

    /// Packs into the 32-bit firmware cell format
    ///
    /// Steno keys: bit 31 set, bits 7:4 family tag, bits 3:0 slot.
    /// Plain keys: low 16 bits quantum keycode.
    pub const fn to_raw(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Steno(key) => {
                Self::STENO_BIT | ((key.family.tag() as u32) << 4) | key.slot as u32
            }
            Cell::Plain(key) => key.quantum() as u32,
        }
    }

    /// Unpacks a 32-bit cell; `None` for steno cells with an unknown family
    /// or an out-of-range slot
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw == 0 {
            return Some(Cell::Empty);
        }
        if raw & Self::STENO_BIT != 0 {
            let slot = (raw & 0x0F) as u8;
            let family = match Family::from_tag(((raw >> 4) & 0x0F) as u8) {
                Some(family) => family,
                None => return None,
            };
            return match ChordKey::try_new(family, slot) {
                Some(key) => Some(Cell::Steno(key)),
                None => None,
            };
        }
        Some(Cell::Plain(ModdedKey::from_quantum(raw as u16)))
    }

    pub const fn steno(self) -> Option<ChordKey> {
        match self {
            Cell::Steno(key) => Some(key),
            _ => None,
        }
    }

    pub const fn is_steno(self) -> bool {
        matches!(self, Cell::Steno(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::keycodes::{KeyCode, Mods};

    #[test]
    fn test_chord_bits() {
        assert_eq!(L_A.chord_bit(), 1);
        assert_eq!(T_A.chord_bit(), 1 << 8);
        assert_eq!(R_S.chord_bit(), 1 << 19);
        assert_eq!(S_RET.chord_bit(), 1 << 23);
        assert_eq!(C_IUP.chord_bit(), 1 << 28);
    }

    #[test]
    fn test_packed_steno_cell() {
        // T_O in the firmware encoding: slot 1, family 3, steno bit
        let raw = Cell::Steno(T_O).to_raw();
        assert_eq!(raw, 0x8000_0031);
        assert_eq!(Cell::from_raw(raw), Some(Cell::Steno(T_O)));
    }

    #[test]
    fn test_packed_plain_cell() {
        let cell = Cell::Plain(ModdedKey { mods: Mods::RALT, code: KeyCode::N5 });
        assert_eq!(cell.to_raw(), 0x1422);
        assert_eq!(Cell::from_raw(0x1422), Some(cell));
    }

    #[test]
    fn test_invalid_packed_cells() {
        // Unknown family tag
        assert_eq!(Cell::from_raw(Cell::STENO_BIT | 0x70), None);
        // Thumbs only have four slots
        assert_eq!(Cell::from_raw(Cell::STENO_BIT | 0x35), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(L_A.to_string(), "L_A");
        assert_eq!(S_BSPC.to_string(), "S_BSPC");
        assert_eq!(ChordKey::from_name("r_g"), Some(R_G));
        assert_eq!(ChordKey::from_name("C_IUP"), Some(C_IUP));
        assert_eq!(ChordKey::from_name("X_A"), None);
        assert_eq!(ChordKey::all().count(), 26);
    }

    #[test]
    fn test_slots() {
        assert_eq!(slots(&[L_S, L_T]), 0b0000_1010);
        assert_eq!(slots(&[]), 0);
    }
}
