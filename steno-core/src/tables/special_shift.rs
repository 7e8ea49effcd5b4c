//! Shifted variants of host-layout symbols
//!
//! Some symbols of the host layout are not typed by shift plus the same key
//! (on AZERTY, `;` shifts to `:` but `#` "shifts" to a backtick the user
//! chose). The table is indexed by `quantum keycode % SPECIAL_SHIFT_TABLE_SIZE`;
//! distinct symbols can share an index, so [`SpecialShiftTable::build`]
//! rejects a curated list whose sources collide.

use crate::types::ModdedKey;
use super::french::*;

pub const SPECIAL_SHIFT_TABLE_SIZE: usize = 18;

/// A curated `(symbol, shifted symbol)` pair
pub type ShiftPair = (ModdedKey, ModdedKey);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialShiftTable {
    entries: [u16; SPECIAL_SHIFT_TABLE_SIZE],
}

impl SpecialShiftTable {
    pub const EMPTY: Self = Self {
        entries: [0; SPECIAL_SHIFT_TABLE_SIZE],
    };

    /// Slot a key lands in
    pub const fn index_of(key: ModdedKey) -> usize {
        key.quantum() as usize % SPECIAL_SHIFT_TABLE_SIZE
    }

    /// Builds the table, panicking when two sources share a slot or a
    /// shifted symbol has no code
    pub const fn build(pairs: &[ShiftPair]) -> Self {
        let mut entries = [0u16; SPECIAL_SHIFT_TABLE_SIZE];
        let mut i = 0;
        while i < pairs.len() {
            let (source, shifted) = pairs[i];
            if shifted.code.raw() == 0 {
                panic!("special shift target without key code");
            }
            let index = Self::index_of(source);
            if entries[index] != 0 {
                panic!("special shift sources collide modulo the table size");
            }
            entries[index] = shifted.quantum();
            i += 1;
        }
        Self { entries }
    }

    /// Raw table as stored in layout images
    pub const fn from_raw(entries: [u16; SPECIAL_SHIFT_TABLE_SIZE]) -> Self {
        Self { entries }
    }

    pub fn raw(&self) -> &[u16; SPECIAL_SHIFT_TABLE_SIZE] {
        &self.entries
    }

    /// Shifted variant registered for the slot `key` falls into
    ///
    /// Keys outside the curated list may alias a curated slot; callers only
    /// route curated symbols here.
    pub fn lookup(&self, key: ModdedKey) -> Option<ModdedKey> {
        let entry = ModdedKey::from_quantum(self.entries[Self::index_of(key)]);
        if entry.is_none() {
            None
        } else {
            Some(entry)
        }
    }
}

impl Default for SpecialShiftTable {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Curated shifted symbols for the French host layout
pub const FRENCH_PAIRS: &[ShiftPair] = &[
    (FR_SCLN, FR_COLN),
    (FR_HASH, FR_GRV),
    (FR_DOT, FR_GRTR),
    (FR_BSLS, FR_PIPE),
    (FR_AT, FR_CIRC),
    (FR_DLR, FR_TILD),
    (FR_APOS, FR_QUOT),
    (FR_COMM, FR_LESS),
    (FR_MINS, FR_UNDS),
];

pub const FRENCH: SpecialShiftTable = SpecialShiftTable::build(FRENCH_PAIRS);
