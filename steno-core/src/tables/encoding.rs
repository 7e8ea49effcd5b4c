//! Per-family encoding tables

use std::fmt;
use crate::types::{slots, ChordKey, Family, KeyCode};
use super::encode::{codes, encode, Encoding, Locale, NO_ENTRY};

/// Number of entries in every table (one per 8-bit slot mask)
pub const TABLE_SIZE: usize = 256;

/// A chord definition used to build a table
#[derive(Debug, Clone, Copy)]
pub struct ChordEntry {
    pub keys: &'static [ChordKey],
    pub text: &'static [u8],
}

/// Shorthand for table sources
pub const fn chord(keys: &'static [ChordKey], text: &'static [u8]) -> ChordEntry {
    ChordEntry { keys, text }
}

/// Maps a family slot mask to the codes it emits
#[derive(Clone, PartialEq, Eq)]
pub struct EncodingTable {
    family: Family,
    entries: [Encoding; TABLE_SIZE],
}

impl EncodingTable {
    /// A table that emits nothing for every combination
    pub const fn empty(family: Family) -> Self {
        Self {
            family,
            entries: [NO_ENTRY; TABLE_SIZE],
        }
    }

    /// Builds a table from chord definitions
    ///
    /// Panics (a compile error for `const` tables) when a chord uses keys of
    /// another family, has no keys or no output, or is defined twice.
    pub const fn build(family: Family, chords: &[ChordEntry], locale: Locale) -> Self {
        let mut entries = [NO_ENTRY; TABLE_SIZE];
        let mut i = 0;
        while i < chords.len() {
            let keys = chords[i].keys;
            if keys.is_empty() {
                panic!("chord without keys");
            }
            if keys[0].family() as u8 != family as u8 {
                panic!("chord key belongs to another family");
            }
            if chords[i].text.is_empty() {
                panic!("chord without output");
            }
            let mask = slots(keys) as usize;
            if entries[mask][0] != 0 {
                panic!("chord defined twice");
            }
            entries[mask] = encode(chords[i].text, locale);
            i += 1;
        }
        Self { family, entries }
    }

    /// Wraps raw entries, e.g. from a layout image
    pub const fn from_entries(family: Family, entries: [Encoding; TABLE_SIZE]) -> Self {
        Self { family, entries }
    }

    pub const fn family(&self) -> Family {
        self.family
    }

    /// Raw entry for a slot mask
    pub fn lookup(&self, bits: u8) -> &Encoding {
        &self.entries[bits as usize]
    }

    /// Codes emitted for a slot mask, stopping at the first zero byte
    pub fn codes(&self, bits: u8) -> impl Iterator<Item = KeyCode> + '_ {
        codes(self.lookup(bits))
    }

    pub fn set(&mut self, bits: u8, encoding: Encoding) {
        self.entries[bits as usize] = encoding;
    }

    /// Entries that emit at least one code, limited to the family's width
    pub fn defined(&self) -> impl Iterator<Item = (u8, &Encoding)> + '_ {
        self.entries
            .iter()
            .take(self.family.combinations())
            .enumerate()
            .filter(|(_, e)| e[0] != 0)
            .map(|(bits, e)| (bits as u8, e))
    }

    /// Entries covering the family's width, in mask order
    pub fn entries(&self) -> &[Encoding] {
        &self.entries[..self.family.combinations()]
    }
}

impl fmt::Debug for EncodingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingTable")
            .field("family", &self.family)
            .field("defined", &self.defined().count())
            .finish()
    }
}
