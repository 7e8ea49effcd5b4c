//! Chord accumulation state

use crate::types::{ChordKey, Family, FAMILY_COUNT};

/// Case handling selected by the case-control keys of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    None,
    /// Every code of the stroke is shifted
    UpperCaseAll,
    /// Only the first code of the stroke is shifted
    CapitalizeFirst,
    /// The first two codes of the stroke are shifted
    CapitalizeSecond,
}

impl CaseMode {
    /// Classifies the case-control family bits (C_UP = 1, C_IUP = 2)
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => CaseMode::UpperCaseAll,
            2 => CaseMode::CapitalizeFirst,
            3 => CaseMode::CapitalizeSecond,
            _ => CaseMode::None,
        }
    }

    /// Number of codes after which shift is released, if any
    pub const fn shifted_codes(self) -> Option<usize> {
        match self {
            CaseMode::CapitalizeFirst => Some(1),
            CaseMode::CapitalizeSecond => Some(2),
            _ => None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, CaseMode::None)
    }
}

/// Slots accumulated over one completed chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stroke {
    bits: [u8; FAMILY_COUNT],
}

impl Stroke {
    pub const fn from_bits(bits: [u8; FAMILY_COUNT]) -> Self {
        Self { bits }
    }

    /// Builds a stroke from keys, for tests and tools
    pub fn from_keys(keys: &[ChordKey]) -> Self {
        let mut bits = [0u8; FAMILY_COUNT];
        for key in keys {
            bits[key.family().index()] |= key.family_bit();
        }
        Self { bits }
    }

    pub const fn bits(&self, family: Family) -> u8 {
        self.bits[family.index()]
    }

    pub const fn case_mode(&self) -> CaseMode {
        CaseMode::from_bits(self.bits(Family::CaseControl))
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Keys of the stroke in family then slot order
    pub fn keys(&self) -> impl Iterator<Item = ChordKey> + '_ {
        ChordKey::all().filter(move |key| self.bits(key.family()) & key.family_bit() != 0)
    }
}

/// Keys held right now and keys seen during the current chord
///
/// `pressed_mask` is zero exactly when no steno key is down. `family_bits`
/// only grows while a chord is in progress and is cleared when the chord
/// resolves, so it always covers the held keys of each family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordState {
    pressed_mask: u32,
    family_bits: [u8; FAMILY_COUNT],
}

impl ChordState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a steno key going down
    pub fn press(&mut self, key: ChordKey) {
        self.pressed_mask |= key.chord_bit();
        self.family_bits[key.family().index()] |= key.family_bit();
    }

    /// Records a steno key going up
    ///
    /// Returns the accumulated stroke when this release leaves no steno key
    /// held, and starts a new chord. Releasing while nothing is held never
    /// yields a stroke.
    pub fn release(&mut self, key: ChordKey) -> Option<Stroke> {
        if self.pressed_mask == 0 {
            return None;
        }
        self.pressed_mask &= !key.chord_bit();
        if self.pressed_mask != 0 {
            return None;
        }
        let stroke = Stroke::from_bits(self.family_bits);
        self.family_bits = [0; FAMILY_COUNT];
        Some(stroke)
    }

    /// Union of the chord bits of every held key
    pub fn pressed_mask(&self) -> u32 {
        self.pressed_mask
    }

    /// Slots of a family seen during the current chord
    pub fn family_bits(&self, family: Family) -> u8 {
        self.family_bits[family.index()]
    }

    /// True while at least one steno key is held
    pub fn is_chord_in_progress(&self) -> bool {
        self.pressed_mask != 0
    }

    /// True while a case-control key is held
    pub fn case_control_held(&self) -> bool {
        self.pressed_mask & Family::CaseControl.chord_mask() != 0
    }

    /// Drops any partial chord
    pub fn reset(&mut self) {
        self.pressed_mask = 0;
        self.family_bits = [0; FAMILY_COUNT];
    }
}
