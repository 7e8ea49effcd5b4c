//! Complete table set the engine runs from

use crate::types::Family;
use super::encode::Locale;
use super::encoding::EncodingTable;
use super::keymap::{Keymap, ERGODOX_STENO};
use super::shelton;
use super::special_shift::{self, SpecialShiftTable};

/// Encoding tables, keymap and special shift table for one host locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    locale: Locale,
    tables: [EncodingTable; 4],
    keymap: Keymap,
    special_shift: SpecialShiftTable,
}

/// Built-in layout for QWERTY hosts
pub static QWERTY: Layout = Layout::shelton(Locale::Qwerty);
/// Built-in layout for AZERTY hosts
pub static AZERTY: Layout = Layout::shelton(Locale::Azerty);

impl Layout {
    /// Layout with the built-in Shelton chords, keymap and French special
    /// shift symbols
    pub const fn shelton(locale: Locale) -> Self {
        Self {
            locale,
            tables: [
                EncodingTable::build(Family::LeftHand, shelton::LEFT_HAND, locale),
                EncodingTable::build(Family::Thumbs, shelton::THUMBS, locale),
                EncodingTable::build(Family::RightHand, shelton::RIGHT_HAND, locale),
                EncodingTable::build(Family::Spaces, shelton::SPACES, locale),
            ],
            keymap: ERGODOX_STENO,
            special_shift: special_shift::FRENCH,
        }
    }

    /// Shared reference to a built-in layout
    pub fn builtin(locale: Locale) -> &'static Layout {
        match locale {
            Locale::Qwerty => &QWERTY,
            Locale::Azerty => &AZERTY,
        }
    }

    /// Layout with empty encoding tables
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            tables: Family::WITH_TABLES.map(EncodingTable::empty),
            keymap: Keymap::EMPTY,
            special_shift: SpecialShiftTable::EMPTY,
        }
    }

    /// Assembles a layout from parts
    ///
    /// Tables are matched to families by their own family tag; families
    /// without a table get an empty one.
    pub fn from_parts(
        locale: Locale,
        tables: Vec<EncodingTable>,
        keymap: Keymap,
        special_shift: SpecialShiftTable,
    ) -> Self {
        let mut layout = Self::empty(locale);
        for table in tables {
            if let Some(slot) = Self::table_slot(table.family()) {
                layout.tables[slot] = table;
            }
        }
        layout.keymap = keymap;
        layout.special_shift = special_shift;
        layout
    }

    fn table_slot(family: Family) -> Option<usize> {
        Family::WITH_TABLES.iter().position(|&f| f == family)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Encoding table of a family; `None` for case control
    pub fn table(&self, family: Family) -> Option<&EncodingTable> {
        Self::table_slot(family).map(|slot| &self.tables[slot])
    }

    pub fn table_mut(&mut self, family: Family) -> Option<&mut EncodingTable> {
        Self::table_slot(family).map(move |slot| &mut self.tables[slot])
    }

    /// Tables in stroke order
    pub fn tables(&self) -> &[EncodingTable] {
        &self.tables
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    pub fn special_shift(&self) -> &SpecialShiftTable {
        &self.special_shift
    }
}

impl Default for Layout {
    fn default() -> Self {
        QWERTY.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{slots, KeyCode, L_A, T_E, T_U};

    #[test]
    fn test_case_control_has_no_table() {
        assert!(QWERTY.table(Family::CaseControl).is_none());
        for family in Family::WITH_TABLES {
            assert_eq!(QWERTY.table(family).map(|t| t.family()), Some(family));
        }
    }

    #[test]
    fn test_locales_differ_on_letters() {
        let bits = slots(&[L_A]);
        let qwerty: Vec<_> = QWERTY.table(Family::LeftHand).unwrap().codes(bits).collect();
        let azerty: Vec<_> = AZERTY.table(Family::LeftHand).unwrap().codes(bits).collect();
        assert_eq!(qwerty, vec![KeyCode::A]);
        assert_eq!(azerty, vec![KeyCode::Q]);
    }

    #[test]
    fn test_thumb_vowel_i() {
        let codes: Vec<_> = QWERTY
            .table(Family::Thumbs)
            .unwrap()
            .codes(slots(&[T_E, T_U]))
            .collect();
        assert_eq!(codes, vec![KeyCode::I]);
    }

    #[test]
    fn test_from_parts_fills_missing_tables() {
        let layout = Layout::from_parts(
            Locale::Azerty,
            vec![EncodingTable::empty(Family::Spaces)],
            Keymap::EMPTY,
            SpecialShiftTable::EMPTY,
        );
        assert_eq!(layout.locale(), Locale::Azerty);
        assert_eq!(layout.tables().len(), 4);
        assert!(layout.table(Family::LeftHand).unwrap().defined().next().is_none());
    }
}
