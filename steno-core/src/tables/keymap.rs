//! Steno layer keymap: matrix position to cell, plain and shifted layers

use std::fmt;
use crate::types::*;
use super::french::*;

/// Matrix rows (number row, three alpha rows, bottom row, thumb cluster)
pub const MATRIX_ROWS: usize = 6;
/// Matrix columns (seven per half)
pub const MATRIX_COLS: usize = 14;

/// A physical key position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixPos {
    pub row: u8,
    pub col: u8,
}

impl MatrixPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < MATRIX_ROWS && (self.col as usize) < MATRIX_COLS
    }
}

impl fmt::Display for MatrixPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Keymap layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapLayer {
    /// What each position sends normally
    Base,
    /// Alternate sent for plain keys while a case-control key is held
    Shifted,
}

pub type LayerGrid = [[Cell; MATRIX_COLS]; MATRIX_ROWS];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    base: LayerGrid,
    shifted: LayerGrid,
}

impl Keymap {
    pub const EMPTY: Self = Self {
        base: [[Cell::Empty; MATRIX_COLS]; MATRIX_ROWS],
        shifted: [[Cell::Empty; MATRIX_COLS]; MATRIX_ROWS],
    };

    pub const fn new(base: LayerGrid, shifted: LayerGrid) -> Self {
        Self { base, shifted }
    }

    fn grid(&self, layer: KeymapLayer) -> &LayerGrid {
        match layer {
            KeymapLayer::Base => &self.base,
            KeymapLayer::Shifted => &self.shifted,
        }
    }

    /// Cell at a position; out-of-range positions are empty
    pub fn cell(&self, layer: KeymapLayer, pos: MatrixPos) -> Cell {
        if !pos.in_bounds() {
            return Cell::Empty;
        }
        self.grid(layer)[pos.row as usize][pos.col as usize]
    }

    /// Replaces a cell; out-of-range positions are ignored
    pub fn set(&mut self, layer: KeymapLayer, pos: MatrixPos, cell: Cell) {
        if !pos.in_bounds() {
            return;
        }
        let grid = match layer {
            KeymapLayer::Base => &mut self.base,
            KeymapLayer::Shifted => &mut self.shifted,
        };
        grid[pos.row as usize][pos.col as usize] = cell;
    }

    /// First base-layer position holding a steno key
    pub fn position_of(&self, key: ChordKey) -> Option<MatrixPos> {
        self.positions()
            .find(|&pos| self.cell(KeymapLayer::Base, pos) == Cell::Steno(key))
    }

    /// All positions, row-major
    pub fn positions(&self) -> impl Iterator<Item = MatrixPos> {
        (0..MATRIX_ROWS as u8)
            .flat_map(|row| (0..MATRIX_COLS as u8).map(move |col| MatrixPos::new(row, col)))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::EMPTY
    }
}

const __: Cell = Cell::Empty;

const fn s(key: ChordKey) -> Cell {
    Cell::Steno(key)
}

const fn p(key: ModdedKey) -> Cell {
    Cell::Plain(key)
}

/// Steno layer of the split keyboard. Columns 0-6 are the left half,
/// 7-13 the right half. Plain keys target a French host layout.
pub const ERGODOX_STENO: Keymap = Keymap::new(
    [
        [__, __, __, __, __, __, __, /**/ __, __, __, __, __, __, p(FR_HASH)],
        [s(S_TAB), p(FR_LBRC), p(FR_LCBR), p(FR_RCBR), p(FR_LPRN), p(FR_EQL), __,
            /**/ __, p(FR_ASTR), p(FR_RPRN), p(FR_PLUS), p(FR_RBRC), p(FR_EXLM), p(FR_SLSH)],
        [s(C_UP), s(L_A), s(L_C), s(L_W), s(L_N), p(KC_BSPC), __,
            /**/ __, s(S_SPC), s(R_R), s(R_L), s(R_C), s(R_T), p(FR_MINS)],
        [s(C_IUP), s(L_S), s(L_T), s(L_H), s(L_R), p(KC_ENT), __,
            /**/ __, p(KC_DEL), s(R_N), s(R_G), s(R_H), s(R_S), s(C_IUP)],
        [__, p(FR_SCLN), __, __, __, __, __, /**/ __, __, __, __, p(FR_COMM), p(FR_DOT), __],
        [__, __, __, s(T_A), s(T_O), __, __, /**/ __, __, __, __, s(T_E), s(T_U), __],
    ],
    [
        [__, __, __, __, __, __, __, /**/ __, __, __, __, __, __, p(FR_GRV)],
        [__, p(FR_7), p(FR_5), p(FR_3), p(FR_1), p(FR_9), __,
            /**/ __, p(FR_0), p(FR_2), p(FR_4), p(FR_6), p(FR_8), p(FR_QUES)],
        [__, __, __, __, __, __, __, /**/ __, __, __, __, __, __, p(FR_UNDS)],
        [__, __, __, __, __, __, __, /**/ __, __, __, __, __, __, __],
        [__, p(FR_COLN), __, __, __, __, __, /**/ __, __, __, __, p(FR_LESS), p(FR_GRTR), __],
        [__, __, __, __, __, __, __, /**/ __, __, __, __, __, __, __],
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_steno_keys() {
        // Backspace and return are reached through plain keys on this board
        let unmapped: Vec<ChordKey> = ChordKey::all()
            .filter(|&key| ERGODOX_STENO.position_of(key).is_none())
            .collect();
        assert_eq!(unmapped, vec![S_BSPC, S_RET]);
    }

    #[test]
    fn test_shifted_layer_has_no_steno_keys() {
        for pos in ERGODOX_STENO.positions() {
            assert!(!ERGODOX_STENO.cell(KeymapLayer::Shifted, pos).is_steno());
        }
    }

    #[test]
    fn test_out_of_bounds_is_empty() {
        assert_eq!(ERGODOX_STENO.cell(KeymapLayer::Base, MatrixPos::new(6, 0)), Cell::Empty);
        assert_eq!(ERGODOX_STENO.cell(KeymapLayer::Base, MatrixPos::new(0, 14)), Cell::Empty);
    }

    #[test]
    fn test_case_control_on_both_halves() {
        assert_eq!(ERGODOX_STENO.cell(KeymapLayer::Base, MatrixPos::new(3, 0)), Cell::Steno(C_IUP));
        assert_eq!(ERGODOX_STENO.cell(KeymapLayer::Base, MatrixPos::new(3, 13)), Cell::Steno(C_IUP));
    }
}
