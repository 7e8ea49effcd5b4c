//! Input representation for the steno engine

use crate::tables::MatrixPos;

/// A physical key transition delivered by the matrix scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub pos: MatrixPos,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn new(pos: MatrixPos, pressed: bool) -> Self {
        Self { pos, pressed }
    }

    /// Key going down at `row`, `col`
    pub fn press(row: u8, col: u8) -> Self {
        Self::new(MatrixPos::new(row, col), true)
    }

    /// Key going up at `row`, `col`
    pub fn release(row: u8, col: u8) -> Self {
        Self::new(MatrixPos::new(row, col), false)
    }
}
