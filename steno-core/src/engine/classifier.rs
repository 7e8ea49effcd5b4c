//! Matrix position classification

use crate::tables::{KeymapLayer, Layout, MatrixPos};
use crate::types::{Cell, ChordKey, ModdedKey};

/// What a matrix position means on the steno layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    /// Contributes to the current chord
    Steno(ChordKey),
    /// Ordinary key, with the alternate sent while case control is held
    Plain {
        base: ModdedKey,
        shifted: Option<ModdedKey>,
    },
    /// Nothing assigned
    Unassigned,
}

/// Looks a position up in the layout's keymap
pub fn classify(layout: &Layout, pos: MatrixPos) -> Classified {
    let keymap = layout.keymap();
    match keymap.cell(KeymapLayer::Base, pos) {
        Cell::Steno(key) => Classified::Steno(key),
        Cell::Plain(base) => {
            // Only a plain cell with a real code counts as an alternate
            let shifted = match keymap.cell(KeymapLayer::Shifted, pos) {
                Cell::Plain(alt) if !alt.is_none() => Some(alt),
                _ => None,
            };
            Classified::Plain { base, shifted }
        }
        Cell::Empty => Classified::Unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::french::*;
    use crate::tables::layout::QWERTY;
    use crate::types::{L_A, T_U};

    #[test]
    fn test_steno_positions() {
        assert_eq!(classify(&QWERTY, MatrixPos::new(2, 1)), Classified::Steno(L_A));
        assert_eq!(classify(&QWERTY, MatrixPos::new(5, 12)), Classified::Steno(T_U));
    }

    #[test]
    fn test_plain_with_alternate() {
        assert_eq!(
            classify(&QWERTY, MatrixPos::new(1, 1)),
            Classified::Plain { base: FR_LBRC, shifted: Some(FR_7) }
        );
    }

    #[test]
    fn test_plain_without_alternate() {
        assert_eq!(
            classify(&QWERTY, MatrixPos::new(2, 5)),
            Classified::Plain { base: KC_BSPC, shifted: None }
        );
    }

    #[test]
    fn test_unassigned() {
        assert_eq!(classify(&QWERTY, MatrixPos::new(0, 0)), Classified::Unassigned);
        assert_eq!(classify(&QWERTY, MatrixPos::new(9, 9)), Classified::Unassigned);
    }
}
