//! Static tables: chord encodings, keymap and special shift symbols

pub mod encode;
pub mod encoding;
pub mod french;
pub mod keymap;
pub mod layout;
pub mod shelton;
pub mod special_shift;

pub use encode::{Encoding, Locale, ENCODE_SIZE, NO_ENTRY};
pub use encoding::{chord, ChordEntry, EncodingTable, TABLE_SIZE};
pub use keymap::{Keymap, KeymapLayer, MatrixPos, MATRIX_COLS, MATRIX_ROWS};
pub use layout::Layout;
pub use special_shift::{SpecialShiftTable, SPECIAL_SHIFT_TABLE_SIZE};
