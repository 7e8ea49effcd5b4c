use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Invalid magic code: expected 'STNK', got {0:?}")]
    InvalidMagicCode([u8; 4]),

    #[error("Unsupported version: {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },

    #[error("Image too small: {0} bytes")]
    ImageTooSmall(usize),

    #[error("Unknown locale tag: {0}")]
    UnknownLocale(u8),

    #[error("Keymap dimensions {rows}x{cols} do not match the {expected_rows}x{expected_cols} matrix")]
    DimensionMismatch {
        rows: u8,
        cols: u8,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("Unknown or table-less family tag: {0}")]
    InvalidFamily(u8),

    #[error("Table for family tag {family} has {actual} entries, expected {expected}")]
    TableSize { family: u8, expected: usize, actual: usize },

    #[error("Invalid keymap cell {raw:#010X} at {row},{col}")]
    InvalidCell { raw: u32, row: usize, col: usize },

    #[error("Special shift table has {0} entries")]
    SpecialShiftSize(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImageError>;
