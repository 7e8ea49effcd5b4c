use thiserror::Error;

/// Errors raised while compiling a text chord table
#[derive(Error, Debug)]
pub enum ChordsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown key family '{name}' at line {line}")]
    UnknownFamily { line: usize, name: String },

    #[error("Unknown key '{key}' in family '{family}' at line {line}")]
    UnknownKey { line: usize, family: String, key: String },

    #[error("Chord at line {line} produces {len} key codes (max 5)")]
    OutputTooLong { line: usize, len: usize },

    #[error("Unsupported output character {ch:?} at line {line}")]
    UnsupportedChar { line: usize, ch: char },

    #[error("Unknown output key <{name}> at line {line}")]
    UnknownOutputKey { line: usize, name: String },

    #[error("Chord at line {line} is already defined at line {first}")]
    DuplicateChord { line: usize, first: usize },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Binary write error: {0}")]
    BinaryWrite(String),
}
