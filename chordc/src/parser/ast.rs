/// Parsed `.chords` file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChordsFile {
    pub locale: Option<LocaleDecl>,
    pub chords: Vec<ChordDecl>,
}

impl ChordsFile {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDecl {
    pub name: String,
    pub line: usize,
}

/// `family KEY KEY => output`
#[derive(Debug, Clone, PartialEq)]
pub struct ChordDecl {
    pub line: usize,
    pub family: String,
    pub keys: Vec<String>,
    pub output: Vec<OutputElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputElement {
    /// Quoted text, one key per character
    Text(String),
    /// `<name>`: space, bspc, tab or enter
    Key(String),
    /// `<0x2D>`: any HID code
    Code(u8),
}
