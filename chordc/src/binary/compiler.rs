use std::collections::HashMap;
use log::debug;
use steno_core::tables::{Encoding, ENCODE_SIZE, NO_ENTRY};
use steno_core::{ChordKey, ChordsError, Family, KeyCode, Layout, Locale};
use crate::parser::ast::*;

/// Turns a parsed chord file into a layout
///
/// The layout starts from the built-in keymap and special shift table of
/// the declared locale, with empty encoding tables.
pub struct Compiler {
    /// First line defining each (family, bits) chord
    defined: HashMap<(Family, u8), usize>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            defined: HashMap::new(),
        }
    }

    pub fn compile(mut self, ast: ChordsFile) -> Result<Layout, ChordsError> {
        let locale = match &ast.locale {
            Some(decl) => decl
                .name
                .parse::<Locale>()
                .map_err(ChordsError::UnknownLocale)?,
            None => Locale::default(),
        };

        let builtin = Layout::builtin(locale);
        let mut layout = Layout::from_parts(
            locale,
            Vec::new(),
            builtin.keymap().clone(),
            *builtin.special_shift(),
        );

        for chord in &ast.chords {
            let (family, bits) = self.compile_keys(chord)?;
            let encoding = Self::compile_output(chord, locale)?;

            if let Some(first) = self.defined.insert((family, bits), chord.line) {
                return Err(ChordsError::DuplicateChord {
                    line: chord.line,
                    first,
                });
            }

            if let Some(table) = layout.table_mut(family) {
                table.set(bits, encoding);
            }
        }

        debug!("compiled {} chords for {}", ast.chords.len(), locale);
        Ok(layout)
    }

    fn compile_keys(&self, chord: &ChordDecl) -> Result<(Family, u8), ChordsError> {
        let family = Family::from_keyword(&chord.family)
            .filter(|f| f.has_table())
            .ok_or_else(|| ChordsError::UnknownFamily {
                line: chord.line,
                name: chord.family.clone(),
            })?;

        let mut bits = 0u8;
        for name in &chord.keys {
            let key = ChordKey::from_slot_name(family, name).ok_or_else(|| ChordsError::UnknownKey {
                line: chord.line,
                family: chord.family.clone(),
                key: name.clone(),
            })?;
            bits |= key.family_bit();
        }

        Ok((family, bits))
    }

    fn compile_output(chord: &ChordDecl, locale: Locale) -> Result<Encoding, ChordsError> {
        let mut codes = Vec::new();
        for element in &chord.output {
            match element {
                OutputElement::Text(text) => {
                    for ch in text.chars() {
                        let code = u8::try_from(ch)
                            .ok()
                            .and_then(|b| locale.key_for(b))
                            .ok_or(ChordsError::UnsupportedChar { line: chord.line, ch })?;
                        codes.push(code);
                    }
                }
                OutputElement::Key(name) => codes.push(Self::output_key(name).ok_or_else(|| {
                    ChordsError::UnknownOutputKey {
                        line: chord.line,
                        name: name.clone(),
                    }
                })?),
                OutputElement::Code(0) => {
                    return Err(ChordsError::UnknownOutputKey {
                        line: chord.line,
                        name: "0x00".to_string(),
                    })
                }
                OutputElement::Code(code) => codes.push(KeyCode(*code)),
            }
        }

        if codes.is_empty() {
            return Err(ChordsError::Parse {
                line: chord.line,
                message: "Chord output is empty".to_string(),
            });
        }
        if codes.len() > ENCODE_SIZE {
            return Err(ChordsError::OutputTooLong {
                line: chord.line,
                len: codes.len(),
            });
        }

        let mut encoding = NO_ENTRY;
        for (slot, code) in encoding.iter_mut().zip(&codes) {
            *slot = code.raw();
        }
        Ok(encoding)
    }

    fn output_key(name: &str) -> Option<KeyCode> {
        match name.to_ascii_lowercase().as_str() {
            "space" => Some(KeyCode::SPACE),
            "bspc" => Some(KeyCode::BACKSPACE),
            "tab" => Some(KeyCode::TAB),
            "enter" => Some(KeyCode::ENTER),
            _ => None,
        }
    }
}
