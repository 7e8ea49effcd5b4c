//! Renders layout tables back into `.chords` source

use std::fmt::Write;
use steno_core::tables::encode::codes;
use steno_core::tables::Encoding;
use steno_core::{ChordKey, Family, Layout, Locale};

/// Output items of an encoding: runs of text in quotes, control keys as
/// `<name>`. Codes with no character on the locale render as raw `<0x..>`
/// codes.
pub fn render_output(encoding: &Encoding, locale: Locale) -> String {
    let mut items: Vec<String> = Vec::new();
    let mut text = String::new();

    for code in codes(encoding) {
        let key = match locale.char_for(code) {
            Some('\u{8}') => "<bspc>".to_string(),
            Some('\t') => "<tab>".to_string(),
            Some('\n') => "<enter>".to_string(),
            Some(ch) => {
                text.push(ch);
                continue;
            }
            None => format!("<{:#04X}>", code.raw()),
        };
        if !text.is_empty() {
            items.push(format!("\"{}\"", text));
            text.clear();
        }
        items.push(key);
    }
    if !text.is_empty() {
        items.push(format!("\"{}\"", text));
    }

    items.join(" ")
}

/// `family KEY KEY => output`
pub fn render_chord(family: Family, bits: u8, encoding: &Encoding, locale: Locale) -> String {
    let keys: Vec<&str> = (0..family.width() as u8)
        .filter(|slot| bits & (1 << slot) != 0)
        .filter_map(|slot| ChordKey::try_new(family, slot))
        .map(|key| key.slot_name())
        .collect();
    format!("{} {} => {}", family.keyword(), keys.join(" "), render_output(encoding, locale))
}

/// Parts of a layout that `.chords` source cannot carry
///
/// The compiler takes the keymap and special shift table from the built-in
/// layout of the locale, so these are lost when they differ from it.
pub fn unrendered_parts(layout: &Layout) -> Vec<&'static str> {
    let builtin = Layout::builtin(layout.locale());
    let mut parts = Vec::new();
    if layout.keymap() != builtin.keymap() {
        parts.push("keymap");
    }
    if layout.special_shift() != builtin.special_shift() {
        parts.push("special shift table");
    }
    parts
}

/// Encoding tables of a layout as `.chords` source
pub fn render_layout(layout: &Layout) -> String {
    let mut out = String::new();
    let locale = layout.locale();
    let _ = writeln!(out, "locale {}", locale);
    for table in layout.tables() {
        let _ = writeln!(out, "\n// {}", table.family());
        for (bits, encoding) in table.defined() {
            let _ = writeln!(out, "{}", render_chord(table.family(), bits, encoding, locale));
        }
    }
    out
}
