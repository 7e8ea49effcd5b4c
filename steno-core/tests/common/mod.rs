//! Helpers for driving the engine by steno key instead of matrix position

#![allow(dead_code)]

use steno_core::{ChordKey, KeyEvent, Layout, Locale, MatrixPos, Recorder, StenoEngine};

/// Engine on the built-in tables of a locale
pub fn create_engine(locale: Locale) -> StenoEngine {
    StenoEngine::builtin(locale)
}

/// Matrix position of a steno key on the engine's keymap
pub fn pos_of(engine: &StenoEngine, key: ChordKey) -> MatrixPos {
    engine
        .layout()
        .keymap()
        .position_of(key)
        .unwrap_or_else(|| panic!("{} is not on the keymap", key))
}

pub fn press(engine: &mut StenoEngine, host: &mut Recorder, key: ChordKey) {
    let pos = pos_of(engine, key);
    engine.process_event(KeyEvent { pos, pressed: true }, host);
}

pub fn release(engine: &mut StenoEngine, host: &mut Recorder, key: ChordKey) {
    let pos = pos_of(engine, key);
    engine.process_event(KeyEvent { pos, pressed: false }, host);
}

/// Press every key in order, then release them in the same order
pub fn stroke(engine: &mut StenoEngine, host: &mut Recorder, keys: &[ChordKey]) {
    for &key in keys {
        press(engine, host, key);
    }
    for &key in keys {
        release(engine, host, key);
    }
}

/// Text typed by a single stroke on a fresh engine
pub fn type_stroke(locale: Locale, keys: &[ChordKey]) -> String {
    let mut engine = create_engine(locale);
    let mut host = Recorder::new();
    stroke(&mut engine, &mut host, keys);
    host.typed(locale)
}

/// Engine on a copy of the built-in layout changed by `edit`
pub fn engine_with(locale: Locale, edit: impl FnOnce(&mut Layout)) -> StenoEngine {
    let mut layout = Layout::builtin(locale).clone();
    edit(&mut layout);
    StenoEngine::new(layout)
}

/// Every ordering of `keys`
pub fn permutations(keys: &[ChordKey]) -> Vec<Vec<ChordKey>> {
    if keys.len() <= 1 {
        return vec![keys.to_vec()];
    }
    let mut out = Vec::new();
    for (i, &first) in keys.iter().enumerate() {
        let mut rest = keys.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            out.push(tail);
        }
    }
    out
}
