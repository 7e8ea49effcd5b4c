//! Output primitive the engine drives, and an in-memory recorder

use crate::tables::Locale;
use crate::types::{KeyCode, ModdedKey, Mods};

/// Key reporting towards the host
///
/// Implementations are expected to be synchronous; the engine never reads
/// anything back except the modifier state.
pub trait HostOutput {
    fn press_code(&mut self, code: KeyCode);
    fn release_code(&mut self, code: KeyCode);
    fn mods(&self) -> Mods;
    fn set_mods(&mut self, mods: Mods);

    fn add_mods(&mut self, mods: Mods) {
        let current = self.mods();
        self.set_mods(current | mods);
    }

    fn del_mods(&mut self, mods: Mods) {
        let current = self.mods();
        self.set_mods(current.without(mods));
    }

    /// Press and release a code
    fn tap_code(&mut self, code: KeyCode) {
        self.press_code(code);
        self.release_code(code);
    }

    /// Presses `key.code` with exactly `key.mods` held, then puts the
    /// previous modifiers back. The code stays pressed.
    fn send_mods_and_code(&mut self, key: ModdedKey) {
        let original = self.mods();
        self.set_mods(key.mods);
        self.press_code(key.code);
        self.set_mods(original);
    }
}

/// One call made on a [`Recorder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Code pressed, with the modifiers active at that moment
    Press(KeyCode, Mods),
    Release(KeyCode),
    Mods(Mods),
}

/// Host that records every call
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    mods: Mods,
    pressed: Vec<KeyCode>,
    events: Vec<HostEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder starting with modifiers already held
    pub fn with_mods(mods: Mods) -> Self {
        Self { mods, ..Self::default() }
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Codes still held
    pub fn held(&self) -> &[KeyCode] {
        &self.pressed
    }

    /// Pressed codes with their modifiers, in order
    pub fn presses(&self) -> Vec<ModdedKey> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Press(code, mods) => Some(ModdedKey { mods: *mods, code: *code }),
                _ => None,
            })
            .collect()
    }

    /// Text the presses type on a host with the given layout
    ///
    /// Shift (either side) upper-cases letters, backspace deletes the last
    /// character. Codes without a character mapping are skipped.
    pub fn typed(&self, locale: Locale) -> String {
        let mut text = String::new();
        for key in self.presses() {
            match locale.char_for(key.code) {
                Some('\u{8}') => {
                    text.pop();
                }
                Some(ch) if key.mods.has_shift() => text.extend(ch.to_uppercase()),
                Some(ch) => text.push(ch),
                None => {}
            }
        }
        text
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl HostOutput for Recorder {
    fn press_code(&mut self, code: KeyCode) {
        if code.is_none() {
            return;
        }
        if !self.pressed.contains(&code) {
            self.pressed.push(code);
        }
        self.events.push(HostEvent::Press(code, self.mods));
    }

    fn release_code(&mut self, code: KeyCode) {
        if code.is_none() {
            return;
        }
        self.pressed.retain(|&c| c != code);
        self.events.push(HostEvent::Release(code));
    }

    fn mods(&self) -> Mods {
        self.mods
    }

    fn set_mods(&mut self, mods: Mods) {
        self.mods = mods;
        self.events.push(HostEvent::Mods(mods));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_mods_and_code_restores() {
        let mut host = Recorder::with_mods(Mods::LCTRL);
        host.send_mods_and_code(ModdedKey::shifted(KeyCode::N7));
        assert_eq!(
            host.events(),
            &[
                HostEvent::Mods(Mods::LSHIFT),
                HostEvent::Press(KeyCode::N7, Mods::LSHIFT),
                HostEvent::Mods(Mods::LCTRL),
            ]
        );
        assert_eq!(host.held(), &[KeyCode::N7]);
    }

    #[test]
    fn test_typed_text() {
        let mut host = Recorder::new();
        host.add_mods(Mods::LSHIFT);
        host.tap_code(KeyCode::H);
        host.del_mods(Mods::LSHIFT);
        host.tap_code(KeyCode::I);
        host.tap_code(KeyCode::X);
        host.tap_code(KeyCode::BACKSPACE);
        host.tap_code(KeyCode::SPACE);
        assert_eq!(host.typed(Locale::Qwerty), "Hi ");
        assert!(host.held().is_empty());
    }

    #[test]
    fn test_none_code_is_ignored() {
        let mut host = Recorder::new();
        host.tap_code(KeyCode::NONE);
        assert!(host.events().is_empty());
    }
}
