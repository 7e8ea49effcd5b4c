//! Compile-time chord encoding
//!
//! Chord outputs are written as byte strings (`b"st"`, `b" "`, `b"\x08"`)
//! and turned into HID codes for the host keyboard layout here. The encoder
//! is a `const fn` so built-in tables are checked while compiling: an
//! unsupported character or an over-long output is a build error.

use std::fmt;
use std::str::FromStr;
use crate::types::KeyCode;

/// Maximum number of key codes a single family can emit for one chord
pub const ENCODE_SIZE: usize = 5;

/// A sentinel-terminated sequence of HID codes
pub type Encoding = [u8; ENCODE_SIZE];

/// Empty encoding: the chord emits nothing
pub const NO_ENTRY: Encoding = [0; ENCODE_SIZE];

/// Host keyboard layout the output codes are aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Qwerty,
    Azerty,
}

impl Locale {
    pub const fn tag(self) -> u8 {
        match self {
            Locale::Qwerty => 0,
            Locale::Azerty => 1,
        }
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Locale::Qwerty),
            1 => Some(Locale::Azerty),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Locale::Qwerty => "qwerty",
            Locale::Azerty => "azerty",
        }
    }

    /// Key that produces a lower-case letter on this layout
    pub const fn letter(self, ch: u8) -> Option<KeyCode> {
        if !ch.is_ascii_lowercase() {
            return None;
        }
        if let Locale::Azerty = self {
            match ch {
                b'a' => return Some(KeyCode::Q),
                b'q' => return Some(KeyCode::A),
                b'w' => return Some(KeyCode::Z),
                b'z' => return Some(KeyCode::W),
                b'm' => return Some(KeyCode::SEMICOLON),
                _ => {}
            }
        }
        Some(KeyCode(KeyCode::A.raw() + (ch - b'a')))
    }

    /// Key for an output character: letters, space, backspace (`\x08`),
    /// tab and enter (`\n`)
    pub const fn key_for(self, ch: u8) -> Option<KeyCode> {
        match ch {
            b' ' => Some(KeyCode::SPACE),
            0x08 => Some(KeyCode::BACKSPACE),
            b'\t' => Some(KeyCode::TAB),
            b'\n' => Some(KeyCode::ENTER),
            _ => self.letter(ch),
        }
    }

    /// Character typed by a key on this layout, if it is one the encoder
    /// produces
    pub fn char_for(self, code: KeyCode) -> Option<char> {
        match code {
            KeyCode::SPACE => return Some(' '),
            KeyCode::BACKSPACE => return Some('\u{8}'),
            KeyCode::TAB => return Some('\t'),
            KeyCode::ENTER => return Some('\n'),
            _ => {}
        }
        (b'a'..=b'z')
            .find(|&ch| self.letter(ch) == Some(code))
            .map(char::from)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "qwerty" => Ok(Locale::Qwerty),
            "azerty" => Ok(Locale::Azerty),
            other => Err(other.to_string()),
        }
    }
}

/// Encodes a chord output at compile time
pub const fn encode(text: &[u8], locale: Locale) -> Encoding {
    if text.len() > ENCODE_SIZE {
        panic!("chord output longer than ENCODE_SIZE");
    }
    let mut out = NO_ENTRY;
    let mut i = 0;
    while i < text.len() {
        out[i] = match locale.key_for(text[i]) {
            Some(code) => code.raw(),
            None => panic!("unsupported character in chord output"),
        };
        i += 1;
    }
    out
}

/// Iterates the codes of an encoding up to the first zero byte
pub fn codes(encoding: &Encoding) -> impl Iterator<Item = KeyCode> + '_ {
    encoding.iter().take_while(|&&b| b != 0).map(|&b| KeyCode(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_qwerty() {
        let enc = encode(b"st", Locale::Qwerty);
        assert_eq!(enc, [KeyCode::S.raw(), KeyCode::T.raw(), 0, 0, 0]);
    }

    #[test]
    fn test_encode_azerty_swaps() {
        let enc = encode(b"aqwzm", Locale::Azerty);
        assert_eq!(
            enc,
            [
                KeyCode::Q.raw(),
                KeyCode::A.raw(),
                KeyCode::Z.raw(),
                KeyCode::W.raw(),
                KeyCode::SEMICOLON.raw(),
            ]
        );
    }

    #[test]
    fn test_encode_controls() {
        let enc = encode(b" \x08\t\n", Locale::Qwerty);
        assert_eq!(
            enc,
            [
                KeyCode::SPACE.raw(),
                KeyCode::BACKSPACE.raw(),
                KeyCode::TAB.raw(),
                KeyCode::ENTER.raw(),
                0,
            ]
        );
    }

    #[test]
    fn test_codes_stop_at_sentinel() {
        let enc: Encoding = [KeyCode::A.raw(), 0, KeyCode::B.raw(), 0, 0];
        assert_eq!(codes(&enc).collect::<Vec<_>>(), vec![KeyCode::A]);
    }

    #[test]
    fn test_char_for_round_trip() {
        for locale in [Locale::Qwerty, Locale::Azerty] {
            for ch in b'a'..=b'z' {
                let code = locale.key_for(ch).unwrap();
                assert_eq!(locale.char_for(code), Some(ch as char));
            }
        }
        // The M key types a comma on azerty
        assert_eq!(Locale::Azerty.char_for(KeyCode::M), None);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("AZERTY".parse::<Locale>(), Ok(Locale::Azerty));
        assert!("dvorak".parse::<Locale>().is_err());
    }
}
