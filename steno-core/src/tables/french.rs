//! Symbols of the French AZERTY host layout, expressed as the US key
//! position plus modifiers that type them

use crate::types::{KeyCode, ModdedKey};

pub const FR_AMP: ModdedKey = ModdedKey::plain(KeyCode::N1);
pub const FR_QUOT: ModdedKey = ModdedKey::plain(KeyCode::N3);
pub const FR_APOS: ModdedKey = ModdedKey::plain(KeyCode::N4);
pub const FR_LPRN: ModdedKey = ModdedKey::plain(KeyCode::N5);
pub const FR_MINS: ModdedKey = ModdedKey::plain(KeyCode::N6);
pub const FR_UNDS: ModdedKey = ModdedKey::plain(KeyCode::N8);
pub const FR_RPRN: ModdedKey = ModdedKey::plain(KeyCode::MINUS);
pub const FR_EQL: ModdedKey = ModdedKey::plain(KeyCode::EQUAL);
pub const FR_DLR: ModdedKey = ModdedKey::plain(KeyCode::RIGHT_BRACKET);
pub const FR_ASTR: ModdedKey = ModdedKey::plain(KeyCode::BACKSLASH);
pub const FR_UGRV: ModdedKey = ModdedKey::plain(KeyCode::QUOTE);
pub const FR_COMM: ModdedKey = ModdedKey::plain(KeyCode::M);
pub const FR_SCLN: ModdedKey = ModdedKey::plain(KeyCode::COMMA);
pub const FR_COLN: ModdedKey = ModdedKey::plain(KeyCode::DOT);
pub const FR_EXLM: ModdedKey = ModdedKey::plain(KeyCode::SLASH);
pub const FR_LESS: ModdedKey = ModdedKey::plain(KeyCode::NON_US_BACKSLASH);

pub const FR_1: ModdedKey = ModdedKey::shifted(KeyCode::N1);
pub const FR_2: ModdedKey = ModdedKey::shifted(KeyCode::N2);
pub const FR_3: ModdedKey = ModdedKey::shifted(KeyCode::N3);
pub const FR_4: ModdedKey = ModdedKey::shifted(KeyCode::N4);
pub const FR_5: ModdedKey = ModdedKey::shifted(KeyCode::N5);
pub const FR_6: ModdedKey = ModdedKey::shifted(KeyCode::N6);
pub const FR_7: ModdedKey = ModdedKey::shifted(KeyCode::N7);
pub const FR_8: ModdedKey = ModdedKey::shifted(KeyCode::N8);
pub const FR_9: ModdedKey = ModdedKey::shifted(KeyCode::N9);
pub const FR_0: ModdedKey = ModdedKey::shifted(KeyCode::N0);
pub const FR_PLUS: ModdedKey = ModdedKey::shifted(KeyCode::EQUAL);
pub const FR_DOT: ModdedKey = ModdedKey::shifted(KeyCode::COMMA);
pub const FR_SLSH: ModdedKey = ModdedKey::shifted(KeyCode::DOT);
pub const FR_QUES: ModdedKey = ModdedKey::shifted(KeyCode::M);
pub const FR_GRTR: ModdedKey = ModdedKey::shifted(KeyCode::NON_US_BACKSLASH);

pub const FR_TILD: ModdedKey = ModdedKey::alt_gr(KeyCode::N2);
pub const FR_HASH: ModdedKey = ModdedKey::alt_gr(KeyCode::N3);
pub const FR_LCBR: ModdedKey = ModdedKey::alt_gr(KeyCode::N4);
pub const FR_LBRC: ModdedKey = ModdedKey::alt_gr(KeyCode::N5);
pub const FR_PIPE: ModdedKey = ModdedKey::alt_gr(KeyCode::N6);
pub const FR_GRV: ModdedKey = ModdedKey::alt_gr(KeyCode::N7);
pub const FR_BSLS: ModdedKey = ModdedKey::alt_gr(KeyCode::N8);
pub const FR_CIRC: ModdedKey = ModdedKey::alt_gr(KeyCode::N9);
pub const FR_AT: ModdedKey = ModdedKey::alt_gr(KeyCode::N0);
pub const FR_RBRC: ModdedKey = ModdedKey::alt_gr(KeyCode::MINUS);
pub const FR_RCBR: ModdedKey = ModdedKey::alt_gr(KeyCode::EQUAL);

pub const KC_BSPC: ModdedKey = ModdedKey::plain(KeyCode::BACKSPACE);
pub const KC_ENT: ModdedKey = ModdedKey::plain(KeyCode::ENTER);
pub const KC_DEL: ModdedKey = ModdedKey::plain(KeyCode::DELETE);
