//! Ordinary keys on the steno layer

use log::{debug, trace};
use crate::tables::SpecialShiftTable;
use crate::types::ModdedKey;
use super::host::HostOutput;

/// Sends a plain key, or its alternate while case control is held
///
/// On press the chosen pair is sent with its own modifiers and the previous
/// modifiers are restored. On release the base code is released, and so is
/// the alternate code whenever one exists, since the press may have sent
/// either.
pub fn resolve_plain<H: HostOutput>(
    base: ModdedKey,
    shifted: Option<ModdedKey>,
    case_held: bool,
    pressed: bool,
    host: &mut H,
) {
    let alternate = shifted.filter(|alt| !alt.is_none());
    let chosen = match alternate {
        Some(alt) if case_held => alt,
        _ => base,
    };

    if pressed {
        trace!("plain key {} (base {})", chosen, base);
        host.send_mods_and_code(chosen);
    } else {
        host.release_code(base.code);
        if let Some(alt) = alternate {
            host.release_code(alt.code);
        }
    }
}

/// Sends the curated shifted variant of a host-layout symbol
pub fn resolve_special_shift<H: HostOutput>(
    table: &SpecialShiftTable,
    key: ModdedKey,
    pressed: bool,
    host: &mut H,
) {
    let Some(shifted) = table.lookup(key) else {
        debug!("no special shift registered for {}", key);
        return;
    };
    if pressed {
        host.send_mods_and_code(shifted);
    } else {
        host.release_code(shifted.code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::host::{HostEvent, Recorder};
    use crate::tables::french::*;
    use crate::tables::special_shift::FRENCH;
    use crate::types::{KeyCode, Mods};

    #[test]
    fn test_alternate_when_case_held() {
        let mut host = Recorder::new();
        resolve_plain(FR_LBRC, Some(FR_7), true, true, &mut host);
        assert_eq!(host.presses(), vec![FR_7]);
        assert_eq!(host.mods(), Mods::NONE);

        resolve_plain(FR_LBRC, Some(FR_7), true, false, &mut host);
        assert!(host.held().is_empty());
        let releases: Vec<_> = host
            .events()
            .iter()
            .filter(|e| matches!(e, HostEvent::Release(_)))
            .collect();
        assert_eq!(releases, vec![&HostEvent::Release(KeyCode::N5), &HostEvent::Release(KeyCode::N7)]);
    }

    #[test]
    fn test_base_when_case_not_held() {
        let mut host = Recorder::new();
        resolve_plain(FR_LBRC, Some(FR_7), false, true, &mut host);
        assert_eq!(host.presses(), vec![FR_LBRC]);
    }

    #[test]
    fn test_zero_alternate_falls_back() {
        let mut host = Recorder::new();
        let empty_alt = ModdedKey { mods: Mods::LSHIFT, code: KeyCode::NONE };
        resolve_plain(KC_BSPC, Some(empty_alt), true, true, &mut host);
        assert_eq!(host.presses(), vec![KC_BSPC]);
        resolve_plain(KC_BSPC, Some(empty_alt), true, false, &mut host);
        assert_eq!(host.events().last(), Some(&HostEvent::Release(KeyCode::BACKSPACE)));
    }

    #[test]
    fn test_special_shift() {
        let mut host = Recorder::with_mods(Mods::LSHIFT);
        resolve_special_shift(&FRENCH, FR_SCLN, true, &mut host);
        // ':' is unshifted on AZERTY, so shift must be dropped for the press
        assert_eq!(host.presses(), vec![FR_COLN]);
        assert_eq!(host.mods(), Mods::LSHIFT);
        resolve_special_shift(&FRENCH, FR_SCLN, false, &mut host);
        assert!(host.held().is_empty());
    }

    #[test]
    fn test_special_shift_unassigned() {
        let mut host = Recorder::new();
        resolve_special_shift(&FRENCH, KC_BSPC, true, &mut host);
        assert!(host.events().is_empty());
    }
}
