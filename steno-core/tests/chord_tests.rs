mod common;

use common::*;
use pretty_assertions::assert_eq;
use steno_core::*;

#[test]
fn test_any_press_and_release_order() {
    let keys = [L_S, L_T, T_A, R_R];
    let orders = permutations(&keys);
    assert_eq!(orders.len(), 24);

    for presses in &orders {
        for releases in &orders {
            let mut engine = create_engine(Locale::Qwerty);
            let mut host = Recorder::new();
            for &key in presses {
                press(&mut engine, &mut host, key);
            }
            for (i, &key) in releases.iter().enumerate() {
                release(&mut engine, &mut host, key);
                if i + 1 < releases.len() {
                    assert!(host.events().is_empty(), "resolved early: {:?} / {:?}", presses, releases);
                    assert!(engine.is_chord_in_progress());
                }
            }
            assert_eq!(host.typed(Locale::Qwerty), "star");
            assert!(!engine.is_chord_in_progress());
        }
    }
}

#[test]
fn test_rolled_keys_count_towards_the_stroke() {
    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();

    // S T down, S up, A down, T up, R down, A up, R up
    press(&mut engine, &mut host, L_S);
    press(&mut engine, &mut host, L_T);
    release(&mut engine, &mut host, L_S);
    press(&mut engine, &mut host, T_A);
    release(&mut engine, &mut host, L_T);
    press(&mut engine, &mut host, R_R);
    release(&mut engine, &mut host, T_A);
    assert!(host.events().is_empty());
    release(&mut engine, &mut host, R_R);

    assert_eq!(host.typed(Locale::Qwerty), "star");
}

#[test]
fn test_stroke_ends_when_all_keys_are_up() {
    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();

    press(&mut engine, &mut host, L_S);
    release(&mut engine, &mut host, L_S);
    press(&mut engine, &mut host, T_O);
    release(&mut engine, &mut host, T_O);

    // Two strokes, not one "so" chord
    assert_eq!(host.typed(Locale::Qwerty), "so");
    assert_eq!(host.presses().len(), 2);
}

#[test]
fn test_release_without_press_does_nothing() {
    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();

    release(&mut engine, &mut host, L_A);
    release(&mut engine, &mut host, C_UP);
    assert!(host.events().is_empty());

    stroke(&mut engine, &mut host, &[L_A]);
    release(&mut engine, &mut host, L_A);
    assert_eq!(host.typed(Locale::Qwerty), "a");
}

#[test]
fn test_left_and_thumb_scenario() {
    let layout = Layout::builtin(Locale::Qwerty);
    let mut expected: Vec<KeyCode> = layout.table(Family::LeftHand).unwrap().codes(1 << 0).collect();
    expected.extend(layout.table(Family::Thumbs).unwrap().codes(1 << 0));

    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();
    press(&mut engine, &mut host, L_A);
    press(&mut engine, &mut host, T_A);
    release(&mut engine, &mut host, L_A);
    release(&mut engine, &mut host, T_A);

    let sent: Vec<KeyCode> = host.presses().iter().map(|k| k.code).collect();
    assert_eq!(sent, expected);
    assert!(host.presses().iter().all(|k| k.mods == Mods::NONE));
    assert!(!host.events().iter().any(|e| matches!(e, HostEvent::Mods(_))));
}

#[test]
fn test_every_single_family_chord() {
    let layout = Layout::builtin(Locale::Azerty);
    let mut checked = 0;

    for family in Family::WITH_TABLES {
        let table = layout.table(family).unwrap();
        for (bits, _) in table.defined() {
            let keys: Vec<ChordKey> = (0..family.width() as u8)
                .filter(|slot| bits & (1 << slot) != 0)
                .map(|slot| ChordKey::new(family, slot))
                .collect();
            // Some spacing keys are only reachable as plain keys
            if keys.iter().any(|&k| layout.keymap().position_of(k).is_none()) {
                continue;
            }

            let mut engine = create_engine(Locale::Azerty);
            let mut host = Recorder::new();
            stroke(&mut engine, &mut host, &keys);

            let sent: Vec<KeyCode> = host.presses().iter().map(|k| k.code).collect();
            let expected: Vec<KeyCode> = table.codes(bits).collect();
            assert_eq!(sent, expected, "{} {:?}", family, keys);
            checked += 1;
        }
    }
    assert!(checked > 90);
}

#[test]
fn test_families_resolve_in_stroke_order() {
    // Press right hand first, output still starts with the left hand
    let text = type_stroke(Locale::Qwerty, &[R_T, T_O, L_S, S_SPC]);
    assert_eq!(text, "sot ");
}

#[test]
fn test_undefined_combination_emits_nothing() {
    let mut engine = engine_with(Locale::Qwerty, |layout| {
        layout.table_mut(Family::Thumbs).unwrap().set(1, tables::NO_ENTRY);
    });
    let mut host = Recorder::new();
    stroke(&mut engine, &mut host, &[T_A]);
    assert!(host.events().is_empty());

    stroke(&mut engine, &mut host, &[L_T, T_A]);
    assert_eq!(host.typed(Locale::Qwerty), "t");
}

#[test]
fn test_sentinel_stops_emission() {
    let b = KeyCode::B.raw();
    let mut engine = engine_with(Locale::Qwerty, |layout| {
        layout
            .table_mut(Family::LeftHand)
            .unwrap()
            .set(1, [KeyCode::A.raw(), 0, b, b, b]);
    });
    let mut host = Recorder::new();
    stroke(&mut engine, &mut host, &[L_A]);

    assert_eq!(host.presses(), vec![ModdedKey::plain(KeyCode::A)]);
}

#[test]
fn test_five_code_entry() {
    assert_eq!(type_stroke(Locale::Qwerty, &[R_N, R_G, R_H, R_T, R_S]), "ngths");
    assert_eq!(type_stroke(Locale::Azerty, &[L_S, L_C, L_N, L_H, L_R]), "spl");
}

#[test]
fn test_chord_in_progress_status() {
    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();
    assert!(!engine.is_chord_in_progress());

    press(&mut engine, &mut host, C_IUP);
    assert!(engine.is_chord_in_progress());
    press(&mut engine, &mut host, L_R);
    release(&mut engine, &mut host, C_IUP);
    assert!(engine.is_chord_in_progress());
    release(&mut engine, &mut host, L_R);
    assert!(!engine.is_chord_in_progress());
}

#[test]
fn test_unassigned_position_is_ignored() {
    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();

    press(&mut engine, &mut host, L_A);
    engine.process_event(KeyEvent::press(0, 0), &mut host);
    engine.process_event(KeyEvent::release(0, 0), &mut host);
    engine.process_event(KeyEvent::press(9, 9), &mut host);
    assert!(host.events().is_empty());
    assert!(engine.is_chord_in_progress());

    release(&mut engine, &mut host, L_A);
    assert_eq!(host.typed(Locale::Qwerty), "a");
}

#[test]
fn test_reset_drops_partial_chord() {
    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();

    press(&mut engine, &mut host, L_S);
    press(&mut engine, &mut host, L_T);
    engine.reset();
    assert!(!engine.is_chord_in_progress());

    release(&mut engine, &mut host, L_S);
    release(&mut engine, &mut host, L_T);
    assert!(host.events().is_empty());

    stroke(&mut engine, &mut host, &[L_T]);
    assert_eq!(host.typed(Locale::Qwerty), "t");
}

#[test]
fn test_set_layout_switches_locale() {
    let mut engine = create_engine(Locale::Qwerty);
    let mut host = Recorder::new();
    press(&mut engine, &mut host, L_A);

    engine.set_layout(Layout::builtin(Locale::Azerty).clone());
    assert!(!engine.is_chord_in_progress());
    stroke(&mut engine, &mut host, &[L_A]);

    assert_eq!(host.presses(), vec![ModdedKey::plain(KeyCode::Q)]);
    assert_eq!(host.typed(Locale::Azerty), "a");
}
