use std::fs;
use std::path::Path;
use pretty_assertions::assert_eq;
use chordc::{compile_chords, compile_chords_file, convert_chords_to_image, layout_to_image};
use chordc::render::render_layout;
use steno_core::{Family, ImageLoader, KeyCode, Layout, Locale, StenoEngine};

const SHELTON: &str = include_str!("../layouts/shelton.chords");
const FIXTURE: &str = include_str!("fixtures/minimal.chords");

#[test]
fn test_shelton_source_matches_builtin() {
    let layout = compile_chords(SHELTON).unwrap();
    assert_eq!(&layout, Layout::builtin(Locale::Qwerty));
}

#[test]
fn test_shelton_source_for_azerty() {
    let source = SHELTON.replace("locale qwerty", "locale azerty");
    let layout = compile_chords(&source).unwrap();
    assert_eq!(&layout, Layout::builtin(Locale::Azerty));
}

#[test]
fn test_rendered_layout_compiles_back() {
    for locale in [Locale::Qwerty, Locale::Azerty] {
        let builtin = Layout::builtin(locale);
        let source = render_layout(builtin);
        let layout = compile_chords(&source).unwrap();
        assert_eq!(&layout, builtin);
    }
}

#[test]
fn test_non_letter_codes_compile_back() {
    let mut layout = Layout::builtin(Locale::Qwerty).clone();
    let minus = [KeyCode::A.raw(), KeyCode::MINUS.raw(), 0, 0, 0];
    layout.table_mut(Family::LeftHand).unwrap().set(1, minus);

    let source = render_layout(&layout);
    assert!(source.contains("left A => \"a\" <0x2D>"));
    assert_eq!(compile_chords(&source).unwrap(), layout);
}

#[test]
fn test_image_runs_in_engine() {
    let layout = compile_chords(FIXTURE).unwrap();
    let image = layout_to_image(&layout).unwrap();
    assert_eq!(ImageLoader::load(&image).unwrap(), layout);

    let mut engine = StenoEngine::from_image(&image).unwrap();
    let mut host = steno_core::Recorder::new();
    for key in [steno_core::L_S, steno_core::T_A] {
        let pos = engine.layout().keymap().position_of(key).unwrap();
        engine.process_event(steno_core::KeyEvent { pos, pressed: true }, &mut host);
    }
    for key in [steno_core::T_A, steno_core::L_S] {
        let pos = engine.layout().keymap().position_of(key).unwrap();
        engine.process_event(steno_core::KeyEvent { pos, pressed: false }, &mut host);
    }
    assert_eq!(host.typed(Locale::Azerty), "so");
}

#[test]
fn test_convert_file() {
    let input_path = Path::new("target/converter_test.chords");
    let output_path = Path::new("target/converter_test.stn");
    fs::create_dir_all("target").unwrap();

    // Write with a BOM, the file reader strips it
    let mut content = "\u{feff}".to_string();
    content.push_str(FIXTURE);
    fs::write(input_path, content).unwrap();

    convert_chords_to_image(input_path, output_path).unwrap();
    let data = fs::read(output_path).unwrap();
    assert_eq!(ImageLoader::load(&data).unwrap(), compile_chords_file(input_path).unwrap());

    let _ = fs::remove_file(input_path);
    let _ = fs::remove_file(output_path);
}

#[test]
fn test_missing_file() {
    let result = compile_chords_file(Path::new("target/does_not_exist.chords"));
    assert!(matches!(result, Err(steno_core::ChordsError::Io(_))));
}
