pub mod lexer;
pub mod parser;
pub mod binary;
pub mod render;

pub use steno_core::{ChordsError, Layout, Locale};

use std::path::Path;
use std::fs::{File, read_to_string};
use std::io::BufWriter;

/// Compiles chord table source text into a layout
pub fn compile_chords(input: &str) -> Result<Layout, ChordsError> {
    let mut parser = parser::Parser::new(input);
    let ast = parser.parse()?;

    let compiler = binary::Compiler::new();
    compiler.compile(ast)
}

pub fn compile_chords_file(input_path: &Path) -> Result<Layout, ChordsError> {
    let input = read_to_string(input_path)?;
    // Editors on Windows like to add a BOM
    compile_chords(input.strip_prefix('\u{feff}').unwrap_or(&input))
}

/// Serializes a layout to image bytes
pub fn layout_to_image(layout: &Layout) -> Result<Vec<u8>, ChordsError> {
    let mut buffer = Vec::new();
    binary::ImageWriter::new(&mut buffer).write_layout(layout)?;
    Ok(buffer)
}

pub fn convert_chords_to_image(input_path: &Path, output_path: &Path) -> Result<(), ChordsError> {
    let layout = compile_chords_file(input_path)?;

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    binary::ImageWriter::new(writer).write_layout(&layout)?;

    Ok(())
}
