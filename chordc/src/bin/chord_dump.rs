use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use steno_core::image::ImageLoader;
use steno_core::tables::{KeymapLayer, MATRIX_COLS, MATRIX_ROWS};
use steno_core::{Cell, Layout};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dump a steno layout image", long_about = None)]
struct Args {
    /// Layout image path
    image: PathBuf,

    /// Also print the keymap grids
    #[arg(short, long)]
    keymap: bool,
}

fn cell_label(cell: Cell) -> String {
    match cell {
        Cell::Empty => ".".to_string(),
        Cell::Steno(key) => key.to_string(),
        Cell::Plain(key) => key.to_string(),
    }
}

fn print_keymap(layout: &Layout) {
    for layer in [KeymapLayer::Base, KeymapLayer::Shifted] {
        println!("\n// keymap {:?}", layer);
        let keymap = layout.keymap();
        for row in 0..MATRIX_ROWS {
            let labels: Vec<String> = (0..MATRIX_COLS)
                .map(|col| {
                    let pos = steno_core::MatrixPos::new(row as u8, col as u8);
                    format!("{:>8}", cell_label(keymap.cell(layer, pos)))
                })
                .collect();
            println!("// {}", labels.join(""));
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = std::fs::read(&args.image)
        .with_context(|| format!("failed to read {}", args.image.display()))?;
    let layout = ImageLoader::load(&data)
        .with_context(|| format!("{} is not a valid layout image", args.image.display()))?;

    println!("// {} ({} bytes)", args.image.display(), data.len());
    print!("{}", chordc::render::render_layout(&layout));

    let unrendered = chordc::render::unrendered_parts(&layout);
    if !unrendered.is_empty() {
        println!(
            "\n// note: {} differ from the built-in {} layout and are not part of the source above",
            unrendered.join(" and "),
            layout.locale()
        );
    }

    let shift: Vec<String> = layout
        .special_shift()
        .raw()
        .iter()
        .filter(|&&raw| raw != 0)
        .map(|&raw| steno_core::ModdedKey::from_quantum(raw).to_string())
        .collect();
    println!("\n// special shift: {}", shift.join(" "));

    if args.keymap {
        print_keymap(&layout);
    }
    Ok(())
}
