use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use steno_core::{ChordKey, KeyEvent, Layout, Locale, MatrixPos, Recorder, StenoEngine};

#[derive(Parser, Debug)]
#[command(author, version, about = "Feed key events to the steno engine and print what it types", long_about = None)]
struct Args {
    /// Layout image to run instead of the built-in tables
    #[arg(long)]
    image: Option<PathBuf>,

    /// Host locale of the built-in tables
    #[arg(long, default_value = "qwerty")]
    locale: Locale,

    /// Print every host call
    #[arg(short, long)]
    verbose: bool,

    /// Events: `+L_A` / `-L_A` by key name, `+2,5` / `-2,5` by matrix position
    #[arg(required = true, allow_hyphen_values = true)]
    events: Vec<String>,
}

fn parse_event(layout: &Layout, text: &str) -> Result<KeyEvent> {
    let pressed = match text.chars().next() {
        Some('+') => true,
        Some('-') => false,
        _ => bail!("event '{}' must start with '+' or '-'", text),
    };
    let target = &text[1..];

    let pos = if let Some((row, col)) = target.split_once(',') {
        MatrixPos::new(
            row.trim().parse().with_context(|| format!("bad row in '{}'", text))?,
            col.trim().parse().with_context(|| format!("bad column in '{}'", text))?,
        )
    } else {
        let key = ChordKey::from_name(target).ok_or_else(|| anyhow!("unknown steno key '{}'", target))?;
        layout
            .keymap()
            .position_of(key)
            .ok_or_else(|| anyhow!("{} is not on the keymap", key))?
    };

    Ok(KeyEvent { pos, pressed })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut engine = match &args.image {
        Some(path) => {
            let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            StenoEngine::from_image(&data).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => StenoEngine::builtin(args.locale),
    };

    let mut host = Recorder::new();
    for text in &args.events {
        let event = parse_event(engine.layout(), text)?;
        engine.process_event(event, &mut host);
    }

    if args.verbose {
        for event in host.events() {
            println!("{:?}", event);
        }
    }
    println!("{:?}", host.typed(engine.layout().locale()));
    if engine.is_chord_in_progress() {
        eprintln!("warning: chord still in progress");
    }
    Ok(())
}
