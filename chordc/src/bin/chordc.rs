use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use chordc::convert_chords_to_image;

#[derive(Parser, Debug)]
#[command(author, version, about = "Steno chord table to layout image compiler", long_about = None)]
struct Args {
    /// Input chord table path
    input: PathBuf,

    /// Output image path (defaults to input with .stn extension)
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    // Determine output path
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("stn");
        path
    });

    info!("Converting {} to {}", args.input.display(), output_path.display());

    convert_chords_to_image(&args.input, &output_path)
        .with_context(|| format!("failed to compile {}", args.input.display()))?;

    if args.verbose {
        println!("Wrote {}", output_path.display());
    }
    Ok(())
}
