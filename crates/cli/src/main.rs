mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use logo_core::{Emblem, Palette, Variant, build_document};

/// Logo is a simple CLI that programmatically generates the Infrable logo.
/// The output is an SVG file, which can be converted to any other image
/// format.
#[derive(Debug, Parser)]
#[command(name = "logo", version, about = "Generates the Infrable logo.")]
struct Args {
    /// Size of the generated logo
    #[arg(short, long, default_value_t = 500)]
    size: u32,

    /// Whether to invert the colorscheme
    #[arg(short, long)]
    invert: bool,

    /// Shapes to draw: two-tone or extended (with decoration circles)
    #[arg(long, default_value_t = Variant::Extended)]
    variant: Variant,

    /// JSON palette file overriding the built-in colors
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Destination file
    #[arg(short, long, default_value = "logo.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<()> {
    let palette = match &args.palette {
        Some(path) => Palette::load(path)?,
        None => args.variant.default_palette(args.invert),
    };
    let emblem = Emblem::new(f64::from(args.size), args.variant, palette);
    log::info!("generating {} logo of size {}", emblem.variant, args.size);

    let svg = build_document(&emblem);
    let bytes = logo_svg::marshal(&svg).context("failed to encode logo")?;
    output::write_output(&args.output, &bytes)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!("wrote {} bytes to {}", bytes.len(), args.output.display());
    Ok(())
}
