//! Apply a named preset filter or an explicit adjustment snapshot to an
//! image file. Stands in for the upload form when exercising the pipeline
//! by hand.

use std::path::PathBuf;

use clap::Parser;
use irome_pipeline::{AdjustmentParams, apply_adjustments, apply_named_filter};

/// Apply a named filter or individual adjustments to an image file.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input image path (PNG, JPEG, BMP, or WebP).
    input: PathBuf,

    /// Output image path. The encoded format follows the source: JPEG for
    /// opaque images, PNG when the source carries alpha.
    #[arg(short, long)]
    output: PathBuf,

    /// Preset filter to apply (grayscale, invert, sepia, blur, special).
    /// Mutually exclusive with the individual adjustment flags.
    #[arg(
        long,
        conflicts_with_all = [
            "brightness", "contrast", "saturation", "blur",
            "hue", "sepia", "invert", "grayscale",
        ]
    )]
    filter: Option<String>,

    /// Brightness in percent (0 to 200; 100 leaves the image unchanged).
    #[arg(long, default_value_t = 100.0)]
    brightness: f32,

    /// Contrast in percent (0 to 200; 100 leaves the image unchanged).
    #[arg(long, default_value_t = 100.0)]
    contrast: f32,

    /// Saturation in percent (0 to 200; 100 leaves the image unchanged).
    #[arg(long, default_value_t = 100.0)]
    saturation: f32,

    /// Gaussian blur kernel radius in pixels (0 to 20).
    #[arg(long, default_value_t = 0.0)]
    blur: f32,

    /// Hue rotation in degrees (-180 to 180).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    hue: f32,

    /// Sepia strength in percent (0 to 100).
    #[arg(long, default_value_t = 0.0)]
    sepia: f32,

    /// Invert strength in percent (0 to 100).
    #[arg(long, default_value_t = 0.0)]
    invert: f32,

    /// Grayscale strength in percent (0 to 100).
    #[arg(long, default_value_t = 0.0)]
    grayscale: f32,
}

/// Collect the eight adjustment flags into one snapshot.
fn params_from_args(args: &Args) -> AdjustmentParams {
    AdjustmentParams {
        brightness: args.brightness,
        contrast: args.contrast,
        saturation: args.saturation,
        blur: args.blur,
        hue: args.hue,
        sepia: args.sepia,
        invert: args.invert,
        grayscale: args.grayscale,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    eprintln!("Reading image from {}", args.input.display());
    let image_bytes = std::fs::read(&args.input)?;

    let encoded = match &args.filter {
        Some(name) => {
            eprintln!("Applying filter {name:?}...");
            apply_named_filter(&image_bytes, name)?
        }
        None => {
            let params = params_from_args(&args);
            eprintln!("Applying adjustment snapshot...");
            apply_adjustments(&image_bytes, &params)?
        }
    };

    eprintln!(
        "Encoded as {} ({} bytes)",
        encoded.format,
        encoded.bytes.len()
    );
    std::fs::write(&args.output, &encoded.bytes)?;
    eprintln!("Saved to {}", args.output.display());
    Ok(())
}
