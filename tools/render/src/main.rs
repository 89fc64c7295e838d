//! Diagnostic renderer — generates one value-noise field and writes it as
//! an 8-bit grayscale PNG. Not part of the library surface.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use image::GrayImage;
use vnoise_core::{FieldParams, Kernel, ValueNoiseField};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum KernelArg {
    Linear,
    Cubic,
}

impl From<KernelArg> for Kernel {
    fn from(k: KernelArg) -> Self {
        match k {
            KernelArg::Linear => Kernel::Linear,
            KernelArg::Cubic => Kernel::Cubic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "render", about = "Value-noise field renderer")]
struct Args {
    /// Seed for deterministic generation.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 256)]
    width: usize,

    #[arg(long, default_value_t = 256)]
    height: usize,

    /// Interpolation kernel.
    #[arg(short, long, value_enum, default_value = "cubic")]
    kernel: KernelArg,

    /// Lattice spacing of the first octave, in output cells.
    #[arg(short = 'w', long, default_value_t = 32)]
    wavelength: usize,

    #[arg(short, long, default_value_t = 4)]
    octaves: u32,

    /// Per-octave amplitude decay.
    #[arg(short, long, default_value_t = 0.5)]
    amplitude_factor: f32,

    /// Read a serialized FieldParams JSON file instead of the flag values.
    #[arg(long)]
    params: Option<String>,

    /// Output PNG path.
    #[arg(long, default_value = "noise.png")]
    out: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read params file {path}"))?;
            serde_json::from_str::<FieldParams>(&text)
                .with_context(|| format!("invalid FieldParams in {path}"))?
        }
        None => FieldParams {
            width: args.width,
            height: args.height,
            kernel: args.kernel.into(),
            base_wavelength: args.wavelength,
            octaves: args.octaves,
            amplitude_factor: args.amplitude_factor,
        },
    };

    println!(
        "Generating {}x{} field ({:?}, wavelength {}, {} octaves, seed {})…",
        params.width, params.height, params.kernel, params.base_wavelength, params.octaves, args.seed
    );
    let field = ValueNoiseField::from_seed(&params, args.seed)
        .context("field construction failed")?;

    let mut img = GrayImage::new(field.width() as u32, field.height() as u32);
    for (x, y, px) in img.enumerate_pixels_mut() {
        // value() is in [0, 1]; in-range lookups on a constructed field
        // cannot miss.
        let v = field.value(x as usize, y as usize).unwrap_or(0.0);
        px.0 = [(v * 255.0).round() as u8];
    }
    img.save(&args.out)
        .with_context(|| format!("cannot write {}", args.out))?;
    println!("Wrote {}", args.out);

    Ok(())
}
