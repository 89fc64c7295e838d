//! Fractal accumulation: a stack of octaves with halving spacing and
//! geometrically decaying amplitude, summed cell-wise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::field::ScalarField;

use super::octave;
use super::params::Kernel;

/// Per-octave spacing and amplitude, derived from the octave index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveSpec {
    pub spacing: usize,
    pub amplitude: f32,
}

/// `spacing_i = floor(base * 0.5^i)`, clamped to a minimum of 1;
/// `amplitude_i = amplitude_factor^i` (the first octave always has
/// amplitude 1).
///
/// Octave counts beyond `log2(base)` produce degenerate spacing-1 octaves
/// rather than failing.
pub fn octave_specs(base_wavelength: usize, octaves: u32, amplitude_factor: f32) -> Vec<OctaveSpec> {
    (0..octaves)
        .map(|i| OctaveSpec {
            spacing: (base_wavelength >> i).max(1),
            amplitude: amplitude_factor.powi(i as i32),
        })
        .collect()
}

/// Generate and sum all octaves of one field construction.
///
/// One `u64` sub-seed per octave is drawn from `rng` in octave order, and
/// each octave is synthesized from its own `StdRng`. The output is
/// therefore bit-identical whether octaves run serially or on the rayon
/// pool (`threading` feature), and the whole field remains a pure function
/// of the caller's stream.
///
/// Summation happens in fixed octave order so rounding is reproducible.
pub fn accumulate<R: Rng>(
    width: usize,
    height: usize,
    kernel: Kernel,
    base_wavelength: usize,
    octaves: u32,
    amplitude_factor: f32,
    rng: &mut R,
) -> Result<ScalarField, ConfigError> {
    if octaves < 1 {
        return Err(ConfigError::ZeroOctaves);
    }

    let specs = octave_specs(base_wavelength, octaves, amplitude_factor);
    let seeds: Vec<u64> = (0..specs.len()).map(|_| rng.gen()).collect();

    let run = |spec: &OctaveSpec, seed: u64| {
        let mut octave_rng = StdRng::seed_from_u64(seed);
        octave::synthesize(width, height, spec.spacing, spec.amplitude, kernel, &mut octave_rng)
    };

    #[cfg(feature = "threading")]
    let fields: Vec<ScalarField> = {
        use rayon::prelude::*;
        specs
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(spec, &seed)| run(spec, seed))
            .collect()
    };
    #[cfg(not(feature = "threading"))]
    let fields: Vec<ScalarField> = specs
        .iter()
        .zip(seeds.iter())
        .map(|(spec, &seed)| run(spec, seed))
        .collect();

    let mut sum = ScalarField::zeros(width, height);
    for field in &fields {
        sum.add_assign(field);
    }
    Ok(sum)
}
