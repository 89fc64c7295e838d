//! Multi-octave value-noise synthesis pipeline.
//!
//! Construction runs once: validate parameters, accumulate the octave
//! stack, normalize to [0, 1], freeze. All queries afterwards are
//! read-only and every export is a defensive copy.

pub mod fractal;
pub mod interp;
pub mod lattice;
pub mod normalize;
pub mod octave;
pub mod params;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::ScalarField;

use self::params::FieldParams;

/// An immutable, normalized 2D value-noise field. Every cell is in [0, 1];
/// the observed minimum and maximum map to exactly 0 and 1 unless the
/// accumulated field was constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueNoiseField {
    field: ScalarField,
}

impl ValueNoiseField {
    /// Build a field from `params`, consuming entropy from `rng`.
    ///
    /// The result is a pure function of the parameters and the stream, so
    /// callers needing reproducibility pass a seeded rng (or use
    /// [`ValueNoiseField::from_seed`]).
    pub fn generate<R: Rng>(params: &FieldParams, rng: &mut R) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut field = fractal::accumulate(
            params.width,
            params.height,
            params.kernel,
            params.base_wavelength,
            params.octaves,
            params.amplitude_factor,
            rng,
        )?;
        normalize::normalize(&mut field);
        Ok(Self { field })
    }

    /// Deterministic construction from a `u64` seed.
    pub fn from_seed(params: &FieldParams, seed: u64) -> Result<Self, ConfigError> {
        Self::generate(params, &mut StdRng::seed_from_u64(seed))
    }

    pub fn width(&self) -> usize {
        self.field.width
    }

    pub fn height(&self) -> usize {
        self.field.height
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn value(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.field.width || y >= self.field.height {
            return None;
        }
        Some(self.field.get(x, y))
    }

    /// Defensive row-major copy of the full grid.
    pub fn to_vec(&self) -> Vec<f32> {
        self.field.data.clone()
    }

    /// Copy with every value above `threshold` replaced by `threshold`.
    pub fn clamped_top(&self, threshold: f32) -> Vec<f32> {
        self.field.data.iter().map(|&v| v.min(threshold)).collect()
    }

    /// Copy with every value below `threshold` raised to `threshold`.
    pub fn clamped_bottom(&self, threshold: f32) -> Vec<f32> {
        self.field.data.iter().map(|&v| v.max(threshold)).collect()
    }

    /// Copy discretized into `levels` equal-width buckets over [0, 1]:
    /// each value becomes the lower edge of its bucket. `levels` of 0 or 1
    /// collapses everything to 0.
    pub fn quantized(&self, levels: u32) -> Vec<f32> {
        if levels <= 1 {
            return vec![0.0; self.field.data.len()];
        }
        let n = levels as f32;
        self.field
            .data
            .iter()
            .map(|&v| (v * n).floor().min(n - 1.0) / n)
            .collect()
    }
}
