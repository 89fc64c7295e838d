use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Interpolation kernel used to expand a seed lattice to full resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kernel {
    /// Bilinear: 4-point weighted blend of the containing lattice quad.
    Linear,
    /// Bicubic Catmull-Rom: 16-point, two passes of 1D cubic interpolation.
    /// Smoother, but may overshoot the lattice value range per-octave.
    Cubic,
}

impl Kernel {
    /// Flat lattice margin added on top of `ceil(dim / spacing)`: the linear
    /// kernel needs point `i + 1`, the cubic kernel a full 4x4 neighborhood
    /// including one point before the quad and two after.
    pub(crate) fn lattice_margin(self) -> usize {
        match self {
            Kernel::Linear => 2,
            Kernel::Cubic => 4,
        }
    }

    /// Quad-index shift compensating for the cubic kernel's extra leading
    /// padding row/column.
    pub(crate) fn lead_offset(self) -> usize {
        match self {
            Kernel::Linear => 0,
            Kernel::Cubic => 1,
        }
    }
}

/// Full parameter vector for one field construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldParams {
    pub width: usize,
    pub height: usize,
    pub kernel: Kernel,
    /// Lattice spacing of the first octave, in output cells.
    pub base_wavelength: usize,
    pub octaves: u32,
    /// Per-octave amplitude decay, typically in (0, 1].
    pub amplitude_factor: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            kernel: Kernel::Cubic,
            base_wavelength: 32,
            octaves: 4,
            amplitude_factor: 0.5,
        }
    }
}

impl FieldParams {
    /// Check parameters before any generation work runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.base_wavelength == 0 {
            return Err(ConfigError::ZeroWavelength);
        }
        if self.octaves < 1 {
            return Err(ConfigError::ZeroOctaves);
        }
        if !(self.amplitude_factor.is_finite() && self.amplitude_factor > 0.0) {
            return Err(ConfigError::NonPositiveAmplitude(self.amplitude_factor));
        }
        Ok(())
    }
}
