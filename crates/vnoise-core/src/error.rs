use thiserror::Error;

/// Invalid construction parameters, surfaced before any generation work runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("octave count must be at least 1")]
    ZeroOctaves,

    #[error("field dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("base wavelength must be at least 1")]
    ZeroWavelength,

    #[error("amplitude factor must be a positive finite number (got {0})")]
    NonPositiveAmplitude(f32),
}
