//! Deterministic multi-octave 2D value noise for procedural content
//! (terrain heightmaps, textures, masks).
//!
//! The pipeline: per-octave random seed lattices are expanded to full
//! resolution through an interpolation kernel (bilinear or bicubic
//! Catmull-Rom), summed with geometrically decaying amplitudes, and
//! normalized to [0, 1]. The whole field is a pure function of the
//! supplied random stream, so a seeded `StdRng` gives bit-identical
//! output across runs.

pub mod error;
pub mod field;
pub mod noise;

pub use error::ConfigError;
pub use field::ScalarField;
pub use noise::params::{FieldParams, Kernel};
pub use noise::ValueNoiseField;
