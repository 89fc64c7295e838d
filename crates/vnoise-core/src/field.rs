use serde::{Deserialize, Serialize};

/// A dense 2D grid of f32 scalar values, row-major.
/// Indexed by `(x, y)` with `0 <= x < width`, `0 <= y < height`.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    /// Row-major values: cell `(x, y)` lives at `data[y * width + x]`.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl ScalarField {
    /// Create a new ScalarField filled with the given value.
    pub fn filled(width: usize, height: usize, fill: f32) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Create an all-zero ScalarField.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: f32) {
        self.data[y * self.width + x] = val;
    }

    /// Cell-wise accumulation of another field of identical dimensions.
    /// Mismatched dimensions indicate a bug in the caller and panic.
    pub fn add_assign(&mut self, other: &ScalarField) {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "cannot accumulate fields of different dimensions"
        );
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}
