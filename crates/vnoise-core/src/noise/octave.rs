//! Single-octave synthesis: fill a padded seed lattice, then evaluate
//! every output cell through the selected interpolation kernel.

use rand::Rng;

use crate::field::ScalarField;

use super::interp;
use super::lattice::Lattice;
use super::params::Kernel;

/// Synthesize one octave of value noise at the given lattice spacing and
/// amplitude.
///
/// The lattice is sized `ceil(dim / spacing) + margin` per axis, where the
/// margin (2 for `Linear`, 4 for `Cubic`) guarantees that neighbor indexing
/// below never leaves the lattice for any in-range output cell. Spacing 0
/// is treated as spacing 1 (it arises only when a deep octave stack halves
/// the base wavelength down to nothing).
pub fn synthesize<R: Rng>(
    width: usize,
    height: usize,
    spacing: usize,
    amplitude: f32,
    kernel: Kernel,
    rng: &mut R,
) -> ScalarField {
    let spacing = spacing.max(1);
    let lattice_w = width.div_ceil(spacing) + kernel.lattice_margin();
    let lattice_h = height.div_ceil(spacing) + kernel.lattice_margin();
    let lattice = Lattice::generate(lattice_w, lattice_h, amplitude, rng);

    let inv = 1.0 / (spacing + 1) as f32;
    let lead = kernel.lead_offset();

    let mut field = ScalarField::zeros(width, height);
    for y in 0..height {
        let qy = y / spacing + lead;
        let wy = (y % spacing) as f32 * inv;
        for x in 0..width {
            let qx = x / spacing + lead;
            let wx = (x % spacing) as f32 * inv;
            let v = match kernel {
                Kernel::Linear => interp::bilinear(
                    lattice.get(qx, qy),
                    lattice.get(qx + 1, qy),
                    lattice.get(qx, qy + 1),
                    lattice.get(qx + 1, qy + 1),
                    wx,
                    wy,
                ),
                Kernel::Cubic => {
                    let mut knots = [[0.0f32; 4]; 4];
                    for (j, row) in knots.iter_mut().enumerate() {
                        for (i, knot) in row.iter_mut().enumerate() {
                            *knot = lattice.get(qx + i - 1, qy + j - 1);
                        }
                    }
                    interp::bicubic(&knots, wx, wy)
                }
            };
            field.set(x, y, v);
        }
    }
    field
}
