//! Stateless interpolation kernels.
//!
//! Both kernels take weights derived from the fractional lattice-cell
//! offset. Weights are expected in [0, 1) but are not clamped here:
//! out-of-range weights extrapolate rather than fail.

/// `a*(1-w) + b*w`.
#[inline]
fn lerp(a: f32, b: f32, w: f32) -> f32 {
    a * (1.0 - w) + b * w
}

/// Bilinear blend of the four corners of a lattice quad: lerp along x
/// between the bottom pair and the top pair, then lerp along y between
/// those two results.
#[inline]
pub fn bilinear(
    bottom_left: f32,
    bottom_right: f32,
    top_left: f32,
    top_right: f32,
    wx: f32,
    wy: f32,
) -> f32 {
    let bottom = lerp(bottom_left, bottom_right, wx);
    let top = lerp(top_left, top_right, wx);
    lerp(bottom, top, wy)
}

/// 1D Catmull-Rom cubic over 4 knots. Passes exactly through `k[1]` at
/// w = 0 and `k[2]` at w = 1; the outer knots shape curvature.
///
/// Coefficients come from the fixed basis matrix
/// ```text
/// [  0     1    0    0  ]
/// [ -0.5   0    0.5  0  ]
/// [  1    -2.5  2   -0.5 ]
/// [ -0.5   1.5 -1.5  0.5 ]
/// ```
/// and the polynomial is evaluated in Horner form.
#[inline]
fn catmull_rom_1d(k: [f32; 4], w: f32) -> f32 {
    let c0 = k[1];
    let c1 = 0.5 * (k[2] - k[0]);
    let c2 = k[0] - 2.5 * k[1] + 2.0 * k[2] - 0.5 * k[3];
    let c3 = -0.5 * k[0] + 1.5 * k[1] - 1.5 * k[2] + 0.5 * k[3];
    ((c3 * w + c2) * w + c1) * w + c0
}

/// Bicubic Catmull-Rom over a 4x4 knot grid: rows ordered bottom-to-top,
/// each row left-to-right. One 1D pass per row with weight `wx`, then one
/// pass over the 4 row results with weight `wy`.
///
/// The 4x4 input-size requirement is enforced by the array types. The
/// result can overshoot the knot value range; per-octave output is not
/// bounded, only the final whole-field normalization is.
pub fn bicubic(knots: &[[f32; 4]; 4], wx: f32, wy: f32) -> f32 {
    let column = [
        catmull_rom_1d(knots[0], wx),
        catmull_rom_1d(knots[1], wx),
        catmull_rom_1d(knots[2], wx),
        catmull_rom_1d(knots[3], wx),
    ];
    catmull_rom_1d(column, wy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bilinear_reproduces_corners() {
        let (bl, br, tl, tr) = (1.0, 2.0, 3.0, 4.0);
        assert_relative_eq!(bilinear(bl, br, tl, tr, 0.0, 0.0), bl);
        assert_relative_eq!(bilinear(bl, br, tl, tr, 1.0, 0.0), br);
        assert_relative_eq!(bilinear(bl, br, tl, tr, 0.0, 1.0), tl);
        assert_relative_eq!(bilinear(bl, br, tl, tr, 1.0, 1.0), tr);
    }

    #[test]
    fn bilinear_center_is_mean_of_corners() {
        assert_relative_eq!(bilinear(0.0, 1.0, 1.0, 2.0, 0.5, 0.5), 1.0);
    }

    #[test]
    fn bilinear_extrapolates_out_of_range_weights() {
        // w = 2 along x on a unit gradient lands one quad past the right edge.
        assert_relative_eq!(bilinear(0.0, 1.0, 0.0, 1.0, 2.0, 0.0), 2.0);
    }

    #[test]
    fn catmull_rom_passes_through_inner_knots() {
        let k = [0.3, 1.7, -0.9, 2.2];
        assert_relative_eq!(catmull_rom_1d(k, 0.0), k[1]);
        assert_relative_eq!(catmull_rom_1d(k, 1.0), k[2], max_relative = 1e-5);
    }

    #[test]
    fn catmull_rom_is_linear_on_linear_knots() {
        // Equally spaced knots on a line: the spline reduces to that line.
        let k = [0.0, 1.0, 2.0, 3.0];
        assert_relative_eq!(catmull_rom_1d(k, 0.25), 1.25, max_relative = 1e-5);
        assert_relative_eq!(catmull_rom_1d(k, 0.75), 1.75, max_relative = 1e-5);
    }

    #[test]
    fn catmull_rom_can_overshoot_knot_range() {
        // A bump between flat shoulders overshoots past the knot maximum:
        // [0, 1, 1, 0] at w = 0.5 evaluates to 1.125.
        let peak = catmull_rom_1d([0.0, 1.0, 1.0, 0.0], 0.5);
        assert!(peak > 1.0, "expected overshoot above the knot maximum, got {peak}");
    }

    #[test]
    fn bicubic_reproduces_center_knots_at_integer_weights() {
        let knots = [
            [0.1, 0.2, 0.3, 0.4],
            [0.5, 0.6, 0.7, 0.8],
            [0.9, 1.0, 1.1, 1.2],
            [1.3, 1.4, 1.5, 1.6],
        ];
        // (wx, wy) = (0, 0) hits knots[1][1]; (1, 1) hits knots[2][2].
        assert_relative_eq!(bicubic(&knots, 0.0, 0.0), knots[1][1], max_relative = 1e-5);
        assert_relative_eq!(bicubic(&knots, 1.0, 1.0), knots[2][2], max_relative = 1e-5);
        assert_relative_eq!(bicubic(&knots, 1.0, 0.0), knots[1][2], max_relative = 1e-5);
        assert_relative_eq!(bicubic(&knots, 0.0, 1.0), knots[2][1], max_relative = 1e-5);
    }
}
