//! Whole-field range normalization.

use crate::field::ScalarField;

/// Rescale every cell linearly into [0, 1] from the field's observed
/// extremes: `(v - min) / (max - min)`. The cells holding the extremes map
/// to exactly 0 and exactly 1.
///
/// A constant field has no usable range; it maps to all zeros instead of
/// dividing by zero (this fallback is the documented choice, construction
/// never fails here).
pub fn normalize(field: &mut ScalarField) {
    let min = field.min_value();
    let max = field.max_value();
    let range = max - min;
    if range > 0.0 {
        for v in &mut field.data {
            *v = (*v - min) / range;
        }
    } else {
        for v in &mut field.data {
            *v = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_extremes_hit_zero_and_one_exactly() {
        let mut f = ScalarField::filled(4, 1, 5.0);
        f.set(1, 0, 2.0);
        f.set(2, 0, 10.0);
        normalize(&mut f);
        assert_eq!(f.get(1, 0), 0.0);
        assert_eq!(f.get(2, 0), 1.0);
        assert_eq!(f.get(0, 0), 0.375);
        assert!(f.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn constant_field_maps_to_all_zeros() {
        let mut f = ScalarField::filled(3, 3, 42.0);
        normalize(&mut f);
        assert!(f.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn negative_ranges_normalize_too() {
        let mut f = ScalarField::filled(2, 1, -8.0);
        f.set(1, 0, -4.0);
        normalize(&mut f);
        assert_eq!(f.get(0, 0), 0.0);
        assert_eq!(f.get(1, 0), 1.0);
    }
}
