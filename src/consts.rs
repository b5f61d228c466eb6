//! This file provides the numeric constants shared by every conversion and sorting routine, along
//! with the two helpers that make floating-point data behave: an epsilon comparator used whenever a
//! branch depends on two floats being "the same", and a normalization that turns a float into an
//! integer so that it can be ordered and hashed. The reason for routing every comparison through
//! here instead of using `==` directly is that the divisions upstream of a branch (channel / 255,
//! difference / chroma, and so on) rarely produce bit-identical results for values that are equal
//! on paper.

use float_cmp::approx_eq;

/// The largest value an RGB channel can hold.
pub const MAXIMUM_RGB_VALUE: f64 = 255.0;

/// The exclusive upper bound on hue, in degrees.
pub const MAXIMUM_HUE_VALUE: u16 = 360;

/// The absolute tolerance used when comparing floats for branch selection: seven decimal places.
pub const FLOAT_COMPARISON_TOLERANCE: f64 = 1e-7;

/// The number of buckets used by the stepped sorting strategies when nothing else is asked for.
pub const DEFAULT_STEPS: u32 = 8;

/// The factor applied to a float before truncating it to an integer comparison key: two decimal
/// places survive, everything after them is noise as far as ordering is concerned.
pub const NORMALIZATION_FACTOR: f64 = 100.0;

/// Returns `true` if the two numbers are within [`FLOAT_COMPARISON_TOLERANCE`] of each other.
/// # Example
/// ```
/// # use hueorder::consts::almost_equal;
/// assert!(almost_equal(0.1 + 0.2, 0.3));
/// assert!(!almost_equal(0.5, 0.5001));
/// ```
pub fn almost_equal(first: f64, second: f64) -> bool {
    approx_eq!(f64, first, second, epsilon = FLOAT_COMPARISON_TOLERANCE, ulps = 0)
}

/// Turns a float into an integer suitable for total ordering and hashing, by multiplying by 100 and
/// truncating towards zero. NaN maps to 0.
pub fn normalize_float(value: f64) -> i64 {
    (value * NORMALIZATION_FACTOR) as i64
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_almost_equal() {
        assert!(almost_equal(1.0, 1.0));
        assert!(almost_equal(0.0, 5e-8));
        assert!(almost_equal(61.0 / 255.0 - 52.0 / 255.0, 9.0 / 255.0));
        assert!(!almost_equal(0.0, 1e-6));
        assert!(!almost_equal(-0.5, 0.5));
    }

    #[test]
    fn test_normalize_float() {
        assert_eq!(normalize_float(0.78), 78);
        // truncation, not rounding
        assert_eq!(normalize_float(0.789), 78);
        assert_eq!(normalize_float(7.304840263807282), 730);
        assert_eq!(normalize_float(-0.019), -1);
        assert_eq!(normalize_float(std::f64::NAN), 0);
    }
}
