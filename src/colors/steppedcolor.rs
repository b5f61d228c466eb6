//! The stepped hue, value and luminosity key used by the alternated step ordering. Hue and value are
//! quantized into a small number of buckets, so that colors which look alike end up in the same
//! bucket before any fine ordering happens. Then every other hue bucket is flipped: in odd buckets
//! both the stepped value and the luminosity are mirrored around the step count. Laid out one bucket
//! after another, the palette snakes back and forth (light to dark, then dark to light) instead of
//! jumping from the darkest color of one hue straight to the lightest of the next.
//!
//! Note that only the value is stepped: the luminosity is mirrored as a raw float, and since it
//! runs up to about 16 while the step count is usually smaller, mirrored luminosities are mostly
//! negative. Luminosities only ever get compared within a bucket, so this doesn't affect the order,
//! but it does mean the luminosity field isn't on a consistent scale across buckets.

use std::fmt;

use num::Integer;

use crate::calculators::{hue, HueData};
use crate::colors::{ColorFormatModel, HSVColor, PerceivedLuminosity, RGBColor};
use crate::consts::{normalize_float, DEFAULT_STEPS, MAXIMUM_HUE_VALUE};

/// A stepped hue bucket, a (possibly mirrored) perceived luminosity, and a (possibly mirrored)
/// stepped value. Only meant to be used as a sort key.
/// # Example
/// ```
/// # use hueorder::colors::{RGBColor, SteppedHueValuePerceivedLuminosity};
/// let orange = RGBColor { r: 212, g: 104, b: 4 };
/// let stepped = SteppedHueValuePerceivedLuminosity::from_rgb(orange, 8);
/// // 28.8 degrees lands in bucket 1, which is odd, so the other two fields are mirrored
/// assert_eq!(stepped.hue, 1);
/// assert_eq!(stepped.value, 8 - 7);
/// assert!((stepped.luminosity - -3.1008107811997228).abs() <= 1e-9);
/// ```
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct SteppedHueValuePerceivedLuminosity {
    /// The hue bucket, between 0 and the step count.
    pub hue: u32,
    /// The perceived luminosity, mirrored around the step count in odd hue buckets.
    pub luminosity: f64,
    /// The value bucket, mirrored around the step count in odd hue buckets.
    pub value: u32,
}

impl SteppedHueValuePerceivedLuminosity {
    /// Computes the stepped key of a color with the given number of buckets.
    pub fn from_rgb(rgb: RGBColor, steps: u32) -> SteppedHueValuePerceivedLuminosity {
        let steps_f = f64::from(steps);
        let stepped_hue = step(hue(&HueData::from(rgb)) / f64::from(MAXIMUM_HUE_VALUE), steps_f);
        let stepped_value = step(HSVColor::from(rgb).v, steps_f);
        let luminosity = PerceivedLuminosity::from(rgb).value;

        if stepped_hue.is_odd() {
            SteppedHueValuePerceivedLuminosity {
                hue: stepped_hue,
                luminosity: steps_f - luminosity,
                value: steps - stepped_value,
            }
        } else {
            SteppedHueValuePerceivedLuminosity {
                hue: stepped_hue,
                luminosity,
                value: stepped_value,
            }
        }
    }
}

/// Quantizes a fraction between 0 and 1 into one of `steps + 1` buckets, rounding half away from
/// zero.
pub(crate) fn step(fraction: f64, steps: f64) -> u32 {
    (fraction * steps).round() as u32
}

impl ColorFormatModel for SteppedHueValuePerceivedLuminosity {
    type Key = (u32, i64, u32);

    fn comparison_key(&self) -> (u32, i64, u32) {
        (self.hue, normalize_float(self.luminosity), self.value)
    }
}

impl From<RGBColor> for SteppedHueValuePerceivedLuminosity {
    /// Uses the default of 8 steps.
    fn from(rgb: RGBColor) -> SteppedHueValuePerceivedLuminosity {
        SteppedHueValuePerceivedLuminosity::from_rgb(rgb, DEFAULT_STEPS)
    }
}

impl fmt::Display for SteppedHueValuePerceivedLuminosity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {:.4}, {})", self.hue, self.luminosity, self.value)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_even_bucket_is_not_mirrored() {
        let red = SteppedHueValuePerceivedLuminosity::from(RGBColor { r: 235, g: 61, b: 52 });
        assert_eq!(red.hue, 0);
        assert_eq!(red.value, 7);
        assert!((red.luminosity - 10.115433752439882).abs() <= 1e-9);

        let cyan = SteppedHueValuePerceivedLuminosity::from(RGBColor { r: 0, g: 255, b: 255 });
        assert_eq!(cyan.hue, 4);
        assert_eq!(cyan.value, 8);
    }

    #[test]
    fn test_odd_bucket_is_mirrored() {
        let blue = SteppedHueValuePerceivedLuminosity::from(RGBColor { r: 22, g: 92, b: 196 });
        assert_eq!(blue.hue, 5);
        assert_eq!(blue.value, 2);
        assert!((blue.luminosity - (8.0 - 9.066531861742945)).abs() <= 1e-9);

        let yellow = SteppedHueValuePerceivedLuminosity::from(RGBColor { r: 255, g: 255, b: 0 });
        assert_eq!(yellow.hue, 1);
        assert_eq!(yellow.value, 0);
    }

    #[test]
    fn test_step_count() {
        // with two steps 216 degrees rounds to bucket 1, and a value of 0.77 to bucket 2
        let blue = SteppedHueValuePerceivedLuminosity::from_rgb(RGBColor { r: 22, g: 92, b: 196 }, 2);
        assert_eq!(blue.hue, 1);
        assert_eq!(blue.value, 0);
        assert!((blue.luminosity - (2.0 - 9.066531861742945)).abs() <= 1e-9);
    }

    #[test]
    fn test_step() {
        assert_eq!(step(0.0, 8.0), 0);
        assert_eq!(step(1.0, 8.0), 8);
        assert_eq!(step(0.5 / 8.0, 8.0), 1);
        assert_eq!(step(0.43, 8.0), 3);
        // exact halves round away from zero
        assert_eq!(step(2.5 / 8.0, 8.0), 3);
    }

    #[test]
    fn test_exact_half_hue_bucket() {
        // 112.5 degrees is bucket 2.5 with 8 steps, which rounds up into the odd bucket 3; rounding
        // half to even would leave it unmirrored in bucket 2
        let green = SteppedHueValuePerceivedLuminosity::from(RGBColor { r: 1, g: 8, b: 0 });
        assert_eq!(green.hue, 3);
        assert_eq!(green.value, 8);
        assert!((green.luminosity - (8.0 - 2.401874268149771)).abs() <= 1e-9);
    }
}
