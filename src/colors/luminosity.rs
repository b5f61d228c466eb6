//! Perceived luminosity: a single number that tries to say how bright a color looks rather than how
//! much light it emits. The eye is far more sensitive to green than to blue, so the channels are
//! weighted before being combined, and the square root compresses the result the way perception
//! does. This is a quick approximation, nowhere near CIE lightness, but it is cheap and good enough
//! to lay a palette out from dark to light.
//!
//! The weights are applied to the raw 0-255 channels, not to fractions of 255, so white comes out
//! near 16 rather than at 1. Only the order matters to a plain luminosity sort, but the stepped key
//! mirrors luminosity around the step count and then truncates it to two decimals, and both of
//! those depend on the scale.

use std::fmt;

use crate::colors::{ColorFormatModel, RGBColor};
use crate::consts::normalize_float;

const RED_FACTOR: f64 = 0.241;
const GREEN_FACTOR: f64 = 0.691;
const BLUE_FACTOR: f64 = 0.068;

/// The perceived luminosity of a color. Unit-less, with no fixed upper bound: for colors converted
/// from RGB it lies between 0 and the square root of 255, about 15.97.
/// # Example
/// ```
/// # use hueorder::colors::{PerceivedLuminosity, RGBColor};
/// let white = PerceivedLuminosity::from(RGBColor { r: 255, g: 255, b: 255 });
/// assert!((white.value - 255f64.sqrt()).abs() <= 1e-10);
/// // green looks much brighter than blue at the same intensity
/// let green = PerceivedLuminosity::from(RGBColor { r: 0, g: 255, b: 0 });
/// let blue = PerceivedLuminosity::from(RGBColor { r: 0, g: 0, b: 255 });
/// assert!(green > blue);
/// ```
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct PerceivedLuminosity {
    /// The weighted channel energy.
    pub value: f64,
}

impl ColorFormatModel for PerceivedLuminosity {
    type Key = i64;

    fn comparison_key(&self) -> i64 {
        normalize_float(self.value)
    }
}

impl From<RGBColor> for PerceivedLuminosity {
    fn from(rgb: RGBColor) -> PerceivedLuminosity {
        let energy = RED_FACTOR * f64::from(rgb.r)
            + GREEN_FACTOR * f64::from(rgb.g)
            + BLUE_FACTOR * f64::from(rgb.b);
        PerceivedLuminosity {
            value: energy.sqrt(),
        }
    }
}

impl fmt::Display for PerceivedLuminosity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.4}", self.value)
    }
}
