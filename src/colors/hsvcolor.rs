//! This module implements the HSV color space, a cousin of HSL. The hue and saturation are
//! computed exactly the same way; the difference is the third component. *Value* is simply the
//! largest channel, so it runs from black to the fully saturated color instead of from black to
//! white. That makes value a poor analog of lightness (pure blue and white have the same value) but
//! it is a handy axis for grouping colors by intensity, which is all the sorting strategies need it
//! for. There is no conversion back to RGB: nothing in the crate needs one.

use std::fmt;

use crate::calculators::{saturation, HueData, SaturationData};
use crate::colors::hslcolor::rounded_hue;
use crate::colors::{ColorFormatModel, RGBColor};
use crate::consts::normalize_float;

/// A color in the HSV space.
/// # Example
/// ```
/// # use hueorder::colors::{HSVColor, RGBColor};
/// let orange = HSVColor::from(RGBColor { r: 212, g: 104, b: 4 });
/// assert_eq!(orange.h, 29);
/// assert!((orange.v - 212.0 / 255.0).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, in whole degrees between 0 and 360. Exactly the same as the hue of HSL.
    pub h: u16,
    /// The saturation, between 0 and 1.
    pub s: f64,
    /// The value: the largest RGB channel, between 0 and 1.
    pub v: f64,
}

impl ColorFormatModel for HSVColor {
    type Key = (u16, i64, i64);

    fn comparison_key(&self) -> (u16, i64, i64) {
        (self.h, normalize_float(self.s), normalize_float(self.v))
    }
}

impl From<RGBColor> for HSVColor {
    fn from(rgb: RGBColor) -> HSVColor {
        let hue_data = HueData::from(rgb);
        HSVColor {
            h: rounded_hue(&hue_data),
            s: saturation(&SaturationData::from(hue_data)),
            v: hue_data.biggest_value(),
        }
    }
}

impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HSV({}, {:.2}, {:.2})", self.h, self.s, self.v)
    }
}
