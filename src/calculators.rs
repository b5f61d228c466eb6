//! This file holds the two calculations that HSL and HSV have in common: hue and saturation. Both
//! spaces are the same hexagonal projection of the RGB cube, and they only part ways on the third
//! component (luminosity runs black to white, value runs black to full color), so it makes sense to
//! compute the shared part once from the same normalized channel data.
//!
//! Hue is found by projecting the cube onto a hexagon: whichever channel is largest decides which
//! third of the hexagon the color sits in, and the difference between the other two channels decides
//! how far along it is. Gray has no meaningful hue, so it gets 0.

use tracing::trace;

use crate::colors::RGBColor;
use crate::consts::almost_equal;

/// The channels of an RGB color as fractions of 255, which is everything needed to find a hue.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HueData {
    /// Red, between 0 and 1.
    pub red: f64,
    /// Green, between 0 and 1.
    pub green: f64,
    /// Blue, between 0 and 1.
    pub blue: f64,
}

impl HueData {
    /// The largest of the three channels.
    pub fn biggest_value(&self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    /// The smallest of the three channels.
    pub fn smallest_value(&self) -> f64 {
        self.red.min(self.green).min(self.blue)
    }

    /// The difference between the largest and smallest channels, a rough stand-in for chroma.
    pub fn difference_between_biggest_and_smallest(&self) -> f64 {
        self.biggest_value() - self.smallest_value()
    }
}

impl From<RGBColor> for HueData {
    fn from(rgb: RGBColor) -> HueData {
        HueData {
            red: rgb.red_percentage(),
            green: rgb.green_percentage(),
            blue: rgb.blue_percentage(),
        }
    }
}

/// What saturation needs: the largest channel and the spread between largest and smallest.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationData {
    /// The largest channel, between 0 and 1.
    pub biggest_value: f64,
    /// The largest channel minus the smallest one.
    pub difference_between_biggest_and_smallest: f64,
}

impl From<HueData> for SaturationData {
    fn from(data: HueData) -> SaturationData {
        SaturationData {
            biggest_value: data.biggest_value(),
            difference_between_biggest_and_smallest: data.difference_between_biggest_and_smallest(),
        }
    }
}

impl From<RGBColor> for SaturationData {
    fn from(rgb: RGBColor) -> SaturationData {
        SaturationData::from(HueData::from(rgb))
    }
}

/// Computes the hue, in degrees, of the color described by `data`. The result is not rounded and
/// lies in [0, 360).
///
/// Which formula applies is decided by the first channel (checked red, then green, then blue) that is
/// within tolerance of the largest one. Achromatic colors short-circuit to 0, which also avoids a
/// division by zero.
/// # Example
/// ```
/// # use hueorder::calculators::{hue, HueData};
/// let orange = HueData { red: 1.0, green: 0.5, blue: 0.0 };
/// assert!((hue(&orange) - 30.0).abs() <= 1e-10);
/// let gray = HueData { red: 0.5, green: 0.5, blue: 0.5 };
/// assert_eq!(hue(&gray), 0.0);
/// ```
pub fn hue(data: &HueData) -> f64 {
    let diff = data.difference_between_biggest_and_smallest();
    if almost_equal(diff, 0.0) {
        trace!("hue is zero because every channel has the same value");
        return 0.0;
    }
    let max = data.biggest_value();
    let sector = if almost_equal(data.red, max) {
        trace!("red is the biggest channel");
        // rem_euclid keeps the red sector in [0, 6) when blue beats green
        ((data.green - data.blue) / diff).rem_euclid(6.0)
    } else if almost_equal(data.green, max) {
        trace!("green is the biggest channel");
        (data.blue - data.red) / diff + 2.0
    } else {
        trace!("blue is the biggest channel");
        (data.red - data.green) / diff + 4.0
    };
    sector * 60.0
}

/// Computes the saturation shared by HSL and HSV: the spread between the channels relative to the
/// largest one, or 0 for black.
/// # Example
/// ```
/// # use hueorder::calculators::{saturation, SaturationData};
/// let data = SaturationData { biggest_value: 0.8, difference_between_biggest_and_smallest: 0.4 };
/// assert!((saturation(&data) - 0.5).abs() <= 1e-10);
/// ```
pub fn saturation(data: &SaturationData) -> f64 {
    if almost_equal(data.biggest_value, 0.0) {
        0.0
    } else {
        data.difference_between_biggest_and_smallest / data.biggest_value
    }
}
