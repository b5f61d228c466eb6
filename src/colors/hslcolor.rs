//! This file implements HSL: a cylindrical rearrangement of RGB into hue, saturation and
//! luminosity. HSL is no better than RGB at describing how colors actually look, but it puts the
//! attributes people reach for first (which color, how vivid, how light) on separate axes, which is
//! exactly what sorting a palette wants.
//!
//! The projection used here is hexagonal rather than circular: the RGB cube is tilted onto one of its
//! corners and flattened, the largest channel picks a side of the resulting hexagon, and the hexagon
//! is then stretched into a circle of 360 degrees. Gray has no hue and is given 0.
//!
//! Saturation here is the spread of the channels relative to the largest one, the same figure HSV
//! uses, while the way back to RGB reads it as HSL saturation (chroma relative to how far the
//! lightness is from black or white). The two agree for grays and for colors whose smallest
//! channel is 0 but not in general, so going from RGB to HSL and back changes most colors:
//! `rgb(120, 60, 60)` comes back as `rgb(135, 45, 45)`. Hue is also stored as a whole number of
//! degrees, which loses a little more, as in `rgb(0, 5, 85)` coming back as `rgb(0, 6, 85)`.
//!
//! Conversion back to RGB is the only operation in the core that can fail: a hue outside [0, 360)
//! doesn't belong to any side of the hexagon, and rather than quietly wrapping or clamping it the
//! conversion reports [`ColorError::InvalidColorFormat`].

use std::convert::TryFrom;
use std::fmt;

use tracing::debug;

use crate::calculators::{hue, saturation, HueData, SaturationData};
use crate::colors::{ColorFormatModel, RGBColor};
use crate::consts::{normalize_float, MAXIMUM_HUE_VALUE, MAXIMUM_RGB_VALUE};
use crate::error::ColorError;

/// A color in the HSL space.
/// # Example
/// ```
/// # use hueorder::colors::{HSLColor, RGBColor};
/// let green = HSLColor { h: 136, s: 0.54, l: 0.43 };
/// assert_eq!(green.to_rgb().unwrap(), RGBColor { r: 50, g: 169, b: 82 });
/// // a hue of 361 degrees isn't on the hexagon
/// assert!(HSLColor { h: 361, s: 0.54, l: 0.43 }.to_rgb().is_err());
/// ```
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue, in whole degrees. Valid values run from 0 up to but not including 360.
    pub h: u16,
    /// The saturation, between 0 and 1.
    pub s: f64,
    /// The luminosity, between 0 (black) and 1 (white), with fully saturated colors at 0.5.
    pub l: f64,
}

impl HSLColor {
    /// Converts back to RGB, the same as `RGBColor::try_from`.
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] if the hue is 360 or more.
    pub fn to_rgb(&self) -> Result<RGBColor, ColorError> {
        RGBColor::try_from(*self)
    }

    // chroma: the largest channel minus the smallest one once the color is back in RGB
    fn variable_b(&self) -> f64 {
        (1.0 - (2.0 * self.l - 1.0).abs()) * self.s
    }

    // the middle channel, before the lightness offset is added
    fn variable_a(&self) -> f64 {
        let hue_mod = (f64::from(self.h) / 60.0).rem_euclid(2.0);
        self.variable_b() * (1.0 - (hue_mod - 1.0).abs())
    }

    // what every channel gets on top, to land at the right luminosity
    fn variable_c(&self) -> f64 {
        self.l - self.variable_b() / 2.0
    }
}

impl ColorFormatModel for HSLColor {
    type Key = (u16, i64, i64);

    fn comparison_key(&self) -> (u16, i64, i64) {
        (self.h, normalize_float(self.s), normalize_float(self.l))
    }
}

impl From<RGBColor> for HSLColor {
    fn from(rgb: RGBColor) -> HSLColor {
        let hue_data = HueData::from(rgb);
        HSLColor {
            h: rounded_hue(&hue_data),
            s: saturation(&SaturationData::from(hue_data)),
            // the average of the largest and smallest channels: a double hexcone
            l: (hue_data.biggest_value() + hue_data.smallest_value()) / 2.0,
        }
    }
}

impl TryFrom<HSLColor> for RGBColor {
    type Error = ColorError;

    /// Rebuilds the RGB channels from the chroma `b`, the middle channel `a` and the offset `c`. Which
    /// channel gets which depends on the 60-degree sector the hue falls into.
    fn try_from(hsl: HSLColor) -> Result<RGBColor, ColorError> {
        let c = hsl.variable_c();
        let high = to_channel(hsl.variable_b() + c);
        let middle = to_channel(hsl.variable_a() + c);
        let low = to_channel(c);
        let channels = match hsl.h {
            0..=59 => (high, middle, low),
            60..=119 => (middle, high, low),
            120..=179 => (low, high, middle),
            180..=239 => (low, middle, high),
            240..=299 => (middle, low, high),
            300..=359 => (high, low, middle),
            _ => {
                debug!(hue = hsl.h, "rejecting HSL color with a hue out of range");
                return Err(ColorError::InvalidColorFormat(format!(
                    "hue must be between 0 and {}, got {}",
                    MAXIMUM_HUE_VALUE, hsl.h
                )));
            }
        };
        Ok(RGBColor::from(channels))
    }
}

// rounds to whole degrees; anything that rounds up to 360 is back at 0
pub(crate) fn rounded_hue(hue_data: &HueData) -> u16 {
    (hue(hue_data).round() as u16) % MAXIMUM_HUE_VALUE
}

// scales a 0-1 fraction back to a byte, rounding half away from zero
fn to_channel(fraction: f64) -> u8 {
    (fraction * MAXIMUM_RGB_VALUE).round() as u8
}

impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HSL({}, {:.2}, {:.2})", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_to_hsl() {
        let red: HSLColor = RGBColor { r: 235, g: 61, b: 52 }.into();
        assert_eq!(red.h, 3);
        assert!((red.s - 0.778723404255319).abs() <= 1e-9);
        assert!((red.l - 0.5627450980392157).abs() <= 1e-9);

        let green: HSLColor = RGBColor { r: 50, g: 169, b: 82 }.into();
        assert_eq!(green.h, 136);
        assert!((green.l - 0.4294117647058823).abs() <= 1e-9);
    }

    #[test]
    fn test_hue_wraps_to_zero() {
        // 359.76 degrees rounds up to a full turn
        let hsl = HSLColor::from(RGBColor { r: 255, g: 0, b: 1 });
        assert_eq!(hsl.h, 0);
        assert!(hsl.to_rgb().is_ok());
    }

    #[test]
    fn test_achromatic() {
        let gray = HSLColor::from(RGBColor { r: 128, g: 128, b: 128 });
        assert_eq!(gray.h, 0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 128.0 / 255.0).abs() <= 1e-10);
    }

    #[test]
    fn test_hsl_to_rgb() {
        let hsl = HSLColor { h: 136, s: 0.54, l: 0.43 };
        assert_eq!(RGBColor::try_from(hsl), Ok(RGBColor { r: 50, g: 169, b: 82 }));
        let hsl = HSLColor { h: 102, s: 0.44, l: 0.06 };
        assert_eq!(hsl.to_rgb(), Ok(RGBColor { r: 13, g: 22, b: 9 }));
    }

    #[test]
    fn test_sector_boundaries() {
        let expected = [
            (0, (255, 0, 0)),
            (60, (255, 255, 0)),
            (120, (0, 255, 0)),
            (180, (0, 255, 255)),
            (240, (0, 0, 255)),
            (300, (255, 0, 255)),
            (359, (255, 0, 4)),
        ];
        for &(h, channels) in expected.iter() {
            let hsl = HSLColor { h, s: 1.0, l: 0.5 };
            assert_eq!(hsl.to_rgb(), Ok(RGBColor::from(channels)), "hue {}", h);
        }
    }

    #[test]
    fn test_invalid_hue() {
        for &h in [360, 361, 720].iter() {
            match (HSLColor { h, s: 0.54, l: 0.43 }).to_rgb() {
                Err(ColorError::InvalidColorFormat(_)) => {}
                other => panic!("expected an invalid format error for hue {}, got {:?}", h, other),
            }
        }
    }

    #[test]
    fn test_round_trip() {
        // grays, and colors with a 0 channel, read saturation back the same; these hues are whole
        let samples = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
            (0, 0, 0),
            (255, 255, 255),
            (128, 128, 128),
        ];
        for &channels in samples.iter() {
            let rgb = RGBColor::from(channels);
            let hsl = HSLColor::from(rgb);
            assert_eq!(hsl.to_rgb(), Ok(rgb), "round trip of {}", rgb);
        }
    }

    #[test]
    fn test_round_trip_drifts() {
        // hue is exactly 0, so only the saturation is read back differently
        let hsl = HSLColor::from(RGBColor { r: 120, g: 60, b: 60 });
        assert_eq!(hsl.h, 0);
        assert!((hsl.s - 0.5).abs() <= 1e-9);
        assert_eq!(hsl.to_rgb(), Ok(RGBColor { r: 135, g: 45, b: 45 }));

        // saturation reads back the same with a 0 channel, but 236.47 degrees is stored as 236
        let hsl = HSLColor::from(RGBColor { r: 0, g: 5, b: 85 });
        assert_eq!(hsl.h, 236);
        assert_eq!(hsl.to_rgb(), Ok(RGBColor { r: 0, g: 6, b: 85 }));
    }

    #[test]
    fn test_exact_half_hue_rounds_up() {
        // 112.5 degrees exactly; half to even would give 112
        for &scale in [1u8, 2, 3, 5].iter() {
            let rgb = RGBColor { r: scale, g: 8 * scale, b: 0 };
            assert_eq!(HSLColor::from(rgb).h, 113, "{}", rgb);
        }
    }

    #[test]
    fn test_display() {
        let hsl = HSLColor { h: 28, s: 0.981, l: 0.4235 };
        assert_eq!(hsl.to_string(), "HSL(28, 0.98, 0.42)");
    }
}
