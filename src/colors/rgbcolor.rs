//! This file implements RGB, the format every other one in this crate is derived from. Channels are
//! stored as bytes, because that is what every palette source (hexcodes, CSS functions, image pixels)
//! actually gives us; fractional views are computed on demand.

use std::fmt;

use crate::colors::ColorFormatModel;
use crate::consts::MAXIMUM_RGB_VALUE;
use crate::error::ColorError;

/// A color as three 8-bit channels of red, green, and blue light.
/// # Example
/// ```
/// # use hueorder::colors::RGBColor;
/// let orange = RGBColor::from_hex_code("#d46804").unwrap();
/// assert_eq!(orange, RGBColor { r: 212, g: 104, b: 4 });
/// assert_eq!(orange.hex_code(), "#d46804");
/// assert!((orange.red_percentage() - 212.0 / 255.0).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// The red channel as a fraction of 255.
    pub fn red_percentage(&self) -> f64 {
        f64::from(self.r) / MAXIMUM_RGB_VALUE
    }

    /// The green channel as a fraction of 255.
    pub fn green_percentage(&self) -> f64 {
        f64::from(self.g) / MAXIMUM_RGB_VALUE
    }

    /// The blue channel as a fraction of 255.
    pub fn blue_percentage(&self) -> f64 {
        f64::from(self.b) / MAXIMUM_RGB_VALUE
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    pub fn hex_code(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses a hexcode of the form `#rgb` or `#rrggbb`, in any case. The short form doubles each
    /// digit, so `#abc` is `#aabbcc`.
    /// # Errors
    /// Returns [`ColorError::InvalidHexCode`] if the leading `#` is missing, the length is wrong, or a
    /// digit is not hexadecimal.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, ColorError> {
        let invalid = || ColorError::InvalidHexCode(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| vec![c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        let full_num = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(RGBColor {
            r: (full_num >> 16) as u8,
            g: (full_num >> 8) as u8,
            b: full_num as u8,
        })
    }
}

impl ColorFormatModel for RGBColor {
    type Key = (u8, u8, u8);

    fn comparison_key(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(channels: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: channels.0,
            g: channels.1,
            b: channels.2,
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_code_parsing() {
        assert_eq!(
            RGBColor::from_hex_code("#6690ce").unwrap(),
            RGBColor { r: 102, g: 144, b: 206 }
        );
        assert_eq!(
            RGBColor::from_hex_code("#6690CE").unwrap(),
            RGBColor { r: 102, g: 144, b: 206 }
        );
        // short form doubles each digit
        assert_eq!(
            RGBColor::from_hex_code("#fa0").unwrap(),
            RGBColor { r: 255, g: 170, b: 0 }
        );
    }

    #[test]
    fn test_hex_code_errors() {
        for bad in ["6690ce", "#6690c", "#6690cg", "#", "#6690ce00", "#+12"].iter() {
            assert_eq!(
                RGBColor::from_hex_code(bad),
                Err(ColorError::InvalidHexCode(bad.to_string())),
                "{} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_hex_code_output() {
        assert_eq!(RGBColor { r: 0, g: 0, b: 0 }.hex_code(), "#000000");
        assert_eq!(RGBColor { r: 212, g: 104, b: 4 }.hex_code(), "#d46804");
        assert_eq!(RGBColor::from((255, 255, 255)).hex_code(), "#ffffff");
    }

    #[test]
    fn test_percentages() {
        let rgb = RGBColor { r: 255, g: 0, b: 51 };
        assert_eq!(rgb.red_percentage(), 1.0);
        assert_eq!(rgb.green_percentage(), 0.0);
        assert!((rgb.blue_percentage() - 0.2).abs() <= 1e-10);
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor { r: 235, g: 61, b: 52 }.to_string(), "RGB(235, 61, 52)");
    }
}
