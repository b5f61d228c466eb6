//! This file defines [`Color`], the unit a palette is made of. A `Color` carries the same color in
//! every representation the sorting strategies care about (RGB, HSL and a hexcode), along with a
//! free-text description and a note of which representation it was originally given in. The
//! factories here take one representation and compute the rest with the converters in
//! [`colors`](crate::colors), so the representations always agree with each other.
//!
//! Two colors are the same color if their RGB and HSL values are the same: the hexcode follows from
//! the RGB value, and the description and original format are labels, not color. Equality, hashing
//! and ordering all look at `(rgb, hsl)` and nothing else, which is what lets a palette be
//! deduplicated and what gives the sorting strategies a canonical order to fall back on.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::colors::{HSLColor, RGBColor};
use crate::error::ColorError;

/// The representation a [`Color`] was first given in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginalFormat {
    /// Red, green and blue channels.
    RGB,
    /// A `#rrggbb` or `#rgb` hexcode.
    Hexcode,
    /// Hue, saturation and luminosity.
    HSL,
    /// Whatever the color was read in; used when writing a palette back out in the format it came in.
    SameAsInput,
}

impl fmt::Display for OriginalFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OriginalFormat::RGB => "rgb",
            OriginalFormat::Hexcode => "hexcode",
            OriginalFormat::HSL => "hsl",
            OriginalFormat::SameAsInput => "same as input",
        };
        write!(f, "{}", name)
    }
}

/// A color in a palette.
/// # Example
/// ```
/// # use hueorder::color::{Color, OriginalFormat};
/// # use hueorder::colors::RGBColor;
/// let danube = Color::from_hex_code("#6690CE", "Danube").unwrap();
/// assert_eq!(danube.rgb, RGBColor { r: 102, g: 144, b: 206 });
/// assert_eq!(danube.hsl.h, 216);
/// assert_eq!(danube.hexcode, "#6690ce");
/// assert_eq!(danube.original_format, OriginalFormat::Hexcode);
///
/// // labels don't take part in equality
/// let unnamed = Color::from_rgb(RGBColor { r: 102, g: 144, b: 206 }, "");
/// assert_eq!(danube, unnamed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    /// The RGB channels.
    pub rgb: RGBColor,
    /// The HSL representation. For colors given in HSL this is exactly what was given, not a value
    /// recomputed from `rgb`.
    pub hsl: HSLColor,
    /// The hexcode, as `#rrggbb` in lowercase.
    pub hexcode: String,
    /// The representation the color was first given in.
    pub original_format: OriginalFormat,
    /// A free-text label, such as a color name. Empty if there is none.
    pub description: String,
}

impl Color {
    /// Builds a color out of fully specified parts, trusting that they describe the same color.
    pub fn new(
        rgb: RGBColor,
        hsl: HSLColor,
        hexcode: String,
        original_format: OriginalFormat,
        description: String,
    ) -> Color {
        Color {
            rgb,
            hsl,
            hexcode,
            original_format,
            description,
        }
    }

    /// Builds a color from its RGB channels.
    pub fn from_rgb(rgb: RGBColor, description: &str) -> Color {
        Color::new(
            rgb,
            HSLColor::from(rgb),
            rgb.hex_code(),
            OriginalFormat::RGB,
            description.to_string(),
        )
    }

    /// Builds a color from a hexcode with 3 or 6 hex digits, in any case. The stored hexcode is
    /// always the 6-digit lowercase form.
    /// # Errors
    /// Returns [`ColorError::InvalidHexCode`] if the string isn't a valid hexcode.
    pub fn from_hex_code(hexcode: &str, description: &str) -> Result<Color, ColorError> {
        let rgb = RGBColor::from_hex_code(hexcode)?;
        Ok(Color::new(
            rgb,
            HSLColor::from(rgb),
            rgb.hex_code(),
            OriginalFormat::Hexcode,
            description.to_string(),
        ))
    }

    /// Builds a color from HSL. The HSL value is kept as given.
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] if the hue is 360 or more.
    /// # Example
    /// ```
    /// # use hueorder::color::Color;
    /// # use hueorder::colors::HSLColor;
    /// let dark = Color::from_hsl(HSLColor { h: 102, s: 0.44, l: 0.06 }, "").unwrap();
    /// assert_eq!(dark.hexcode, "#0d1609");
    /// assert!(Color::from_hsl(HSLColor { h: 400, s: 0.44, l: 0.06 }, "").is_err());
    /// ```
    pub fn from_hsl(hsl: HSLColor, description: &str) -> Result<Color, ColorError> {
        let rgb = RGBColor::try_from(hsl)?;
        Ok(Color::new(
            rgb,
            hsl,
            rgb.hex_code(),
            OriginalFormat::HSL,
            description.to_string(),
        ))
    }

    fn identity(&self) -> (&RGBColor, &HSLColor) {
        (&self.rgb, &self.hsl)
    }
}

impl From<RGBColor> for Color {
    fn from(rgb: RGBColor) -> Color {
        Color::from_rgb(rgb, "")
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state)
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Color) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Color {
    fn cmp(&self, other: &Color) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.hexcode)
        } else {
            write!(f, "{} {}", self.hexcode, self.description)
        }
    }
}

/// Drops repeated colors, keeping the first occurrence of each in its original position. Two colors
/// are repeats if they are equal as [`Color`]s, whatever their labels.
/// # Example
/// ```
/// # use hueorder::color::{dedup_colors, Color};
/// # use hueorder::colors::RGBColor;
/// let red = Color::from_rgb(RGBColor { r: 235, g: 61, b: 52 }, "first");
/// let green = Color::from_rgb(RGBColor { r: 75, g: 214, b: 47 }, "");
/// let red_again = Color::from_hex_code("#eb3d34", "second").unwrap();
/// let unique = dedup_colors(vec![red, green, red_again]);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].description, "first");
/// ```
pub fn dedup_colors<I>(colors: I) -> Vec<Color>
where
    I: IntoIterator<Item = Color>,
{
    let mut seen = HashSet::new();
    let mut total = 0;
    let unique: Vec<Color> = colors
        .into_iter()
        .filter(|color| {
            total += 1;
            seen.insert((color.rgb, color.hsl))
        })
        .collect();
    debug!(total, unique = unique.len(), "deduplicated colors");
    unique
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_from_rgb() {
        let red = Color::from_rgb(RGBColor { r: 235, g: 61, b: 52 }, "red");
        assert_eq!(red.hexcode, "#eb3d34");
        assert_eq!(red.hsl.h, 3);
        assert_eq!(red.original_format, OriginalFormat::RGB);
        assert_eq!(red.description, "red");
    }

    #[test]
    fn test_from_hex_code() {
        let short = Color::from_hex_code("#FA0", "").unwrap();
        assert_eq!(short.rgb, RGBColor { r: 255, g: 170, b: 0 });
        assert_eq!(short.hexcode, "#ffaa00");
        match Color::from_hex_code("6690ce", "") {
            Err(ColorError::InvalidHexCode(_)) => {}
            other => panic!("expected an invalid hexcode error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_hsl_keeps_hsl() {
        let hsl = HSLColor { h: 136, s: 0.54, l: 0.43 };
        let green = Color::from_hsl(hsl, "").unwrap();
        assert_eq!(green.rgb, RGBColor { r: 50, g: 169, b: 82 });
        assert_eq!(green.hsl.s, 0.54);
        assert_eq!(green.original_format, OriginalFormat::HSL);
        // recomputing HSL from the channels gives a different saturation, so this isn't the same color
        assert_ne!(green, Color::from_rgb(green.rgb, ""));
    }

    #[test]
    fn test_equality_ignores_labels() {
        let a = Color::from_rgb(RGBColor { r: 1, g: 2, b: 3 }, "a");
        let mut b = a.clone();
        b.description = "b".to_string();
        b.original_format = OriginalFormat::Hexcode;
        assert_eq!(a, b);
        let set: HashSet<Color> = vec![a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_canonical_order() {
        let mut colors: Vec<Color> = vec![(2, 0, 0), (0, 0, 9), (1, 5, 5), (0, 1, 0)]
            .into_iter()
            .map(|channels| Color::from(RGBColor::from(channels)))
            .collect();
        colors.sort();
        let channels: Vec<(u8, u8, u8)> = colors.iter().map(|c| (c.rgb.r, c.rgb.g, c.rgb.b)).collect();
        assert_eq!(channels, vec![(0, 0, 9), (0, 1, 0), (1, 5, 5), (2, 0, 0)]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let colors: Vec<Color> = vec![(3, 3, 3), (1, 1, 1), (3, 3, 3), (2, 2, 2), (1, 1, 1)]
            .into_iter()
            .map(|channels| Color::from(RGBColor::from(channels)))
            .collect();
        let unique = dedup_colors(colors);
        let reds: Vec<u8> = unique.iter().map(|c| c.rgb.r).collect();
        assert_eq!(reds, vec![3, 1, 2]);
        assert!(dedup_colors(vec![]).is_empty());
    }

    #[test]
    fn test_display() {
        let named = Color::from_hex_code("#6690ce", "Danube").unwrap();
        assert_eq!(named.to_string(), "#6690ce Danube");
        assert_eq!(Color::from(RGBColor { r: 0, g: 0, b: 0 }).to_string(), "#000000");
        assert_eq!(OriginalFormat::SameAsInput.to_string(), "same as input");
    }
}
