//! This file parses a single line of text into a [`Color`]. Three notations are understood, each
//! optionally followed by whitespace and a free-text description that ends up in
//! [`Color::description`]:
//!
//! - a hexcode, `#rgb` or `#rrggbb`, in any case: `#6690ce Danube`
//! - CSS functional RGB with integer channels: `rgb(102, 144, 206)` or `RGB(102,144,206)`
//! - CSS functional HSL with an integer hue and integer percentages: `hsl(102, 44%, 6%)`
//!
//! This is a deliberately small subset of CSS: no floats, no percentages for RGB channels, no alpha,
//! and no clamping. A channel over 255 or a percentage over 100 is an error rather than something to
//! quietly fix, because a palette that says `rgb(300, 0, 0)` is more likely a typo than a request
//! for red. A hue of 360 or more is passed through to the HSL conversion, which rejects it.
//!
//! The entry point is the [`FromStr`] implementation on [`Color`].

use std::str::FromStr;

use regex::{Captures, Regex};

use crate::color::Color;
use crate::colors::{HSLColor, RGBColor};
use crate::error::ColorError;

lazy_static! {
    static ref HEXCODE_LINE: Regex =
        Regex::new(r"^(?P<hexcode>#(?:[0-9A-Fa-f]{3}){1,2})(?:\s+(?P<description>.*))?$")
            .expect("hexcode pattern compiles");
    static ref RGB_LINE: Regex = Regex::new(concat!(
        r"^(?:rgb|RGB)\(\s*(?P<red>[0-9]{1,3})\s*,\s*(?P<green>[0-9]{1,3})\s*,",
        r"\s*(?P<blue>[0-9]{1,3})\s*\)(?:\s+(?P<description>.*))?$"
    ))
    .expect("rgb pattern compiles");
    static ref HSL_LINE: Regex = Regex::new(concat!(
        r"^(?:hsl|HSL)\(\s*(?P<hue>[0-9]{1,3})\s*,\s*(?P<saturation>[0-9]{1,3})\s*%\s*,",
        r"\s*(?P<luminosity>[0-9]{1,3})\s*%\s*\)(?:\s+(?P<description>.*))?$"
    ))
    .expect("hsl pattern compiles");
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses a line in any of the supported notations. Leading and trailing whitespace is ignored.
    /// # Errors
    /// Returns [`ColorError::InvalidColorSyntax`] if the line is in none of the notations or a
    /// component is out of range, and [`ColorError::InvalidColorFormat`] for an HSL hue of 360 or
    /// more.
    /// # Example
    /// ```
    /// # use hueorder::color::{Color, OriginalFormat};
    /// # use hueorder::colors::RGBColor;
    /// let danube: Color = "#6690ce Danube".parse().unwrap();
    /// assert_eq!(danube.rgb, RGBColor { r: 102, g: 144, b: 206 });
    /// assert_eq!(danube.description, "Danube");
    ///
    /// let same: Color = "RGB(102,144,206)".parse().unwrap();
    /// assert_eq!(same.hexcode, "#6690ce");
    /// assert_eq!(same.original_format, OriginalFormat::RGB);
    ///
    /// assert!("hsl(722, 323%, -23%)".parse::<Color>().is_err());
    /// ```
    fn from_str(line: &str) -> Result<Color, ColorError> {
        let line = line.trim();
        if let Some(caps) = HEXCODE_LINE.captures(line) {
            Color::from_hex_code(&caps["hexcode"], description(&caps))
        } else if let Some(caps) = RGB_LINE.captures(line) {
            let rgb = RGBColor {
                r: channel(line, &caps["red"])?,
                g: channel(line, &caps["green"])?,
                b: channel(line, &caps["blue"])?,
            };
            Ok(Color::from_rgb(rgb, description(&caps)))
        } else if let Some(caps) = HSL_LINE.captures(line) {
            let hsl = HSLColor {
                h: number(line, &caps["hue"])?,
                s: percentage(line, &caps["saturation"])?,
                l: percentage(line, &caps["luminosity"])?,
            };
            Color::from_hsl(hsl, description(&caps))
        } else {
            Err(ColorError::InvalidColorSyntax(line.to_string()))
        }
    }
}

fn description<'t>(caps: &Captures<'t>) -> &'t str {
    caps.name("description").map_or("", |m| m.as_str().trim())
}

// the patterns only let through up to three digits, so this can't overflow a u16
fn number(line: &str, digits: &str) -> Result<u16, ColorError> {
    digits
        .parse()
        .map_err(|_| ColorError::InvalidColorSyntax(line.to_string()))
}

fn channel(line: &str, digits: &str) -> Result<u8, ColorError> {
    let value = number(line, digits)?;
    if value > 255 {
        return Err(ColorError::InvalidColorSyntax(line.to_string()));
    }
    Ok(value as u8)
}

// an integer percentage, as a fraction between 0 and 1
fn percentage(line: &str, digits: &str) -> Result<f64, ColorError> {
    let value = number(line, digits)?;
    if value > 100 {
        return Err(ColorError::InvalidColorSyntax(line.to_string()));
    }
    Ok(f64::from(value) / 100.0)
}
