//! The error type shared by the whole crate. Only one variant, [`ColorError::InvalidColorFormat`],
//! can come out of the conversion core itself; the rest belong to the text parsing and name
//! lookup that sit on top of it.

use thiserror::Error;

/// Errors that can occur when building, converting or parsing colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ColorError {
    /// A color value lies outside the domain its format allows, such as an HSL hue of 360 degrees
    /// or more. No clamping is attempted.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
    /// A hexcode string is not a `#` followed by exactly 3 or 6 hexadecimal digits.
    #[error("invalid hexcode: {0:?}")]
    InvalidHexCode(String),
    /// A line of text does not describe a color in any supported notation.
    #[error("invalid color syntax: {0:?}")]
    InvalidColorSyntax(String),
    /// No sorting strategy goes by the given name.
    #[error("unknown sorting strategy: {0:?}")]
    UnknownSortingStrategy(String),
    /// No sorting direction goes by the given name.
    #[error("unknown sorting direction: {0:?}")]
    UnknownDirection(String),
}
