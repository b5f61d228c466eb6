//! This module contains the color format value types: plain records of numbers that describe a
//! color in one space or another. For convenience, each type is imported into this module's
//! namespace directly.
//!
//! Every type here implements [`ColorFormatModel`], which gives it a total order and a hash built
//! from its numeric fields in declaration order. Floats are normalized to integers first (times 100,
//! truncated) so that two values that differ only in the fourth decimal place compare and hash as
//! equal, and so that floats can be ordered at all.

use std::hash::Hash;

/// A color format whose values can be ordered and hashed through a normalized key.
pub trait ColorFormatModel {
    /// The normalized key: integers only, so it can be totally ordered.
    type Key: Ord + Hash;
    /// Returns the fields of this value, in declaration order, with floats normalized through
    /// [`normalize_float`](crate::consts::normalize_float).
    fn comparison_key(&self) -> Self::Key;
}

// Implements equality, hashing and ordering for a format type by delegating to its comparison key,
// so the derived traits can never disagree with each other.
macro_rules! impl_ordering_from_key {
    ($($format:ty),+ $(,)?) => {
        $(
            impl PartialEq for $format {
                fn eq(&self, other: &$format) -> bool {
                    self.comparison_key() == other.comparison_key()
                }
            }

            impl Eq for $format {}

            impl ::std::hash::Hash for $format {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    self.comparison_key().hash(state)
                }
            }

            impl PartialOrd for $format {
                fn partial_cmp(&self, other: &$format) -> Option<::std::cmp::Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for $format {
                fn cmp(&self, other: &$format) -> ::std::cmp::Ordering {
                    self.comparison_key().cmp(&other.comparison_key())
                }
            }
        )+
    };
}

pub mod hslcolor;
pub mod hsvcolor;
pub mod luminosity;
pub mod rgbcolor;
pub mod steppedcolor;

impl_ordering_from_key!(
    RGBColor,
    HSLColor,
    HSVColor,
    PerceivedLuminosity,
    SteppedHueValuePerceivedLuminosity,
);

// for convenience, use this namespace for the color formats
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::luminosity::PerceivedLuminosity;
pub use self::rgbcolor::RGBColor;
pub use self::steppedcolor::SteppedHueValuePerceivedLuminosity;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_normalized_equality() {
        // only the first two decimals matter
        let hsl1 = HSLColor { h: 2, s: 0.781, l: 0.562 };
        let hsl2 = HSLColor { h: 2, s: 0.789, l: 0.5649 };
        assert_eq!(hsl1, hsl2);
        let mut set = HashSet::new();
        set.insert(hsl1);
        assert!(set.contains(&hsl2));
        assert_ne!(hsl1, HSLColor { h: 3, s: 0.781, l: 0.562 });
    }

    #[test]
    fn test_field_order() {
        // hue decides before saturation, saturation before luminosity
        let a = HSVColor { h: 10, s: 0.9, v: 0.9 };
        let b = HSVColor { h: 11, s: 0.1, v: 0.1 };
        let c = HSVColor { h: 11, s: 0.2, v: 0.0 };
        assert!(a < b);
        assert!(b < c);
        let mut formats = vec![c, a, b];
        formats.sort();
        assert_eq!(formats, vec![a, b, c]);
    }
}
