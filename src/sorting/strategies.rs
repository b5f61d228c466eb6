//! The seven sorting strategies. Each one computes a key per color and sorts ascending by it; they
//! differ only in the key. Keys are allowed to tie (two different colors can share an HSV value once
//! it's normalized, or land in the same step buckets), and ties are always broken by the canonical
//! order of [`Color`], so that the result depends only on which colors are given and never on the
//! order they were given in.

use std::cmp::Ordering;

use crate::color::Color;
use crate::colors::steppedcolor::step;
use crate::colors::{HSLColor, HSVColor, PerceivedLuminosity, SteppedHueValuePerceivedLuminosity};
use crate::consts::{DEFAULT_STEPS, MAXIMUM_HUE_VALUE};
use crate::sorting::SortingStrategyName;

/// A way of ordering a palette.
/// # Example
/// ```
/// # use hueorder::color::Color;
/// # use hueorder::colors::RGBColor;
/// # use hueorder::sorting::strategies::{LuminositySorting, SortingStrategy};
/// let colors: Vec<Color> = vec![(255, 255, 255), (0, 0, 0), (128, 128, 128)]
///     .into_iter()
///     .map(|channels| Color::from(RGBColor::from(channels)))
///     .collect();
/// let sorted = LuminositySorting.sort(&colors);
/// assert_eq!(sorted[0].hexcode, "#000000");
/// assert_eq!(sorted[2].hexcode, "#ffffff");
/// ```
pub trait SortingStrategy {
    /// The name this strategy goes by.
    fn name(&self) -> SortingStrategyName;

    /// Returns the colors in ascending order of this strategy's key. The input is left untouched.
    fn sort(&self, colors: &[Color]) -> Vec<Color>;
}

// Sorts by a key, falling back to the canonical color order on ties. The key is computed once per
// color.
fn sort_by_key<K, F>(colors: &[Color], key: F) -> Vec<Color>
where
    K: Ord,
    F: Fn(&Color) -> K,
{
    let mut keyed: Vec<(K, &Color)> = colors.iter().map(|color| (key(color), color)).collect();
    keyed.sort_by(|(key_a, a), (key_b, b)| key_a.cmp(key_b).then_with(|| a.cmp(b)));
    keyed.into_iter().map(|(_, color)| color.clone()).collect()
}

// Orders raw floats without normalizing them away: luminosities that differ past the second decimal
// still sort in the right order.
#[derive(Debug, Copy, Clone)]
struct FloatKey(f64);

impl PartialEq for FloatKey {
    fn eq(&self, other: &FloatKey) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatKey {}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &FloatKey) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &FloatKey) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Sorts by red, then green, then blue.
#[derive(Debug, Copy, Clone, Default)]
pub struct RGBSorting;

impl SortingStrategy for RGBSorting {
    fn name(&self) -> SortingStrategyName {
        SortingStrategyName::RGB
    }

    fn sort(&self, colors: &[Color]) -> Vec<Color> {
        sort_by_key(colors, |color| color.rgb)
    }
}

/// Sorts by HSV hue, then saturation, then value.
#[derive(Debug, Copy, Clone, Default)]
pub struct HSVSorting;

impl SortingStrategy for HSVSorting {
    fn name(&self) -> SortingStrategyName {
        SortingStrategyName::HSV
    }

    fn sort(&self, colors: &[Color]) -> Vec<Color> {
        sort_by_key(colors, |color| HSVColor::from(color.rgb))
    }
}

/// Sorts by HSL hue, then saturation, then luminosity. The HSL value is recomputed from the RGB
/// channels, so colors given in HSL sort the same as their RGB equivalents.
#[derive(Debug, Copy, Clone, Default)]
pub struct HSLSorting;

impl SortingStrategy for HSLSorting {
    fn name(&self) -> SortingStrategyName {
        SortingStrategyName::HSL
    }

    fn sort(&self, colors: &[Color]) -> Vec<Color> {
        sort_by_key(colors, |color| HSLColor::from(color.rgb))
    }
}

/// Sorts from dark to light by perceived luminosity.
#[derive(Debug, Copy, Clone, Default)]
pub struct LuminositySorting;

impl SortingStrategy for LuminositySorting {
    fn name(&self) -> SortingStrategyName {
        SortingStrategyName::Luminosity
    }

    fn sort(&self, colors: &[Color]) -> Vec<Color> {
        sort_by_key(colors, |color| FloatKey(PerceivedLuminosity::from(color.rgb).value))
    }
}

/// Groups colors into hue buckets, then sorts each bucket by perceived luminosity, then by a
/// bucketed value.
/// # Example
/// ```
/// # use hueorder::color::Color;
/// # use hueorder::colors::RGBColor;
/// # use hueorder::sorting::strategies::{SortingStrategy, StepSorting};
/// let colors: Vec<Color> = vec![(75, 214, 47), (235, 61, 52), (212, 104, 4)]
///     .into_iter()
///     .map(|channels| Color::from(RGBColor::from(channels)))
///     .collect();
/// let hues: Vec<u16> = StepSorting::default().sort(&colors).iter().map(|c| c.hsl.h).collect();
/// assert_eq!(hues, vec![3, 29, 110]);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct StepSorting {
    /// The number of buckets the hue and value are divided into.
    pub steps: u32,
}

impl Default for StepSorting {
    fn default() -> StepSorting {
        StepSorting {
            steps: DEFAULT_STEPS,
        }
    }
}

impl SortingStrategy for StepSorting {
    fn name(&self) -> SortingStrategyName {
        SortingStrategyName::Step
    }

    fn sort(&self, colors: &[Color]) -> Vec<Color> {
        let steps = f64::from(self.steps);
        sort_by_key(colors, |color| {
            // the hue bucket comes from the whole-degree hue
            let hsv = HSVColor::from(color.rgb);
            (
                step(f64::from(hsv.h) / f64::from(MAXIMUM_HUE_VALUE), steps),
                FloatKey(PerceivedLuminosity::from(color.rgb).value),
                step(hsv.v, steps),
            )
        })
    }
}

/// Like [`StepSorting`], but every other hue bucket runs backwards, so the palette snakes from light
/// to dark and back instead of jumping at every bucket boundary. See
/// [`SteppedHueValuePerceivedLuminosity`] for the key.
#[derive(Debug, Copy, Clone)]
pub struct AlternatedStepSorting {
    /// The number of buckets the hue and value are divided into.
    pub steps: u32,
}

impl Default for AlternatedStepSorting {
    fn default() -> AlternatedStepSorting {
        AlternatedStepSorting {
            steps: DEFAULT_STEPS,
        }
    }
}

impl SortingStrategy for AlternatedStepSorting {
    fn name(&self) -> SortingStrategyName {
        SortingStrategyName::AlternatedStep
    }

    fn sort(&self, colors: &[Color]) -> Vec<Color> {
        sort_by_key(colors, |color| {
            SteppedHueValuePerceivedLuminosity::from_rgb(color.rgb, self.steps)
        })
    }
}

/// Sorts by position along a Hilbert curve through the RGB cube, which keeps similar colors together
/// better than any of the other strategies.
#[derive(Debug, Copy, Clone, Default)]
pub struct HilbertSorting;

impl SortingStrategy for HilbertSorting {
    fn name(&self) -> SortingStrategyName {
        SortingStrategyName::Hilbert
    }

    fn sort(&self, colors: &[Color]) -> Vec<Color> {
        sort_by_key(colors, |color| color.rgb.hilbert_index())
    }
}
