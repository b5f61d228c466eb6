//! This module orders palettes. A sort is described by three things: a strategy, which decides what
//! "in order" means, a direction, and, for the two stepped strategies, a number of buckets.
//! Strategies are picked by name through [`SortingStrategyName`], which parses the names a user
//! would type (case doesn't matter, and a few common spellings are accepted), and the whole
//! description can be read from a host application's configuration as [`SortOptions`].
//!
//! For one-off sorts, [`sort`] does everything: it deduplicates the colors, sorts them with the named
//! strategy, and applies the direction.
//!
//! # Example
//! ```
//! # use hueorder::color::Color;
//! # use hueorder::sorting::{sort, Direction};
//! let colors: Vec<Color> = ["#eb3d34 red", "#4bd62f green", "#d46804 orange"]
//!     .iter()
//!     .map(|line| line.parse().unwrap())
//!     .collect();
//! let sorted = sort(&colors, "luminosity".parse().unwrap(), Direction::Forward);
//! let names: Vec<&str> = sorted.iter().map(|c| c.description.as_str()).collect();
//! assert_eq!(names, vec!["red", "orange", "green"]);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::consts::DEFAULT_STEPS;
use crate::error::ColorError;

pub mod sorter;
pub mod strategies;

pub use self::sorter::ColorSorter;
use self::strategies::*;

/// Which way a sorted palette runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// In ascending order of the strategy's key.
    Forward,
    /// The forward order, reversed.
    Backward,
}

impl Default for Direction {
    fn default() -> Direction {
        Direction::Forward
    }
}

impl FromStr for Direction {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Direction, ColorError> {
        match s.trim().to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            _ => Err(ColorError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// The names of the sorting strategies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortingStrategyName {
    /// [`RGBSorting`]
    #[serde(rename = "rgb")]
    RGB,
    /// [`HSVSorting`]
    #[serde(rename = "hsv")]
    HSV,
    /// [`HSLSorting`]
    #[serde(rename = "hsl")]
    HSL,
    /// [`LuminositySorting`]
    #[serde(rename = "luminosity")]
    Luminosity,
    /// [`StepSorting`]
    #[serde(rename = "step")]
    Step,
    /// [`AlternatedStepSorting`]
    #[serde(rename = "alternated_step", alias = "alternated-step")]
    AlternatedStep,
    /// [`HilbertSorting`]
    #[serde(rename = "hilbert", alias = "hillbert")]
    Hilbert,
}

lazy_static! {
    static ref STRATEGY_NAMES: HashMap<&'static str, SortingStrategyName> = hashmap! {
        "rgb" => SortingStrategyName::RGB,
        "hsv" => SortingStrategyName::HSV,
        "hsl" => SortingStrategyName::HSL,
        "luminosity" => SortingStrategyName::Luminosity,
        "step" => SortingStrategyName::Step,
        "alternated_step" => SortingStrategyName::AlternatedStep,
        "alternated-step" => SortingStrategyName::AlternatedStep,
        "hilbert" => SortingStrategyName::Hilbert,
        "hillbert" => SortingStrategyName::Hilbert,
    };
}

impl SortingStrategyName {
    /// Every strategy name, in the order they're documented in.
    pub fn all() -> [SortingStrategyName; 7] {
        [
            SortingStrategyName::RGB,
            SortingStrategyName::HSV,
            SortingStrategyName::HSL,
            SortingStrategyName::Luminosity,
            SortingStrategyName::Step,
            SortingStrategyName::AlternatedStep,
            SortingStrategyName::Hilbert,
        ]
    }

    /// Builds the strategy with this name. The stepped strategies use the default of 8 steps.
    pub fn make_strategy(self) -> Box<dyn SortingStrategy + Send + Sync> {
        self.make_strategy_with_steps(DEFAULT_STEPS)
    }

    /// Builds the strategy with this name, giving the stepped strategies `steps` buckets. The other
    /// strategies ignore `steps`.
    pub fn make_strategy_with_steps(self, steps: u32) -> Box<dyn SortingStrategy + Send + Sync> {
        match self {
            SortingStrategyName::RGB => Box::new(RGBSorting),
            SortingStrategyName::HSV => Box::new(HSVSorting),
            SortingStrategyName::HSL => Box::new(HSLSorting),
            SortingStrategyName::Luminosity => Box::new(LuminositySorting),
            SortingStrategyName::Step => Box::new(StepSorting { steps }),
            SortingStrategyName::AlternatedStep => Box::new(AlternatedStepSorting { steps }),
            SortingStrategyName::Hilbert => Box::new(HilbertSorting),
        }
    }
}

impl Default for SortingStrategyName {
    fn default() -> SortingStrategyName {
        SortingStrategyName::Hilbert
    }
}

impl FromStr for SortingStrategyName {
    type Err = ColorError;

    /// Looks a name up regardless of case. Besides the canonical names, `alternated-step` and the
    /// misspelling `hillbert` are accepted.
    fn from_str(s: &str) -> Result<SortingStrategyName, ColorError> {
        STRATEGY_NAMES
            .get(s.trim().to_lowercase().as_str())
            .cloned()
            .ok_or_else(|| ColorError::UnknownSortingStrategy(s.to_string()))
    }
}

impl fmt::Display for SortingStrategyName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SortingStrategyName::RGB => "rgb",
            SortingStrategyName::HSV => "hsv",
            SortingStrategyName::HSL => "hsl",
            SortingStrategyName::Luminosity => "luminosity",
            SortingStrategyName::Step => "step",
            SortingStrategyName::AlternatedStep => "alternated_step",
            SortingStrategyName::Hilbert => "hilbert",
        };
        write!(f, "{}", name)
    }
}

/// A complete description of a sort, meant to be read from configuration. Missing fields take their
/// defaults: the Hilbert strategy, forwards, with 8 steps.
/// # Example
/// ```
/// # use hueorder::sorting::{Direction, SortOptions, SortingStrategyName};
/// let options = SortOptions {
///     strategy: SortingStrategyName::AlternatedStep,
///     direction: Direction::Backward,
///     steps: 6,
/// };
/// let sorter = options.sorter();
/// assert_eq!(sorter.strategy().name(), SortingStrategyName::AlternatedStep);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// The strategy to sort with.
    pub strategy: SortingStrategyName,
    /// The direction of the result.
    pub direction: Direction,
    /// The number of buckets for the stepped strategies.
    pub steps: u32,
}

impl Default for SortOptions {
    fn default() -> SortOptions {
        SortOptions {
            strategy: SortingStrategyName::default(),
            direction: Direction::default(),
            steps: DEFAULT_STEPS,
        }
    }
}

impl SortOptions {
    /// Builds a sorter for these options.
    pub fn sorter(&self) -> ColorSorter {
        ColorSorter::new(self.strategy.make_strategy_with_steps(self.steps))
    }

    /// Deduplicates and sorts the colors according to these options.
    pub fn sort(&self, colors: &[Color]) -> Vec<Color> {
        self.sorter().sort(colors, self.direction)
    }
}

/// Deduplicates the colors and sorts them with the named strategy, in the given direction. The
/// stepped strategies use 8 steps; use [`SortOptions`] to pick another number.
pub fn sort(colors: &[Color], strategy: SortingStrategyName, direction: Direction) -> Vec<Color> {
    ColorSorter::new(strategy.make_strategy()).sort(colors, direction)
}
