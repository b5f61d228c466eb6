//! The sorter ties a strategy to the two things every sort needs on top of it: collapsing repeated
//! colors, and a direction.

use tracing::debug;

use crate::color::{dedup_colors, Color};
use crate::sorting::strategies::SortingStrategy;
use crate::sorting::Direction;

/// Sorts palettes with a fixed strategy.
/// # Example
/// ```
/// # use hueorder::color::Color;
/// # use hueorder::colors::RGBColor;
/// # use hueorder::sorting::{ColorSorter, Direction, SortingStrategyName};
/// let sorter = ColorSorter::new(SortingStrategyName::RGB.make_strategy());
/// let colors: Vec<Color> = vec![(1, 0, 0), (0, 0, 1), (1, 0, 0)]
///     .into_iter()
///     .map(|channels| Color::from(RGBColor::from(channels)))
///     .collect();
/// let sorted = sorter.sort(&colors, Direction::Backward);
/// assert_eq!(sorted.len(), 2);
/// assert_eq!(sorted[0].rgb, RGBColor { r: 1, g: 0, b: 0 });
/// ```
pub struct ColorSorter {
    strategy: Box<dyn SortingStrategy + Send + Sync>,
}

impl ColorSorter {
    /// Creates a sorter that uses the given strategy.
    pub fn new(strategy: Box<dyn SortingStrategy + Send + Sync>) -> ColorSorter {
        ColorSorter { strategy }
    }

    /// The strategy this sorter uses.
    pub fn strategy(&self) -> &(dyn SortingStrategy + Send + Sync) {
        self.strategy.as_ref()
    }

    /// Drops repeated colors and sorts the rest. [`Direction::Backward`] is the forward result
    /// reversed, ties included, rather than a separate descending sort.
    pub fn sort(&self, colors: &[Color], direction: Direction) -> Vec<Color> {
        let unique = dedup_colors(colors.iter().cloned());
        let mut sorted = self.strategy.sort(&unique);
        if direction == Direction::Backward {
            sorted.reverse();
        }
        debug!(
            strategy = %self.strategy.name(),
            %direction,
            input = colors.len(),
            unique = sorted.len(),
            "sorted colors"
        );
        sorted
    }
}
