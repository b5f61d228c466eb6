//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the palette entry [`Color`], the RGB and HSL formats it carries, the error
//! type, and everything needed to sort. The other format types and the individual strategies are
//! left in their own modules.

pub use crate::color::{Color, OriginalFormat};
pub use crate::colors::{ColorFormatModel, HSLColor, RGBColor};
pub use crate::error::ColorError;
pub use crate::sorting::strategies::SortingStrategy;
pub use crate::sorting::{sort, ColorSorter, Direction, SortOptions, SortingStrategyName};
