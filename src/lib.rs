//! Hueorder is a library for putting palettes in order. Given a handful of colors, in RGB, HSL or
//! hexcode, it converts between those formats and lays the palette out with one of seven sorting
//! strategies: by channel, by hue, by perceived brightness, by stepped hue buckets that snake from
//! light to dark and back, or along a Hilbert curve through the RGB cube. The last one is the
//! default, because it is the only one that reliably keeps colors that look alike next to each
//! other.
//!
//! The crate is organized leaf-first: [`colors`] holds the plain format types and the conversions
//! between them, [`calculators`] the hue and saturation math they share, [`hilbert`] the curve
//! index, [`color`] the palette entry [`Color`](color::Color) that ties the formats together, and
//! [`sorting`] the strategies and the sorter that runs them. Lines of text such as
//! `#6690ce Danube` or `hsl(102, 44%, 6%)` parse straight into a `Color`.
//!
//! Everything here is pure computation: no I/O, no global state, and the same set of colors always
//! sorts the same way regardless of the order it's given in. The crate logs through `tracing` at
//! debug and trace level and leaves installing a subscriber to the application.
//!
//! # Example
//! ```
//! # use hueorder::prelude::*;
//! let palette: Vec<Color> = ["#eb3d34", "rgb(75, 214, 47)", "hsl(29, 98%, 42%)"]
//!     .iter()
//!     .map(|line| line.parse::<Color>())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! let sorted = sort(&palette, SortingStrategyName::Hilbert, Direction::Forward);
//! let hexcodes: Vec<&str> = sorted.iter().map(|c| c.hexcode.as_str()).collect();
//! assert_eq!(hexcodes, vec!["#4bd62f", "#d46802", "#eb3d34"]);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but reference values are easier to check when they're copied
// in full
#![allow(clippy::unreadable_literal)]

extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod calculators;
pub mod color;
pub mod colors;
pub mod consts;
mod csscolor;
pub mod error;
pub mod hilbert;
pub mod prelude;
pub mod sorting;
