//! This file implements the index of a point along a Hilbert curve in any number of dimensions,
//! using Skilling's method of transposing the coordinate bits. A Hilbert curve visits every cell of a
//! grid exactly once while almost always stepping to a neighboring cell, so points that are close on
//! the curve are close in space. Sorting colors by their position on a 3D curve through the RGB cube
//! therefore keeps similar colors next to each other, which no lexicographic ordering can do.
//!
//! The computation works one level of the grid at a time, from the coarsest to the finest:
//!
//! 1. Find how many bits `m` the largest coordinate needs.
//! 2. Transpose: the `i`th chunk gathers bit `m - 1 - i` of every coordinate into one `n`-bit number,
//!    with the first coordinate as the most significant bit.
//! 3. For each chunk, undo the current rotation of the sub-cube (tracked as a pair of corners, the
//!    entry and exit points `start` and `end`), and Gray-decode the result to get the digit of the
//!    curve index at this level. The digit also decides where the child sub-cube is entered and
//!    exited, which gives the rotation for the next level.
//! 4. Read the digits as a number in base `2^n`, most significant first.
//!
//! Every step here has to be exact: a mistake in a rotation or in the Gray coding still produces a
//! valid permutation of the grid, just not a Hilbert one, and the only way to notice is to compare
//! indices directly. The tests pin the small cases down for that reason.

use num::BigUint;

use crate::colors::RGBColor;

/// The most dimensions a point can have. Each level's digit is kept in a `u64`, and the rotation
/// arithmetic multiplies two `n`-bit numbers together.
pub const MAXIMUM_DIMENSIONS: usize = 32;

/// Returns the Hilbert curve index of a point, as one digit per level of the grid, coarsest
/// first. Each digit is a number between 0 and `2^n - 1`, where `n` is the number of coordinates.
///
/// The number of levels is the number of bits needed by the largest coordinate, and is never less
/// than 1. An empty point has no digits.
/// # Panics
/// Panics if the point has more than [`MAXIMUM_DIMENSIONS`] coordinates.
/// # Example
/// ```
/// # use hueorder::hilbert::hilbert_digits;
/// // (2, 1) is the last cell of the second quadrant the curve visits in a 4x4 grid
/// assert_eq!(hilbert_digits(&[2, 1]), vec![1, 3]);
/// ```
pub fn hilbert_digits(coords: &[u64]) -> Vec<u64> {
    let dimensions = coords.len();
    if dimensions == 0 {
        return vec![];
    }
    assert!(
        dimensions <= MAXIMUM_DIMENSIONS,
        "a Hilbert index supports up to {} dimensions, got {}",
        MAXIMUM_DIMENSIONS,
        dimensions
    );

    let bits = bits_needed(coords);
    let mask: u64 = (1 << dimensions) - 1;
    let (mut start, mut end) = initial_corners(bits, dimensions);

    transpose_bits(coords, bits)
        .into_iter()
        .map(|chunk| {
            let digit = gray_decode(rotate_right(chunk ^ start, mask));
            let (child_start, child_end) = child_corners(start, end, mask, digit);
            start = child_start;
            end = child_end;
            digit
        })
        .collect()
}

/// Returns the Hilbert curve index of a point with any number of coordinates (up to
/// [`MAXIMUM_DIMENSIONS`]). The index can be as large as `2^(n * m)`, so it's returned as a
/// `BigUint`; for colors, [`RGBColor::hilbert_index`] gives a plain integer.
/// # Panics
/// Panics if the point has more than [`MAXIMUM_DIMENSIONS`] coordinates.
/// # Example
/// ```
/// # use hueorder::hilbert::hilbert_index;
/// # use num::BigUint;
/// // going around the four cells of a 2x2 grid
/// let cells = [[0, 0], [1, 0], [1, 1], [0, 1]];
/// let indices: Vec<BigUint> = cells.iter().map(|cell| hilbert_index(cell)).collect();
/// assert_eq!(indices, vec![0u32.into(), 1u32.into(), 2u32.into(), 3u32.into()]);
/// ```
pub fn hilbert_index(coords: &[u64]) -> BigUint {
    let dimensions = coords.len();
    hilbert_digits(coords)
        .into_iter()
        .fold(BigUint::from(0u32), |index, digit| (index << dimensions) + digit)
}

impl RGBColor {
    /// Returns the index of this color along a Hilbert curve through the RGB cube, with red, green
    /// and blue as the three coordinates. The channel values are used directly, from 0 to 255, so the
    /// index fits in 24 bits.
    /// # Example
    /// ```
    /// # use hueorder::colors::RGBColor;
    /// let gray = RGBColor { r: 100, g: 100, b: 100 };
    /// let redder = RGBColor { r: 101, g: 100, b: 100 };
    /// let white = RGBColor { r: 250, g: 250, b: 250 };
    /// let near = (gray.hilbert_index() as i64 - redder.hilbert_index() as i64).abs();
    /// let far = (gray.hilbert_index() as i64 - white.hilbert_index() as i64).abs();
    /// assert!(near < far);
    /// ```
    pub fn hilbert_index(&self) -> u64 {
        let coords = [u64::from(self.r), u64::from(self.g), u64::from(self.b)];
        hilbert_digits(&coords)
            .into_iter()
            .fold(0, |index, digit| (index << coords.len()) | digit)
    }
}

// ceil(log2(max + 1)), but at least 1 so that the origin still gets a digit
fn bits_needed(coords: &[u64]) -> u32 {
    let biggest = coords.iter().cloned().max().unwrap_or(0);
    (64 - biggest.leading_zeros()).max(1)
}

// chunk i holds bit (bits - 1 - i) of every coordinate, the first coordinate in the top bit
fn transpose_bits(coords: &[u64], bits: u32) -> Vec<u64> {
    (0..bits)
        .rev()
        .map(|bit| {
            coords
                .iter()
                .fold(0, |chunk, coord| (chunk << 1) | ((coord >> bit) & 1))
        })
        .collect()
}

// the entry corner is the origin; the exit corner depends on how many levels there are, so that the
// curve always ends on the same face regardless of the grid size
fn initial_corners(bits: u32, dimensions: usize) -> (u64, u64) {
    let exponent = (-(i64::from(bits)) - 1).rem_euclid(dimensions as i64);
    (0, 1 << exponent)
}

// rotates an n-bit number right by one place, n being the bit count of mask
fn rotate_right(value: u64, mask: u64) -> u64 {
    let modulus = mask + 1;
    let shifted = value * (modulus / 2);
    (shifted | shifted / modulus) & mask
}

// the entry and exit corners of the sub-cube holding the given digit, expressed in the parent's frame
fn child_corners(start: u64, end: u64, mask: u64, digit: u64) -> (u64, u64) {
    // the even neighbor at or below, and the odd neighbor at or above, the digit
    let start_index = if digit == 0 { 0 } else { (digit - 1) & !1 };
    let end_index = mask.min((digit + 1) | 1);
    (
        corner(start, end, mask, start_index),
        corner(start, end, mask, end_index),
    )
}

// the Gray code of index, rotated into the orientation given by start and end
fn corner(start: u64, end: u64, mask: u64, index: u64) -> u64 {
    let modulus = mask + 1;
    let travel = start ^ end;
    let rotated = gray_encode(index) * (travel * 2);
    ((rotated | rotated / modulus) & mask) ^ start
}

fn gray_encode(index: u64) -> u64 {
    index ^ (index >> 1)
}

fn gray_decode(gray: u64) -> u64 {
    let mut decoded = gray;
    let mut shift = 1;
    loop {
        let div = decoded >> shift;
        decoded ^= div;
        if div <= 1 {
            return decoded;
        }
        shift <<= 1;
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_one_dimension_is_identity() {
        for x in 0..8u64 {
            assert_eq!(hilbert_index(&[x]), BigUint::from(x));
        }
    }

    #[test]
    fn test_two_dimensional_grid() {
        // rows are y, columns are x
        let expected: [[u32; 4]; 4] = [[0, 1, 4, 5], [3, 2, 7, 6], [14, 15, 8, 9], [13, 12, 11, 10]];
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(
                    hilbert_index(&[x as u64, y as u64]),
                    BigUint::from(expected[y][x]),
                    "cell ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_three_dimensional_cube() {
        let expected = [0, 7, 1, 6, 3, 4, 2, 5];
        let mut i = 0;
        for x in 0..2u64 {
            for y in 0..2u64 {
                for z in 0..2u64 {
                    assert_eq!(hilbert_index(&[x, y, z]), BigUint::from(expected[i] as u32));
                    i += 1;
                }
            }
        }
    }

    #[test]
    fn test_curve_is_a_permutation() {
        let mut seen = vec![false; 64];
        for x in 0..4u64 {
            for y in 0..4u64 {
                for z in 0..4u64 {
                    let index = RGBColor::from((x as u8, y as u8, z as u8)).hilbert_index();
                    assert!(!seen[index as usize], "index {} visited twice", index);
                    seen[index as usize] = true;
                }
            }
        }
        assert!(seen.iter().all(|&visited| visited));
    }

    #[test]
    fn test_rgb_indices() {
        let samples = [
            ((0, 0, 0), 0),
            ((235, 61, 52), 6785322),
            ((75, 214, 47), 2863240),
            ((212, 104, 4), 6411060),
            ((128, 128, 128), 11609234),
            ((255, 255, 255), 10785353),
            ((0, 0, 255), 14979657),
        ];
        for &(channels, expected) in samples.iter() {
            assert_eq!(RGBColor::from(channels).hilbert_index(), expected, "{:?}", channels);
        }
    }

    #[test]
    fn test_rgb_index_matches_general_index() {
        let rgb = RGBColor { r: 13, g: 22, b: 9 };
        assert_eq!(hilbert_index(&[13, 22, 9]), BigUint::from(rgb.hilbert_index()));
        assert_eq!(rgb.hilbert_index(), 6412);
    }

    #[test]
    fn test_channels_are_not_rescaled() {
        // the channels go into the curve as they are, 0 to 255, not multiplied by 255 again: the
        // rescaled red would need 16 bits per coordinate and land far past 2^24
        let red = RGBColor { r: 235, g: 61, b: 52 };
        assert!(red.hilbert_index() < 1 << 24);
        assert_eq!(
            hilbert_index(&[235 * 255, 61 * 255, 52 * 255]),
            BigUint::from(138404297929402u64)
        );
        assert_ne!(BigUint::from(red.hilbert_index()), hilbert_index(&[235 * 255, 61 * 255, 52 * 255]));
    }

    #[test]
    fn test_locality() {
        // neighbors one step apart in a single channel stay close on the curve
        let neighbors = [
            ((100, 100, 100), (101, 100, 100)),
            ((100, 100, 100), (100, 101, 100)),
            ((10, 200, 30), (10, 200, 31)),
            ((50, 60, 70), (50, 61, 70)),
        ];
        // points 200 or more apart land far away
        let distant = [((100, 100, 100), (250, 250, 250)), ((0, 0, 0), (200, 10, 10))];
        let gap = |a: (u8, u8, u8), b: (u8, u8, u8)| {
            (RGBColor::from(a).hilbert_index() as i64 - RGBColor::from(b).hilbert_index() as i64).abs()
        };
        let widest_near = neighbors.iter().map(|&(a, b)| gap(a, b)).max().unwrap_or(0);
        let narrowest_far = distant.iter().map(|&(a, b)| gap(a, b)).min().unwrap_or(0);
        assert!(widest_near < 8);
        assert!(narrowest_far > 1_000_000);
        assert!(widest_near < narrowest_far);
    }

    #[test]
    fn test_empty_point() {
        assert!(hilbert_digits(&[]).is_empty());
        assert_eq!(hilbert_index(&[]), BigUint::from(0u32));
    }

    #[test]
    fn test_gray_code() {
        for i in 0..1024 {
            assert_eq!(gray_decode(gray_encode(i)), i);
            // consecutive codes differ in one bit
            assert_eq!((gray_encode(i) ^ gray_encode(i + 1)).count_ones(), 1);
        }
    }

    #[test]
    #[should_panic]
    fn test_too_many_dimensions() {
        hilbert_digits(&[1; MAXIMUM_DIMENSIONS + 1]);
    }
}
