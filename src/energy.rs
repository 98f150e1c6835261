// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel
//!
//! The dual-gradient energy: the Euclidean length of the color
//! difference between a pixel's left and right neighbors, together
//! with the difference between its upper and lower neighbors.
//!
//! Neighbors wrap around the edges of the grid, so the left neighbor
//! of column 0 is the last column and the pixel below the last row is
//! in the first.  Nothing is cached; the energy is always that of the
//! grid as it stands right now.

use crate::pixelgrid::{GridView, Pixel};
use itertools::izip;
use num_traits::pow;

/// Toroidal index: `i` taken modulo `n`, always in `0..n` even when
/// `i` is negative.
#[inline]
pub fn wrap(i: i64, n: i64) -> i64 {
    ((i % n) + n) % n
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
#[inline]
fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> i32 {
    izip!(p1.channels().iter(), p2.channels().iter())
        .map(|(c1, c2)| pow(i32::from(*c1) - i32::from(*c2), 2))
        .sum()
}

/// (Grid, x, y) -> Energy
///
/// ```text
/// e(x,y) = sqrt(|Δx|² + |Δy|²)
/// ```
///
/// The coordinate must lie inside the grid; only the neighbors wrap,
/// never the pixel asked about.
pub fn pixel_energy<G: GridView>(grid: &G, x: u32, y: u32) -> f64 {
    assert!(
        grid.in_bounds(x, y),
        "pixel ({}, {}) outside {}x{} grid",
        x,
        y,
        grid.width(),
        grid.height()
    );
    let (width, height) = (i64::from(grid.width()), i64::from(grid.height()));
    let (xi, yi) = (i64::from(x), i64::from(y));
    let at = |x: i64, y: i64| grid.get_pixel(wrap(x, width) as u32, wrap(y, height) as u32);

    let horizontal = energy_of_pair(&at(xi - 1, yi), &at(xi + 1, yi));
    let vertical = energy_of_pair(&at(xi, yi - 1), &at(xi, yi + 1));
    f64::from(horizontal + vertical).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flipper::Flipper;
    use crate::pixelgrid::PixelGrid;
    use itertools::iproduct;

    fn gray(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    #[test]
    fn wrap_handles_negative_indices() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(2, 5), 2);
        assert_eq!(wrap(-6, 5), 4);
        assert_eq!(wrap(1, 1), 0);
    }

    #[test]
    fn uniform_grid_has_no_energy() {
        let grid = PixelGrid::filled(4, 3, Pixel::new(12, 200, 7)).unwrap();
        for (y, x) in iproduct!(0..3, 0..4) {
            assert_eq!(pixel_energy(&grid, x, y), 0.0);
        }
    }

    #[test]
    fn neighbors_wrap_around_the_edges() {
        // Row: 0 10 20; the left neighbor of column 0 is column 2.
        let grid = PixelGrid::new(3, 1, vec![gray(0), gray(10), gray(20)]).unwrap();
        // Column 0: left = 20, right = 10.  Three channels of 10² each.
        assert_eq!(pixel_energy(&grid, 0, 0), 300f64.sqrt());
        // Column 1: left = 0, right = 20.
        assert_eq!(pixel_energy(&grid, 1, 0), 1200f64.sqrt());
        // Column 2: left = 10, right = 0.
        assert_eq!(pixel_energy(&grid, 2, 0), 300f64.sqrt());
    }

    #[test]
    fn channels_contribute_independently() {
        let rows = vec![
            vec![Pixel::new(0, 0, 0), Pixel::new(0, 0, 0), Pixel::new(0, 0, 0)],
            vec![Pixel::new(255, 0, 0), Pixel::new(0, 0, 0), Pixel::new(0, 3, 4)],
            vec![Pixel::new(0, 0, 0), Pixel::new(0, 0, 0), Pixel::new(0, 0, 0)],
        ];
        let grid = PixelGrid::from_rows(rows).unwrap();
        // Horizontal: (255-0)² + (0-3)² + (0-4)²; vertical neighbors are equal.
        assert_eq!(pixel_energy(&grid, 1, 1), (65025f64 + 9.0 + 16.0).sqrt());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_pixels_are_not_wrapped() {
        let grid = PixelGrid::filled(3, 3, gray(9)).unwrap();
        pixel_energy(&grid, 7, 9);
    }

    #[test]
    #[should_panic]
    fn last_column_plus_one_is_out_of_bounds() {
        let grid = PixelGrid::filled(3, 2, gray(9)).unwrap();
        pixel_energy(&grid, 3, 0);
    }

    #[test]
    fn energy_is_non_negative_and_deterministic() {
        let pixels = (0..20u32)
            .map(|i| Pixel::new((i * 37 % 256) as u8, (i * 91 % 256) as u8, (i * 13) as u8))
            .collect();
        let grid = PixelGrid::new(5, 4, pixels).unwrap();
        for (y, x) in iproduct!(0..4, 0..5) {
            let e = pixel_energy(&grid, x, y);
            assert!(e >= 0.0);
            assert_eq!(e, pixel_energy(&grid, x, y));
        }
    }

    #[test]
    fn flipped_energy_matches() {
        let pixels = (0..12u8).map(|i| Pixel::new(i * 20, i, 255 - i)).collect();
        let grid = PixelGrid::new(4, 3, pixels).unwrap();
        let flipped = Flipper::new(&grid);
        for (y, x) in iproduct!(0..3, 0..4) {
            assert_eq!(pixel_energy(&grid, x, y), pixel_energy(&flipped, y, x));
        }
    }
}
