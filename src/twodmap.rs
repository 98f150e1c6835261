// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// Scratch space for a single seam search: an addressable
/// two-dimensional field holding whatever the search needs per
/// pixel, in practice the running distance and the offset back to the
/// predecessor in the row above.
#[derive(Debug)]
pub struct TwoDimensionalMap<P: Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// A map with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The cells of row `y`, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }
}

impl<P: Copy + Default> TwoDimensionalMap<P> {
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap::filled(width, height, P::default())
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// One cell of the seam search: the cheapest known cost of any path
/// reaching this pixel from the top row, and which way that path came
/// from (-1, 0 or +1 columns relative to this one).
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct DistanceAndOffset {
    pub distance: f64,
    pub offset: i8,
}

impl Default for DistanceAndOffset {
    fn default() -> Self {
        DistanceAndOffset {
            distance: f64::INFINITY,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_addressed_row_major() {
        let mut map: TwoDimensionalMap<u32> = TwoDimensionalMap::new(3, 2);
        map[(2, 0)] = 7;
        map[(0, 1)] = 9;
        assert_eq!(map.row(0), [0, 0, 7]);
        assert_eq!(map.row(1), [9, 0, 0]);
    }

    #[test]
    fn unreached_cells_are_infinitely_far() {
        let map: TwoDimensionalMap<DistanceAndOffset> = TwoDimensionalMap::new(2, 2);
        assert!(map[(1, 1)].distance.is_infinite());
        assert_eq!(map[(1, 1)].offset, 0);
    }
}
