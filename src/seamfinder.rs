// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam
//!
//! A seam is the shortest path through an implicit DAG in which each
//! pixel points at the (up to) three pixels touching it in the next
//! row.  Costs are the dual-gradient energies of the pixels on the
//! path.  Only the vertical search exists; a horizontal seam is the
//! vertical seam of the flipped grid, and because the flip swaps the
//! roles of the axes its answer is already indexed by column and
//! valued by row.

use crate::cq;
use crate::energy::pixel_energy;
use crate::flipper::Flipper;
use crate::pixelgrid::GridView;
use crate::twodmap::{DistanceAndOffset, TwoDimensionalMap};

/// A list of offsets, one per row (vertical) or per column
/// (horizontal), naming the pixel to remove from that row or column.
/// Neighboring entries never differ by more than one.
pub type Seam = Vec<u32>;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// finders.
pub trait SeamFinder {
    /// A seam running from the top row to the bottom row: one
    /// x-coordinate per row.
    fn find_vertical_seam(&self) -> Seam;

    /// A seam running from the left column to the right column: one
    /// y-coordinate per column.
    fn find_horizontal_seam(&self) -> Seam;
}

/// Given a grid, return the list of x-coordinates that, when mapped
/// with the range (0..height), give the XY coordinates for each pixel
/// in the cheapest top-to-bottom seam.
///
/// Candidates are relaxed left, straight, right, and a cell is only
/// updated by a strictly cheaper path, so of several equally cheap
/// seams the one found first wins.  The same goes for the final
/// column: the leftmost of equal minima is chosen.
pub fn vertical_seam<G: GridView>(grid: &G) -> Seam {
    let (width, height) = grid.dimensions();
    let maxwidth = width - 1;
    let mut target: TwoDimensionalMap<DistanceAndOffset> = TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].distance = pixel_energy(grid, x, 0);
    }

    // Push every cell's distance down into the three cells below it.
    for y in 0..height - 1 {
        for x in 0..width {
            let here = target[(x, y)].distance;
            for below in cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1) {
                let candidate = here + pixel_energy(grid, below, y + 1);
                let cell = &mut target[(below, y + 1)];
                if candidate < cell.distance {
                    *cell = DistanceAndOffset {
                        distance: candidate,
                        offset: (i64::from(x) - i64::from(below)) as i8,
                    };
                }
            }
        }
    }

    // Find the x coordinate of the bottommost seam with the least energy.
    let bottom = target.row(height - 1);
    let mut seam_col = (1..width).fold(0, |best, x| {
        cq!(bottom[x as usize].distance < bottom[best as usize].distance, x, best)
    });

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Seam::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            let offset = i64::from(target[(seam_col, y)].offset);
            seam_col = (i64::from(seam_col) + offset) as u32;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Given a grid, return the list of y-coordinates that, when mapped
/// with the range (0..width), give the XY coordinates for each pixel
/// in the cheapest left-to-right seam.
pub fn horizontal_seam<G: GridView>(grid: &G) -> Seam {
    vertical_seam(&Flipper::new(grid))
}

/// The basic seam engine: holds onto a grid and answers with the
/// dual-gradient seams for it.
pub struct DualGradient<'a, G: GridView> {
    grid: &'a G,
}

impl<'a, G: GridView> DualGradient<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        DualGradient { grid }
    }
}

impl<'a, G: GridView> SeamFinder for DualGradient<'a, G> {
    fn find_vertical_seam(&self) -> Seam {
        vertical_seam(self.grid)
    }

    fn find_horizontal_seam(&self) -> Seam {
        horizontal_seam(self.grid)
    }
}
