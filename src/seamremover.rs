// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove a seam from a grid
//!
//! Both directions build a fresh row-major buffer for the smaller
//! grid.  A vertical seam takes exactly one pixel out of every row, so
//! skipping it while walking the old grid row by row already lands
//! every survivor in place.  A horizontal seam takes a pixel from a
//! different row in each column, so there every cell of the new grid
//! instead looks up its source: the same pixel above the seam, the one
//! below it otherwise.
//!
//! The seam is checked in full before the grid is touched: a removal
//! either happens completely or not at all.

use crate::cq;
use crate::errors::{Axis, CarveError, Result};
use crate::pixelgrid::{GridView, PixelGrid};
use itertools::iproduct;

// A seam must have one entry per row (or column), and every entry
// must name a pixel that exists in that row (or column).
fn check_seam(seam: &[u32], expected: u32, limit: u32) -> Result<()> {
    if seam.len() != expected as usize {
        return Err(CarveError::SeamLength {
            expected: expected as usize,
            found: seam.len(),
        });
    }
    match seam.iter().enumerate().find(|(_, value)| **value >= limit) {
        Some((index, &value)) => Err(CarveError::SeamOutOfRange {
            index,
            value,
            limit,
        }),
        None => Ok(()),
    }
}

/// Remove one pixel from every row, at the x-coordinate the seam gives
/// for that row.  The width shrinks by exactly one.
pub fn remove_vertical_seam(grid: &mut PixelGrid, seam: &[u32]) -> Result<()> {
    let (width, height) = grid.dimensions();
    if width <= 1 {
        return Err(CarveError::Degenerate { axis: Axis::Width });
    }
    check_seam(seam, height, width)?;

    let pixels = iproduct!(0..height, 0..width)
        .filter(|&(y, x)| x != seam[y as usize])
        .map(|(y, x)| grid[(x, y)])
        .collect();
    grid.replace(width - 1, height, pixels);
    Ok(())
}

/// Remove one pixel from every column, at the y-coordinate the seam
/// gives for that column.  The height shrinks by exactly one.
pub fn remove_horizontal_seam(grid: &mut PixelGrid, seam: &[u32]) -> Result<()> {
    let (width, height) = grid.dimensions();
    if height <= 1 {
        return Err(CarveError::Degenerate { axis: Axis::Height });
    }
    check_seam(seam, width, height)?;

    let pixels = iproduct!(0..height - 1, 0..width)
        .map(|(y, x)| grid[(x, cq!(y < seam[x as usize], y, y + 1))])
        .collect();
    grid.replace(width, height - 1, pixels);
    Ok(())
}
