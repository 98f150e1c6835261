// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grid dimensional flipper
//!
//! A proxy for any `GridView` that maps the width to the original
//! height, and vice versa, as well as every x to y and vice versa.
//!
//! Searching for a horizontal seam on a grid is exactly searching for
//! a vertical seam on its flipped view, so the seam finder only ever
//! has to know how to walk from top to bottom.

use crate::pixelgrid::{GridView, Pixel};

pub struct Flipper<'a, G: GridView> {
    pub grid: &'a G,
}

impl<'a, G: GridView> Flipper<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Flipper { grid }
    }
}

impl<'a, G: GridView> GridView for Flipper<'a, G> {
    fn width(&self) -> u32 {
        self.grid.height()
    }

    fn height(&self) -> u32 {
        self.grid.width()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        self.grid.get_pixel(y, x)
    }
}
